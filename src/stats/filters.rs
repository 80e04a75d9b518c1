//! Threshold filters applied before plotting.

use crate::data::columns::{GAMES, RUSHING_ATT};
use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use tracing::debug;

pub struct StatFilter;

impl StatFilter {
    /// Quarterbacks who played at least `min_games` (inclusive).
    pub fn starting_quarterbacks(df: &DataFrame, min_games: u32) -> Result<DataFrame> {
        Self::filter(df, GAMES, col(GAMES).gt_eq(lit(min_games as f64)))
    }

    /// Running backs with strictly more than `min_carries` rushing attempts.
    pub fn established_backs(df: &DataFrame, min_carries: u32) -> Result<DataFrame> {
        Self::filter(
            df,
            RUSHING_ATT,
            col(RUSHING_ATT).gt(lit(min_carries as f64)),
        )
    }

    fn filter(df: &DataFrame, column: &str, predicate: Expr) -> Result<DataFrame> {
        if df.get_column_index(column).is_none() {
            return Err(AnalysisError::missing(column));
        }
        let filtered = df.clone().lazy().filter(predicate).collect()?;
        debug!(
            column,
            before = df.height(),
            after = filtered.height(),
            "applied threshold filter"
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::columns::PLAYER;

    #[test]
    fn test_starting_quarterbacks_inclusive() {
        let df = df! {
            PLAYER => &["A", "B", "C", "D"],
            GAMES => &[10.0, 13.0, 17.0, 5.0],
        }
        .unwrap();
        let starters = StatFilter::starting_quarterbacks(&df, 13).unwrap();
        let games: Vec<Option<f64>> = starters
            .column(GAMES)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(games, vec![Some(13.0), Some(17.0)]);
    }

    #[test]
    fn test_established_backs_exclusive() {
        let df = df! {
            PLAYER => &["A", "B", "C", "D"],
            RUSHING_ATT => &[19.0, 20.0, 21.0, 250.0],
        }
        .unwrap();
        let backs = StatFilter::established_backs(&df, 20).unwrap();
        let names = backs.column(PLAYER).unwrap().str().unwrap();
        let names: Vec<Option<&str>> = names.into_iter().collect();
        assert_eq!(names, vec![Some("C"), Some("D")]);
    }

    #[test]
    fn test_filter_requires_column() {
        let df = df! { PLAYER => &["A"] }.unwrap();
        assert!(StatFilter::starting_quarterbacks(&df, 13).is_err());
    }
}
