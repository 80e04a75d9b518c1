//! Position Splitter Module
//! Partitions cleaned season stats into per-position tables, each projected
//! onto the columns that matter for that position's scoring.

use crate::data::columns::{
    FUMBLES_LOST, IDENTITY, PASSING_GROUP, POSITION, RECEIVING_GROUP, RUSHING_GROUP,
};
use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use std::fmt;
use tracing::info;

/// Primary roster position (`FantPos`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::Qb, Position::Rb, Position::Wr, Position::Te];

    /// Code as it appears in the `FantPos` column.
    pub fn code(self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
        }
    }

    /// Stat group kept for this position, excluding fumbles lost.
    pub fn stat_columns(self) -> Vec<&'static str> {
        match self {
            Position::Rb | Position::Wr => RUSHING_GROUP
                .iter()
                .chain(RECEIVING_GROUP.iter())
                .copied()
                .collect(),
            Position::Te => RECEIVING_GROUP.to_vec(),
            Position::Qb => RUSHING_GROUP
                .iter()
                .chain(PASSING_GROUP.iter())
                .copied()
                .collect(),
        }
    }

    /// Full projection: identity columns, stat group, fumbles lost.
    pub fn columns(self) -> Vec<&'static str> {
        let mut columns = IDENTITY.to_vec();
        columns.extend(self.stat_columns());
        columns.push(FUMBLES_LOST);
        columns
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The four position subsets. Independent tables, no shared state.
#[derive(Debug, Clone)]
pub struct PositionTables {
    pub qb: DataFrame,
    pub rb: DataFrame,
    pub wr: DataFrame,
    pub te: DataFrame,
}

impl PositionTables {
    pub fn get(&self, position: Position) -> &DataFrame {
        match position {
            Position::Qb => &self.qb,
            Position::Rb => &self.rb,
            Position::Wr => &self.wr,
            Position::Te => &self.te,
        }
    }
}

pub struct PositionSplitter;

impl PositionSplitter {
    /// Rows of one position, projected onto that position's columns.
    pub fn select_position(df: &DataFrame, position: Position) -> Result<DataFrame> {
        let columns = position.columns();
        for name in std::iter::once(&POSITION).chain(columns.iter()) {
            if df.get_column_index(name).is_none() {
                return Err(AnalysisError::missing(name));
            }
        }

        let projection: Vec<Expr> = columns.iter().map(|name| col(*name)).collect();
        let subset = df
            .clone()
            .lazy()
            .filter(col(POSITION).eq(lit(position.code())))
            .select(projection)
            .collect()?;
        Ok(subset)
    }

    /// Split cleaned stats into QB, RB, WR and TE tables.
    pub fn split(df: &DataFrame) -> Result<PositionTables> {
        let tables = PositionTables {
            qb: Self::select_position(df, Position::Qb)?,
            rb: Self::select_position(df, Position::Rb)?,
            wr: Self::select_position(df, Position::Wr)?,
            te: Self::select_position(df, Position::Te)?,
        };
        for position in Position::ALL {
            info!(
                position = %position,
                rows = tables.get(position).height(),
                "split position subset"
            );
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::columns::*;

    fn cleaned_frame() -> DataFrame {
        df! {
            PLAYER => &["Josh Allen", "Christian McCaffrey", "Tyreek Hill", "Sam LaPorta", "Kyle Juszczyk"],
            TEAM => &["BUF", "SFO", "MIA", "DET", "SFO"],
            POSITION => &["QB", "RB", "WR", "TE", "FB"],
            AGE => &[27.0, 27.0, 29.0, 22.0, 32.0],
            GAMES => &[17.0, 16.0, 16.0, 17.0, 16.0],
            PASSING_ATT => &[579.0, 1.0, 0.0, 0.0, 0.0],
            PASSING_YDS => &[4306.0, 0.0, 0.0, 0.0, 0.0],
            PASSING_TD => &[29.0, 0.0, 0.0, 0.0, 0.0],
            INTERCEPTIONS => &[18.0, 0.0, 0.0, 0.0, 0.0],
            RUSHING_ATT => &[111.0, 272.0, 6.0, 0.0, 2.0],
            RUSHING_YDS => &[524.0, 1459.0, 15.0, 0.0, 9.0],
            YARDS_PER_ATT => &[Some(4.72), Some(5.36), Some(2.5), None, Some(4.5)],
            RUSHING_TD => &[15.0, 14.0, 0.0, 0.0, 0.0],
            TARGETS => &[0.0, 83.0, 171.0, 121.0, 24.0],
            RECEPTIONS => &[0.0, 67.0, 119.0, 86.0, 19.0],
            RECEIVING_YDS => &[0.0, 564.0, 1799.0, 889.0, 200.0],
            YARDS_PER_REC => &[None, Some(8.42), Some(15.12), Some(10.34), Some(10.53)],
            RECEIVING_TD => &[0.0, 7.0, 13.0, 10.0, 1.0],
            FUMBLES_LOST => &[4.0, 2.0, 1.0, 0.0, 0.0],
            TOTAL_TD => &[15.0, 21.0, 13.0, 10.0, 1.0],
            FANTASY_PT => &[392.0, 335.0, 256.0, 165.0, 27.0],
        }
        .unwrap()
    }

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_subset_columns_match_projection() {
        let tables = PositionSplitter::split(&cleaned_frame()).unwrap();
        for position in Position::ALL {
            let expected: Vec<String> =
                position.columns().iter().map(|s| s.to_string()).collect();
            assert_eq!(names(tables.get(position)), expected, "{position}");
        }
    }

    #[test]
    fn test_wr_has_no_passing_columns() {
        let tables = PositionSplitter::split(&cleaned_frame()).unwrap();
        for column in PASSING_GROUP {
            assert!(tables.wr.get_column_index(column).is_none());
        }
    }

    #[test]
    fn test_te_has_no_rushing_columns() {
        let tables = PositionSplitter::split(&cleaned_frame()).unwrap();
        for column in RUSHING_GROUP {
            assert!(tables.te.get_column_index(column).is_none());
        }
        assert!(tables.te.get_column_index(FUMBLES_LOST).is_some());
    }

    #[test]
    fn test_rows_partition_by_position() {
        let tables = PositionSplitter::split(&cleaned_frame()).unwrap();
        assert_eq!(tables.qb.height(), 1);
        assert_eq!(tables.rb.height(), 1);
        assert_eq!(tables.wr.height(), 1);
        assert_eq!(tables.te.height(), 1);

        let rb_names = tables.rb.column(PLAYER).unwrap().str().unwrap();
        assert_eq!(rb_names.get(0), Some("Christian McCaffrey"));
    }

    #[test]
    fn test_missing_stat_column_is_fatal() {
        let df = cleaned_frame().drop(TARGETS).unwrap();
        let err = PositionSplitter::select_position(&df, Position::Te).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumn { column } if column == TARGETS));
    }
}
