//! Data Cleaner Module
//! Drops unused columns, renames ambiguous labels, strips name decorations
//! and coerces stat columns to numbers.

use crate::data::columns::{self, AGE, PLAYER, RATE_COLUMNS};
use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use tracing::{debug, info};

/// Markers appended to player names (`*` Pro Bowl, `+` All-Pro).
pub const DECORATION_MARKERS: [char; 2] = ['*', '+'];

/// Handles the cleaning stage of the pipeline.
pub struct DataCleaner;

impl DataCleaner {
    /// Run every cleaning step in order.
    pub fn clean(df: DataFrame) -> Result<DataFrame> {
        let df = Self::drop_unused_columns(df)?;
        let df = Self::rename_columns(df)?;
        let df = Self::normalize_player_names(df)?;
        let df = Self::coerce_numeric(df)?;
        info!(rows = df.height(), columns = df.width(), "cleaned season stats");
        Ok(df)
    }

    /// Remove rank columns, alternate scoring formats and other noise.
    pub fn drop_unused_columns(mut df: DataFrame) -> Result<DataFrame> {
        for name in columns::UNUSED {
            Self::require(&df, name)?;
            df = df.drop(name)?;
        }
        debug!(dropped = columns::UNUSED.len(), "dropped unused columns");
        Ok(df)
    }

    /// Give suffixed duplicate labels their semantic names.
    pub fn rename_columns(mut df: DataFrame) -> Result<DataFrame> {
        for (from, to) in columns::RENAMES {
            Self::require(&df, from)?;
            df.rename(from, to.into())?;
        }
        debug!(renamed = columns::RENAMES.len(), "renamed ambiguous columns");
        Ok(df)
    }

    /// Truncate every player name at its first decoration marker.
    pub fn normalize_player_names(mut df: DataFrame) -> Result<DataFrame> {
        Self::require(&df, PLAYER)?;
        let names = df.column(PLAYER)?.str()?;
        let cleaned: StringChunked = names
            .into_iter()
            .map(|name| name.map(normalize_player_name))
            .collect();
        df.with_column(cleaned.with_name(PLAYER.into()).into_series())?;
        Ok(df)
    }

    /// Cast stat columns to `Float64`. Blank counting cells become zero;
    /// per-attempt rates and age keep their nulls.
    ///
    /// Zero-filling keeps a back with a blank `Tgt` in the usage chart, where
    /// a NaN-propagating reader would drop the row from the regression.
    pub fn coerce_numeric(mut df: DataFrame) -> Result<DataFrame> {
        for name in columns::NUMERIC_COLUMNS {
            let Some(column) = df.column(name).ok() else {
                continue;
            };
            let numeric = column
                .strict_cast(&DataType::Float64)
                .map_err(|_| AnalysisError::NonNumeric {
                    column: name.to_string(),
                })?;
            let numeric = if RATE_COLUMNS.contains(&name) || name == AGE {
                numeric
            } else {
                numeric.fill_null(FillNullStrategy::Zero)?
            };
            df.with_column(numeric)?;
        }
        Ok(df)
    }

    fn require(df: &DataFrame, name: &str) -> Result<()> {
        if df.get_column_index(name).is_none() {
            return Err(AnalysisError::missing(name));
        }
        Ok(())
    }
}

/// Keep only the part of a name before the first decoration marker.
pub fn normalize_player_name(name: &str) -> &str {
    name.split(&DECORATION_MARKERS[..])
        .next()
        .unwrap_or(name)
        .trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn raw_frame() -> DataFrame {
        df! {
            "Rk" => &[1i64, 2],
            "Player" => &["Christian McCaffrey*+", "Kyren Williams*"],
            "Tm" => &["SFO", "LAR"],
            "FantPos" => &["RB", "RB"],
            "Age" => &[27i64, 23],
            "G" => &[16i64, 12],
            "GS" => &[16i64, 12],
            "Cmp" => &[0i64, 0],
            "Att" => &[1i64, 0],
            "Yds" => &[0i64, 0],
            "TD" => &[0i64, 0],
            "Int" => &[0i64, 0],
            "Att.1" => &[272i64, 228],
            "Yds.1" => &[1459i64, 1144],
            "Y/A" => &[Some(5.36), None],
            "TD.1" => &[14i64, 12],
            "Tgt" => &[Some(83i64), None],
            "Rec" => &[67i64, 32],
            "Yds.2" => &[564i64, 206],
            "Y/R" => &[8.42, 6.44],
            "TD.2" => &[7i64, 3],
            "Fmb" => &[2i64, 3],
            "FL" => &[2i64, 2],
            "TD.3" => &[21i64, 15],
            "2PM" => &[0i64, 0],
            "2PP" => &[0i64, 0],
            "FantPt" => &[335i64, 216],
            "PPR" => &[391.3, 248.4],
            "DKPt" => &[401.3, 251.4],
            "FDPt" => &[363.3, 232.4],
            "VBD" => &[188i64, 69],
            "PosRank" => &[1i64, 3],
            "OvRank" => &[1i64, 12],
        }
        .unwrap()
    }

    #[test]
    fn test_normalize_player_name() {
        assert_eq!(normalize_player_name("Josh Allen*+"), "Josh Allen");
        assert_eq!(normalize_player_name("Puka Nacua*"), "Puka Nacua");
        assert_eq!(normalize_player_name("Sam LaPorta+"), "Sam LaPorta");
        assert_eq!(normalize_player_name("Bijan Robinson"), "Bijan Robinson");
        assert_eq!(normalize_player_name("*"), "");
    }

    #[test]
    fn test_clean_strips_decorations() {
        let df = DataCleaner::clean(raw_frame()).unwrap();
        let names = df.column(PLAYER).unwrap().str().unwrap();
        for name in names.into_iter().flatten() {
            assert!(!name.contains(&DECORATION_MARKERS[..]));
        }
        assert_eq!(names.get(0), Some("Christian McCaffrey"));
    }

    #[test]
    fn test_clean_drops_and_renames() {
        let df = DataCleaner::clean(raw_frame()).unwrap();
        for dropped in columns::UNUSED {
            assert!(df.get_column_index(dropped).is_none(), "{dropped} kept");
        }
        for (from, to) in columns::RENAMES {
            assert!(df.get_column_index(from).is_none(), "{from} kept");
            assert!(df.get_column_index(to).is_some(), "{to} missing");
        }
    }

    #[test]
    fn test_rename_mapping_is_injective() {
        let targets: HashSet<&str> = columns::RENAMES.iter().map(|(_, to)| *to).collect();
        assert_eq!(targets.len(), columns::RENAMES.len());

        // No renamed label collides with a column that survives cleaning
        let df = DataCleaner::clean(raw_frame()).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_missing_drop_column_is_fatal() {
        let df = raw_frame().drop("VBD").unwrap();
        let err = DataCleaner::clean(df).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumn { column } if column == "VBD"));
    }

    #[test]
    fn test_missing_rename_column_is_fatal() {
        let df = raw_frame().drop("Yds.2").unwrap();
        let err = DataCleaner::clean(df).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumn { column } if column == "Yds.2"));
    }

    #[test]
    fn test_coerce_numeric_fills_counts_not_rates() {
        let df = DataCleaner::clean(raw_frame()).unwrap();
        let targets = df.column(columns::TARGETS).unwrap().f64().unwrap();
        assert_eq!(targets.get(1), Some(0.0));
        let ypa = df.column(columns::YARDS_PER_ATT).unwrap().f64().unwrap();
        assert_eq!(ypa.get(1), None);
    }

    #[test]
    fn test_coerce_numeric_rejects_placeholder_text() {
        let df = df! {
            "Player" => &["A", "B"],
            "G" => &["16", "--"],
        }
        .unwrap();
        let err = DataCleaner::coerce_numeric(df).unwrap_err();
        assert!(matches!(err, AnalysisError::NonNumeric { column } if column == "G"));
    }
}
