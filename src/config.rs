//! Analysis settings, loadable from a JSON file.

use crate::error::Result;
use crate::stats::{FormulaMode, Scoring};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Thresholds, scoring and figure settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Quarterbacks need at least this many games to count as starters.
    pub min_qb_games: u32,
    /// Running backs need strictly more carries than this for the
    /// efficiency chart.
    pub min_rb_carries: u32,
    pub scoring: Scoring,
    pub formula: FormulaMode,
    pub figure_width: u32,
    pub figure_height: u32,
    pub out_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_qb_games: 13,
            min_rb_carries: 20,
            scoring: Scoring::ppr(),
            formula: FormulaMode::Intended,
            figure_width: 1500,
            figure_height: 1000,
            out_dir: PathBuf::from("figures"),
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = AnalysisConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AnalysisConfig::from_json_str(
            r#"{"min_qb_games": 10, "formula": "truncated", "scoring": {"reception": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(config.min_qb_games, 10);
        assert_eq!(config.min_rb_carries, 20);
        assert_eq!(config.formula, FormulaMode::Truncated);
        assert_eq!(config.scoring, Scoring::half_ppr());
    }

    #[test]
    fn test_invalid_json() {
        assert!(AnalysisConfig::from_json_str("{\"min_qb_games\": \"many\"}").is_err());
    }
}
