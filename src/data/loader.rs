//! CSV Data Loader Module
//! Reads a season export into a DataFrame using Polars.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Loads season exports whose header repeats labels across stat groups.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file, suffixing repeated header labels with `.1`, `.2`, ...
    pub fn load_csv(path: &Path) -> Result<DataFrame> {
        let header = Self::read_header(path)?;
        debug!(columns = header.len(), "read header");

        // Polars would mangle duplicate labels its own way, so the header row
        // is skipped here and the deduplicated labels are applied afterwards.
        let mut df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_skip_rows(1)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        if df.width() != header.len() {
            return Err(AnalysisError::ColumnCountMismatch {
                header: header.len(),
                body: df.width(),
            });
        }
        df.set_column_names(header.iter().map(String::as_str))?;

        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded season stats"
        );
        Ok(df)
    }

    fn read_header(path: &Path) -> Result<Vec<String>> {
        let mut reader = csv::Reader::from_path(path)?;
        let labels: Vec<String> = reader
            .headers()?
            .iter()
            .map(|label| label.trim().to_string())
            .collect();
        Ok(Self::dedupe_labels(&labels))
    }

    /// First occurrence keeps its label; repeats become `label.1`, `label.2`.
    pub fn dedupe_labels(labels: &[String]) -> Vec<String> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        labels
            .iter()
            .map(|label| {
                let count = seen.entry(label.as_str()).or_insert(0);
                let name = if *count == 0 {
                    label.clone()
                } else {
                    format!("{}.{}", label, count)
                };
                *count += 1;
                name
            })
            .collect()
    }

    /// Get list of column names.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_labels_suffixes_repeats() {
        let deduped = DataLoader::dedupe_labels(&labels(&[
            "Player", "Yds", "TD", "Yds", "TD", "Yds", "TD", "TD",
        ]));
        assert_eq!(
            deduped,
            labels(&["Player", "Yds", "TD", "Yds.1", "TD.1", "Yds.2", "TD.2", "TD.3"])
        );
    }

    #[test]
    fn test_dedupe_labels_keeps_unique() {
        let raw = labels(&["Rk", "Player", "Tm"]);
        assert_eq!(DataLoader::dedupe_labels(&raw), raw);
    }

    #[test]
    fn test_load_csv_applies_deduplicated_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Player,Att,Yds,Att,Yds").unwrap();
        writeln!(file, "A,10,100,5,20").unwrap();
        writeln!(file, "B,0,0,12,60").unwrap();

        let df = DataLoader::load_csv(file.path()).unwrap();
        assert_eq!(
            DataLoader::column_names(&df),
            labels(&["Player", "Att", "Yds", "Att.1", "Yds.1"])
        );
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = DataLoader::load_csv(Path::new("/nonexistent/season.csv"));
        assert!(result.is_err());
    }
}
