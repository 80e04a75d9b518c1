//! Error types for the season analysis pipeline

use polars::prelude::PolarsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV header: {0}")]
    Csv(#[from] csv::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Expected column not found: {column}")]
    MissingColumn { column: String },

    #[error("Column {column} contains non-numeric values")]
    NonNumeric { column: String },

    #[error("Header has {header} columns but the data has {body}")]
    ColumnCountMismatch { header: usize, body: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to render chart: {message}")]
    Render { message: String },
}

impl AnalysisError {
    pub fn missing(column: &str) -> Self {
        AnalysisError::MissingColumn {
            column: column.to_string(),
        }
    }
}
