//! Fantasy Trends - season stat cleaning, running back metrics and
//! regression scatterplots.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;
pub mod pipeline;
pub mod stats;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use pipeline::{analyze, run, AnalysisReport};
