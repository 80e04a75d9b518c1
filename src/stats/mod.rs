//! Stats module - scoring, derived metrics, filters and regression

pub mod filters;
pub mod metrics;
pub mod regression;
pub mod scoring;

pub use filters::StatFilter;
pub use metrics::{FormulaMode, MetricCalculator};
pub use regression::{LinearFit, RegressionCalculator};
pub use scoring::{Scoring, ScoringPreset};
