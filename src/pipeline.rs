//! End-to-end analysis: load, clean, split, derive metrics, filter, and
//! describe the three charts.

use crate::charts::ScatterChart;
use crate::config::AnalysisConfig;
use crate::data::columns::{
    FANTASY_PT, POINTS_PER_GAME, RUSHING_YDS, TD_PER_USAGE, USAGE_PER_GAME,
};
use crate::data::{DataCleaner, DataLoader, PositionSplitter, PositionTables};
use crate::error::Result;
use crate::stats::{MetricCalculator, StatFilter};
use polars::prelude::*;
use std::path::Path;
use tracing::info;

pub const QB_RUSHING_CHART: &str = "qb_rushing_vs_points";
pub const RB_USAGE_CHART: &str = "rb_usage_vs_points";
pub const RB_EFFICIENCY_CHART: &str = "rb_efficiency_vs_points";

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Position subsets; the RB table carries the per-game metrics.
    pub tables: PositionTables,
    /// Quarterbacks meeting the games threshold.
    pub starting_qbs: DataFrame,
    /// Running backs over the carries threshold, with `TD/Usage`.
    pub established_rbs: DataFrame,
    pub charts: Vec<ScatterChart>,
}

/// Load a season export and run the full analysis.
pub fn run(path: &Path, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let raw = DataLoader::load_csv(path)?;
    analyze(raw, config)
}

/// Run the analysis on an already loaded, uncleaned table.
pub fn analyze(raw: DataFrame, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let cleaned = DataCleaner::clean(raw)?;
    let mut tables = PositionSplitter::split(&cleaned)?;

    let rb = std::mem::take(&mut tables.rb);
    tables.rb = MetricCalculator::running_back_metrics(rb, &config.scoring, config.formula)?;

    let starting_qbs = StatFilter::starting_quarterbacks(&tables.qb, config.min_qb_games)?;
    info!(
        min_games = config.min_qb_games,
        rows = starting_qbs.height(),
        "filtered starting quarterbacks"
    );

    let established_rbs = StatFilter::established_backs(&tables.rb, config.min_rb_carries)?;
    let established_rbs = MetricCalculator::add_td_per_usage(established_rbs)?;
    info!(
        min_carries = config.min_rb_carries,
        rows = established_rbs.height(),
        "filtered established running backs"
    );

    let charts = vec![
        ScatterChart::from_frame(
            &starting_qbs,
            QB_RUSHING_CHART,
            "Quarterback Rushing Yds vs Total Fantasy Pts",
            RUSHING_YDS,
            FANTASY_PT,
        )?,
        ScatterChart::from_frame(
            &tables.rb,
            RB_USAGE_CHART,
            "Running Back Usage vs Fantasy Pts/Game",
            USAGE_PER_GAME,
            POINTS_PER_GAME,
        )?,
        ScatterChart::from_frame(
            &established_rbs,
            RB_EFFICIENCY_CHART,
            "Running Back Efficiency vs Fantasy Pts/Game",
            TD_PER_USAGE,
            POINTS_PER_GAME,
        )?,
    ];

    for chart in &charts {
        match &chart.fit {
            Some(fit) => info!(chart = %chart.key, "{}", fit.summary()),
            None => info!(chart = %chart.key, points = chart.points.len(), "no trendline"),
        }
    }

    Ok(AnalysisReport {
        tables,
        starting_qbs,
        established_rbs,
        charts,
    })
}
