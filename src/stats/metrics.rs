//! Running Back Metrics Module
//! Derives fantasy points, per-game rates and touchdown efficiency.

use crate::data::columns::{
    FANTASY_POINTS, FUMBLES_LOST, GAMES, POINTS_PER_GAME, RECEIVING_TD, RECEIVING_YDS,
    RECEPTIONS, RUSHING_ATT, RUSHING_TD, RUSHING_YDS, TARGETS, TD_PER_USAGE, USAGE_PER_GAME,
};
use crate::error::{AnalysisError, Result};
use crate::stats::Scoring;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which fantasy points expression to evaluate.
///
/// `Intended` is the full PPR line. `Truncated` keeps only the rushing and
/// reception terms, matching a worksheet whose second line (receiving yards,
/// receiving touchdowns, fumbles) was evaluated as a separate statement and
/// thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaMode {
    #[default]
    Intended,
    Truncated,
}

/// Counting stats that feed the fantasy points formula.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RbLine {
    pub rushing_yds: f64,
    pub rushing_td: f64,
    pub receptions: f64,
    pub receiving_yds: f64,
    pub receiving_td: f64,
    pub fumbles_lost: f64,
}

/// Fantasy points for a single season line.
pub fn fantasy_points(line: &RbLine, scoring: &Scoring, mode: FormulaMode) -> f64 {
    let rushing_and_catches = line.rushing_yds * scoring.rushing_yard
        + line.rushing_td * scoring.rushing_td
        + line.receptions * scoring.reception;
    match mode {
        FormulaMode::Intended => {
            rushing_and_catches
                + line.receiving_yds * scoring.receiving_yard
                + line.receiving_td * scoring.receiving_td
                + line.fumbles_lost * scoring.fumble_lost
        }
        FormulaMode::Truncated => rushing_and_catches,
    }
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `total / games` rounded to two decimals; `None` for zero games.
pub fn per_game(total: f64, games: f64) -> Option<f64> {
    (games > 0.0).then(|| round2(total / games))
}

/// Touchdowns per touch; `None` when the player had no usage.
pub fn td_per_usage(touchdowns: f64, usage: f64) -> Option<f64> {
    (usage > 0.0).then(|| touchdowns / usage)
}

/// Adds derived columns to the running back table.
pub struct MetricCalculator;

impl MetricCalculator {
    /// Fantasy points, points per game and usage per game, in that order.
    pub fn running_back_metrics(
        df: DataFrame,
        scoring: &Scoring,
        mode: FormulaMode,
    ) -> Result<DataFrame> {
        let df = Self::add_fantasy_points(df, scoring, mode)?;
        Self::add_per_game_rates(df)
    }

    pub fn add_fantasy_points(
        mut df: DataFrame,
        scoring: &Scoring,
        mode: FormulaMode,
    ) -> Result<DataFrame> {
        let rushing_yds = float_column(&df, RUSHING_YDS)?;
        let rushing_td = float_column(&df, RUSHING_TD)?;
        let receptions = float_column(&df, RECEPTIONS)?;
        let receiving_yds = float_column(&df, RECEIVING_YDS)?;
        let receiving_td = float_column(&df, RECEIVING_TD)?;
        let fumbles_lost = float_column(&df, FUMBLES_LOST)?;

        let points: Vec<Option<f64>> = (0..df.height())
            .map(|i| {
                let line = RbLine {
                    rushing_yds: rushing_yds.get(i)?,
                    rushing_td: rushing_td.get(i)?,
                    receptions: receptions.get(i)?,
                    receiving_yds: receiving_yds.get(i)?,
                    receiving_td: receiving_td.get(i)?,
                    fumbles_lost: fumbles_lost.get(i)?,
                };
                Some(fantasy_points(&line, scoring, mode))
            })
            .collect();

        debug!(?mode, rows = points.len(), "computed fantasy points");
        df.with_column(Column::new(FANTASY_POINTS.into(), points))?;
        Ok(df)
    }

    /// Requires `FantasyPoints` to be present.
    pub fn add_per_game_rates(mut df: DataFrame) -> Result<DataFrame> {
        let points = float_column(&df, FANTASY_POINTS)?;
        let games = float_column(&df, GAMES)?;
        let attempts = float_column(&df, RUSHING_ATT)?;
        let targets = float_column(&df, TARGETS)?;

        let mut points_per_game: Vec<Option<f64>> = Vec::with_capacity(df.height());
        let mut usage_per_game: Vec<Option<f64>> = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let g = games.get(i);
            points_per_game.push(points.get(i).zip(g).and_then(|(p, g)| per_game(p, g)));
            let usage = attempts.get(i).zip(targets.get(i)).map(|(a, t)| a + t);
            usage_per_game.push(usage.zip(g).and_then(|(u, g)| per_game(u, g)));
        }

        let zero_game_rows = points_per_game.iter().filter(|v| v.is_none()).count();
        if zero_game_rows > 0 {
            debug!(rows = zero_game_rows, "per-game rates left null");
        }

        df.with_column(Column::new(POINTS_PER_GAME.into(), points_per_game))?;
        df.with_column(Column::new(USAGE_PER_GAME.into(), usage_per_game))?;
        Ok(df)
    }

    /// Touchdowns per usage. Meant for the filtered running back table.
    pub fn add_td_per_usage(mut df: DataFrame) -> Result<DataFrame> {
        let rushing_td = float_column(&df, RUSHING_TD)?;
        let receiving_td = float_column(&df, RECEIVING_TD)?;
        let attempts = float_column(&df, RUSHING_ATT)?;
        let targets = float_column(&df, TARGETS)?;

        let efficiency: Vec<Option<f64>> = (0..df.height())
            .map(|i| {
                let touchdowns = rushing_td.get(i)? + receiving_td.get(i)?;
                let usage = attempts.get(i)? + targets.get(i)?;
                td_per_usage(touchdowns, usage)
            })
            .collect();

        df.with_column(Column::new(TD_PER_USAGE.into(), efficiency))?;
        Ok(df)
    }
}

/// Column values as `Float64`, or `MissingColumn` if the label is absent.
pub(crate) fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::missing(name))?;
    let values = column.cast(&DataType::Float64)?;
    Ok(values.f64()?.clone())
}
