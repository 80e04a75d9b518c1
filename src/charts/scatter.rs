//! Scatter chart description shared by the static renderer and the viewer.

use crate::data::columns::PLAYER;
use crate::error::Result;
use crate::stats::metrics::float_column;
use crate::stats::{LinearFit, RegressionCalculator};
use polars::prelude::*;
use tracing::warn;

/// Fraction of the data range added on each side of an axis
const AXIS_PADDING: f64 = 0.08;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub player: String,
}

/// One relationship to plot: points plus their least squares trendline.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    /// File stem used when the chart is written to disk
    pub key: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    pub fit: Option<LinearFit>,
}

impl ScatterChart {
    /// Build a chart from two numeric columns. Rows where either value is
    /// null or non-finite are left out of both the scatter and the fit.
    pub fn from_frame(
        df: &DataFrame,
        key: &str,
        title: &str,
        x_col: &str,
        y_col: &str,
    ) -> Result<Self> {
        let xs = float_column(df, x_col)?;
        let ys = float_column(df, y_col)?;
        let players = df.column(PLAYER).ok().and_then(|c| c.str().ok().cloned());

        let mut points = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            if let (Some(x), Some(y)) = (xs.get(i), ys.get(i)) {
                if x.is_finite() && y.is_finite() {
                    let player = players
                        .as_ref()
                        .and_then(|p| p.get(i))
                        .unwrap_or_default()
                        .to_string();
                    points.push(ScatterPoint { x, y, player });
                }
            }
        }

        let skipped = df.height() - points.len();
        if skipped > 0 {
            warn!(chart = key, skipped, "rows without both values left out");
        }

        let pairs: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        let fit = RegressionCalculator::fit(&pairs);
        if fit.is_none() {
            warn!(chart = key, points = points.len(), "not enough spread for a trendline");
        }

        Ok(Self {
            key: key.to_string(),
            title: title.to_string(),
            x_label: x_col.to_string(),
            y_label: y_col.to_string(),
            points,
            fit,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.key)
    }

    pub fn x_range(&self) -> (f64, f64) {
        Self::padded_range(self.points.iter().map(|p| p.x))
    }

    pub fn y_range(&self) -> (f64, f64) {
        Self::padded_range(self.points.iter().map(|p| p.y))
    }

    /// Player whose point lies closest to `(x, y)` after scaling both axes
    /// to their ranges.
    pub fn nearest_player(&self, x: f64, y: f64) -> Option<&ScatterPoint> {
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        let x_span = x_max - x_min;
        let y_span = y_max - y_min;
        self.points.iter().min_by(|a, b| {
            let da = ((a.x - x) / x_span).powi(2) + ((a.y - y) / y_span).powi(2);
            let db = ((b.x - x) / x_span).powi(2) + ((b.y - y) / y_span).powi(2);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_infinite() {
            return (0.0, 1.0);
        }
        if min == max {
            return (min - 1.0, max + 1.0);
        }
        let pad = (max - min) * AXIS_PADDING;
        (min - pad, max + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df! {
            PLAYER => &["A", "B", "C", "D"],
            "x" => &[Some(1.0), Some(2.0), None, Some(4.0)],
            "y" => &[Some(2.0), Some(4.0), Some(6.0), Some(8.0)],
        }
        .unwrap()
    }

    #[test]
    fn test_from_frame_skips_nulls() {
        let chart = ScatterChart::from_frame(&frame(), "demo", "Demo", "x", "y").unwrap();
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.points[2].player, "D");
        let fit = chart.fit.unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert_eq!(fit.n, 3);
    }

    #[test]
    fn test_ranges_are_padded() {
        let chart = ScatterChart::from_frame(&frame(), "demo", "Demo", "x", "y").unwrap();
        let (x_min, x_max) = chart.x_range();
        assert!(x_min < 1.0 && x_max > 4.0);
        assert_eq!(chart.file_name(), "demo.png");
    }

    #[test]
    fn test_nearest_player() {
        let chart = ScatterChart::from_frame(&frame(), "demo", "Demo", "x", "y").unwrap();
        assert_eq!(chart.nearest_player(3.9, 7.7).unwrap().player, "D");
    }

    #[test]
    fn test_missing_axis_column() {
        assert!(ScatterChart::from_frame(&frame(), "demo", "Demo", "x", "z").is_err());
    }
}
