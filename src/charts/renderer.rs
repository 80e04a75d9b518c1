//! Static Chart Renderer
//! Writes scatter + trendline figures to PNG with plotters.
//!
//! Layout:
//! 1. Title centered above the plot
//! 2. Light grid on white background
//! 3. Shaded confidence band behind the trendline
//! 4. Scatter markers, trendline, and a legend with the fit summary

use crate::charts::ScatterChart;
use crate::error::{AnalysisError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

// Colors
const POINT: RGBColor = RGBColor(49, 115, 161); // Marker fill
const TREND: RGBColor = RGBColor(31, 83, 125); // Regression line
const GRID: RGBColor = RGBColor(234, 234, 242); // Grid lines
const AXIS: RGBColor = RGBColor(120, 120, 120);

/// Samples along the x range used to draw the line and band
const BAND_SAMPLES: usize = 100;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one chart to a PNG file.
    pub fn render_to_file(chart: &ScatterChart, path: &Path, width: u32, height: u32) -> Result<()> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        Self::draw(&root, chart)
            .and_then(|_| root.present().map_err(Into::into))
            .map_err(|e| AnalysisError::Render {
                message: format!("{}: {}", path.display(), e),
            })?;
        info!(chart = %chart.key, path = %path.display(), "rendered chart");
        Ok(())
    }

    /// Render every chart into `out_dir` in parallel, returning the written
    /// paths in chart order.
    pub fn render_all(
        charts: &[ScatterChart],
        out_dir: &Path,
        width: u32,
        height: u32,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir)?;
        charts
            .par_iter()
            .map(|chart| {
                let path = out_dir.join(chart.file_name());
                Self::render_to_file(chart, &path, width, height)?;
                Ok(path)
            })
            .collect()
    }

    fn draw(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        chart: &ScatterChart,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        root.fill(&WHITE)?;

        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range();

        let mut ctx = ChartBuilder::on(root)
            .caption(chart.title.as_str(), ("sans-serif", 34))
            .margin(30)
            .x_label_area_size(70)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        ctx.configure_mesh()
            .light_line_style(GRID.stroke_width(1))
            .bold_line_style(GRID.stroke_width(2))
            .axis_style(AXIS.stroke_width(1))
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .axis_desc_style(("sans-serif", 24))
            .label_style(("sans-serif", 18))
            .draw()?;

        let band = chart
            .fit
            .as_ref()
            .map(|fit| fit.band(x_min, x_max, BAND_SAMPLES))
            .unwrap_or_default();

        if !band.is_empty() {
            let mut outline: Vec<(f64, f64)> = band.iter().map(|&(x, _, _, hi)| (x, hi)).collect();
            outline.extend(band.iter().rev().map(|&(x, _, lo, _)| (x, lo)));
            ctx.draw_series(std::iter::once(Polygon::new(
                outline,
                TREND.mix(0.15).filled(),
            )))?;
        }

        ctx.draw_series(
            chart
                .points
                .iter()
                .map(|p| Circle::new((p.x, p.y), 6, POINT.mix(0.8).filled())),
        )?
        .label(format!("players (n = {})", chart.points.len()))
        .legend(|(x, y)| Circle::new((x + 10, y), 6, POINT.mix(0.8).filled()));

        if let Some(fit) = &chart.fit {
            ctx.draw_series(LineSeries::new(
                band.iter().map(|&(x, y, _, _)| (x, y)),
                TREND.stroke_width(3),
            ))?
            .label(fit.summary())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TREND.stroke_width(3)));
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85).filled())
            .border_style(AXIS.stroke_width(1))
            .label_font(("sans-serif", 18))
            .draw()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ScatterPoint;
    use crate::stats::RegressionCalculator;

    fn chart(key: &str, coords: &[(f64, f64)]) -> ScatterChart {
        let points: Vec<ScatterPoint> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| ScatterPoint {
                x,
                y,
                player: format!("Player {}", i + 1),
            })
            .collect();
        ScatterChart {
            key: key.to_string(),
            title: "Usage vs Points".to_string(),
            x_label: "Usage/GM".to_string(),
            y_label: "FantasyPoints/GM".to_string(),
            points,
            fit: RegressionCalculator::fit(coords),
        }
    }

    #[test]
    fn test_render_chart_with_trendline() {
        let dir = tempfile::tempdir().unwrap();
        let chart = chart("usage", &[(12.0, 9.5), (18.0, 14.2), (22.0, 24.5), (15.0, 11.0)]);
        assert!(chart.fit.is_some());

        let path = dir.path().join(chart.file_name());
        StaticChartRenderer::render_to_file(&chart, &path, 400, 300).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_render_all_without_fit() {
        let dir = tempfile::tempdir().unwrap();
        let charts = vec![chart("empty", &[]), chart("single", &[(3.0, 4.0)])];
        assert!(charts.iter().all(|c| c.fit.is_none()));

        let paths = StaticChartRenderer::render_all(&charts, dir.path(), 400, 300).unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_render_all_creates_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("figures");
        let paths = StaticChartRenderer::render_all(&[], &out_dir, 400, 300).unwrap();
        assert!(paths.is_empty());
        assert!(out_dir.is_dir());
    }
}
