//! Chart Plotter Module
//! Interactive scatter + trendline plots using egui_plot.

use crate::charts::ScatterChart;
use crate::stats::LinearFit;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

pub const POINT_COLOR: Color32 = Color32::from_rgb(49, 115, 161); // Blue
pub const TREND_COLOR: Color32 = Color32::from_rgb(31, 83, 125); // Dark blue

/// Samples along the x range for the trendline and band
const LINE_SAMPLES: usize = 60;

/// Creates interactive scatterplots with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the scatter, the fitted line and its confidence band.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, chart: &ScatterChart, height: f32) {
        let (x_min, x_max) = chart.x_range();
        let (y_min, y_max) = chart.y_range();

        Plot::new(format!("scatter_{}", chart.key))
            .height(height)
            .legend(Legend::default())
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .allow_scroll(false)
            // Hover shows the nearest player rather than raw coordinates
            .label_formatter(move |_name, value| {
                match chart.nearest_player(value.x, value.y) {
                    Some(p) => format!("{}\n{:.2}, {:.2}", p.player, p.x, p.y),
                    None => String::new(),
                }
            })
            .show(ui, |plot_ui| {
                let points: PlotPoints = chart.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(4.0)
                        .color(POINT_COLOR.gamma_multiply(0.8))
                        .name("Players"),
                );

                if let Some(fit) = &chart.fit {
                    let band = fit.band(x_min, x_max, LINE_SAMPLES);
                    let trend: PlotPoints = band.iter().map(|&(x, y, _, _)| [x, y]).collect();
                    plot_ui.line(
                        Line::new(trend)
                            .color(TREND_COLOR)
                            .width(2.0)
                            .name("Trendline"),
                    );

                    let lower: PlotPoints = band.iter().map(|&(x, _, lo, _)| [x, lo]).collect();
                    let upper: PlotPoints = band.iter().map(|&(x, _, _, hi)| [x, hi]).collect();
                    for bound in [lower, upper] {
                        plot_ui.line(
                            Line::new(bound)
                                .color(TREND_COLOR.gamma_multiply(0.5))
                                .style(LineStyle::dashed_loose())
                                .name("95% CI"),
                        );
                    }
                }
            });
    }

    /// Draw the fit statistics as a two-column grid.
    pub fn draw_fit_table(ui: &mut egui::Ui, chart: &ScatterChart) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("fit_table_{}", chart.key)))
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for (label, value) in Self::fit_rows(chart.fit.as_ref(), chart.points.len())
                        {
                            ui.label(RichText::new(label).strong().size(11.0));
                            ui.label(RichText::new(value).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }

    fn fit_rows(fit: Option<&LinearFit>, n: usize) -> Vec<(&'static str, String)> {
        let Some(fit) = fit else {
            return vec![("N", n.to_string()), ("Fit", "-".to_string())];
        };
        vec![
            ("N", fit.n.to_string()),
            ("Slope", format!("{:.4}", fit.slope)),
            ("Intercept", format!("{:.3}", fit.intercept)),
            ("r", format!("{:.3}", fit.r)),
            ("r²", format!("{:.3}", fit.r_squared)),
            (
                "P-value",
                fit.p_value
                    .map(|p| format!("{:.4}", p))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }
}
