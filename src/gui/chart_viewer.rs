//! Chart Viewer Widget
//! Right side scrollable panel with one card per scatter chart.
//! Supports responsive multi-column layout based on available width.

use crate::charts::{ChartPlotter, ScatterChart};
use egui::{Color32, RichText, ScrollArea};

/// Chart card configuration
const CHART_SPACING: f32 = 15.0;
const CHART_WIDTH: f32 = 780.0; // Fixed width for each chart card
const PLOT_HEIGHT: f32 = 380.0;

/// Scrollable chart display area.
#[derive(Default)]
pub struct ChartViewer {
    pub charts: Vec<ScatterChart>,
}

impl ChartViewer {
    pub fn new(charts: Vec<ScatterChart>) -> Self {
        Self { charts }
    }

    pub fn set_charts(&mut self, charts: Vec<ScatterChart>) {
        self.charts = charts;
    }

    /// Draw the chart cards, wrapping into as many columns as fit.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        if self.charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return action;
        }

        let avail_width = ui.available_width();
        let num_columns = ((avail_width / (CHART_WIDTH + CHART_SPACING)).floor() as usize).max(1);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (row, chunk) in self.charts.chunks(num_columns).enumerate() {
                    ui.horizontal(|ui| {
                        for (col, chart) in chunk.iter().enumerate() {
                            if Self::draw_chart_card(ui, chart) {
                                action = ChartViewerAction::SavePng(row * num_columns + col);
                            }
                            ui.add_space(CHART_SPACING);
                        }
                    });
                    ui.add_space(CHART_SPACING);
                }
            });

        action
    }

    /// Draw a single chart card. Returns true when "Save PNG" was clicked.
    fn draw_chart_card(ui: &mut egui::Ui, chart: &ScatterChart) -> bool {
        let mut save_clicked = false;
        let border_color = Color32::from_rgb(100, 149, 237);
        let card_width = CHART_WIDTH - 20.0;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, border_color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(card_width);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&chart.title)
                                .size(18.0)
                                .strong()
                                .color(border_color),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("💾 Save PNG…").clicked() {
                                save_clicked = true;
                            }
                        });
                    });

                    ui.add_space(8.0);
                    ChartPlotter::draw_scatter_chart(ui, chart, PLOT_HEIGHT);
                    ui.add_space(10.0);
                    ChartPlotter::draw_fit_table(ui, chart);
                });
            });

        save_clicked
    }
}

/// Actions triggered from a chart card
#[derive(Debug, Clone, PartialEq)]
pub enum ChartViewerAction {
    None,
    SavePng(usize),
}
