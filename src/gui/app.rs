//! Fantasy Trends Viewer
//! Main window with control panel and chart viewer.

use crate::charts::StaticChartRenderer;
use crate::config::AnalysisConfig;
use crate::data::Position;
use crate::gui::{ChartViewer, ChartViewerAction, ControlPanel, ControlPanelAction};
use crate::pipeline::{self, AnalysisReport};
use egui::SidePanel;
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Main application window.
pub struct TrendsApp {
    raw: DataFrame,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl TrendsApp {
    pub fn new(
        raw: DataFrame,
        report: AnalysisReport,
        config: AnalysisConfig,
        csv_path: Option<PathBuf>,
    ) -> Self {
        let mut control_panel = ControlPanel::new(csv_path, config);
        control_panel.row_counts = Self::row_counts(&report);
        control_panel.set_status(format!("{} charts ready", report.charts.len()));
        Self {
            raw,
            control_panel,
            chart_viewer: ChartViewer::new(report.charts),
        }
    }

    /// Open the viewer window and block until it is closed.
    pub fn launch(self) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1400.0, 900.0])
                .with_min_inner_size([1000.0, 700.0])
                .with_title("Fantasy Trends"),
            ..Default::default()
        };

        eframe::run_native(
            "Fantasy Trends",
            options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn row_counts(report: &AnalysisReport) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Position::ALL
            .iter()
            .map(|&p| (p.to_string(), report.tables.get(p).height()))
            .collect();
        counts.push(("QB starters".to_string(), report.starting_qbs.height()));
        counts.push(("RB over carries".to_string(), report.established_rbs.height()));
        counts
    }

    /// Recompute every chart with the settings currently in the panel.
    fn handle_rerun(&mut self) {
        match pipeline::analyze(self.raw.clone(), &self.control_panel.config) {
            Ok(report) => {
                self.control_panel.row_counts = Self::row_counts(&report);
                self.control_panel
                    .set_status(format!("{} charts ready", report.charts.len()));
                self.chart_viewer.set_charts(report.charts);
                info!("analysis re-run from viewer");
            }
            Err(e) => {
                error!(error = %e, "re-run failed");
                self.control_panel.set_status(format!("Error: {}", e));
            }
        }
    }

    /// Render every chart into the configured output directory.
    fn handle_export_all(&mut self) {
        let config = &self.control_panel.config;
        match StaticChartRenderer::render_all(
            &self.chart_viewer.charts,
            &config.out_dir,
            config.figure_width,
            config.figure_height,
        ) {
            Ok(paths) => {
                let status = format!(
                    "Exported {} PNGs to {}",
                    paths.len(),
                    config.out_dir.display()
                );
                self.control_panel.set_status(status);
            }
            Err(e) => self.control_panel.set_status(format!("Error: {}", e)),
        }
    }

    /// Ask for a location and render a single chart there.
    fn handle_save_png(&mut self, index: usize) {
        let Some(chart) = self.chart_viewer.charts.get(index) else {
            return;
        };

        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(chart.file_name())
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        let config = &self.control_panel.config;
        let status = match StaticChartRenderer::render_to_file(
            chart,
            &output_path,
            config.figure_width,
            config.figure_height,
        ) {
            Ok(()) => format!("Saved {}", output_path.display()),
            Err(e) => format!("Error: {}", e),
        };
        self.control_panel.set_status(status);
    }
}

impl eframe::App for TrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::Rerun => self.handle_rerun(),
                        ControlPanelAction::ExportAll => self.handle_export_all(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            if let ChartViewerAction::SavePng(index) = self.chart_viewer.show(ui) {
                self.handle_save_png(index);
            }
        });
    }
}
