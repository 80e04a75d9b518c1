//! Control Panel Widget
//! Left side panel with the data source, analysis settings and actions.

use crate::config::AnalysisConfig;
use crate::stats::{FormulaMode, ScoringPreset};
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Left side control panel with thresholds and scoring controls.
pub struct ControlPanel {
    pub csv_path: Option<PathBuf>,
    pub config: AnalysisConfig,
    pub preset: Option<ScoringPreset>,
    pub row_counts: Vec<(String, usize)>,
    pub status: String,
}

impl ControlPanel {
    pub fn new(csv_path: Option<PathBuf>, config: AnalysisConfig) -> Self {
        let preset = ScoringPreset::matching(&config.scoring);
        Self {
            csv_path,
            config,
            preset,
            row_counts: Vec::new(),
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏈 Fantasy Trends")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Season Data").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = self
                    .csv_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file".to_string());
                ui.label(RichText::new(&path_text).size(12.0));

                for (table, rows) in &self.row_counts {
                    ui.label(
                        RichText::new(format!("{}: {} rows", table, rows))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Settings Section =====
        ui.label(RichText::new("⚙️ Settings").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 130.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Min QB games:"));
            ui.add(egui::DragValue::new(&mut self.config.min_qb_games).range(0..=17));
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("RB carries above:"));
            ui.add(egui::DragValue::new(&mut self.config.min_rb_carries).range(0..=400));
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Scoring:"));
            let selected = self.preset.map(|p| p.label()).unwrap_or("Custom");
            ComboBox::from_id_salt("scoring_preset")
                .width(120.0)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for preset in ScoringPreset::ALL {
                        if ui
                            .selectable_label(self.preset == Some(preset), preset.label())
                            .clicked()
                        {
                            self.preset = Some(preset);
                            self.config.scoring = preset.scoring();
                        }
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.radio_value(&mut self.config.formula, FormulaMode::Intended, "Full formula");
            ui.radio_value(&mut self.config.formula, FormulaMode::Truncated, "Truncated");
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("▶ Re-run Analysis").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::Rerun;
            }

            ui.add_space(8.0);

            let export = egui::Button::new(RichText::new("🖼 Export PNGs").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(export).clicked() {
                action = ControlPanelAction::ExportAll;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Rerun,
    ExportAll,
}
