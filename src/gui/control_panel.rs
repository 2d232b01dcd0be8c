//! Control Panel Widget
//! Left side panel with file selection and the two workflow buttons.

use crate::workflow::{TriggerControl, WorkflowState};
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Left side control panel.
#[derive(Default)]
pub struct ControlPanel {
    pub selected_file: Option<PathBuf>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        upload: (&TriggerControl, WorkflowState),
        forecast: (&TriggerControl, WorkflowState),
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🛡 ExpenseGuard")
                    .size(22.0)
                    .color(Color32::from_rgb(10, 147, 150)),
            );
            ui.label(
                RichText::new("Fraud review & spend forecast")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Transaction File Section =====
        ui.label(RichText::new("📁 Transaction File").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .selected_file
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    let path_color = if self.selected_file.is_some() {
                        ui.visuals().strong_text_color()
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(&path_text).size(12.0).color(path_color));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            if Self::trigger_button(ui, upload.0, upload.1, "▶") {
                action = ControlPanelAction::Analyze;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Forecast Section =====
        ui.label(RichText::new("📈 Forecast").size(14.0).strong());
        ui.add_space(5.0);
        ui.vertical_centered(|ui| {
            if Self::trigger_button(ui, forecast.0, forecast.1, "📈") {
                action = ControlPanelAction::Forecast;
            }
        });

        action
    }

    /// Workflow button with a spinner while loading. Returns true when clicked.
    fn trigger_button(
        ui: &mut egui::Ui,
        control: &TriggerControl,
        state: WorkflowState,
        icon: &str,
    ) -> bool {
        let mut clicked = false;
        ui.horizontal(|ui| {
            ui.add_enabled_ui(control.enabled, |ui| {
                let button =
                    egui::Button::new(RichText::new(format!("{} {}", icon, control.label)).size(15.0))
                        .min_size(egui::vec2(220.0, 32.0));
                clicked = ui.add(button).clicked();
            });
            if state == WorkflowState::Loading {
                ui.spinner();
            }
        });
        clicked
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Analyze,
    Forecast,
}
