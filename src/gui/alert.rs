//! Alert Presenter
//! The single error banner shared by both workflows.

use egui::{Color32, RichText};

const ALERT_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Holds at most one visible error message.
#[derive(Debug, Default)]
pub struct AlertPresenter {
    message: Option<String>,
}

impl AlertPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever was shown before.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Draw the banner, if any. Returns true when the user dismissed it.
    pub fn ui(&self, ui: &mut egui::Ui) -> bool {
        let Some(message) = &self.message else {
            return false;
        };

        let mut dismissed = false;
        egui::Frame::none()
            .fill(ALERT_COLOR.gamma_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, ALERT_COLOR))
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(message).color(ALERT_COLOR));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.small_button("✕").clicked();
                    });
                });
            });
        dismissed
    }
}
