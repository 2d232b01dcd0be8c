//! Results View
//! Central panel: analysis summary, transaction table and forecast chart.

use crate::charts::PlotChart;
use crate::data::AnalysisSummary;
use crate::gui::TableRenderer;
use egui::{Color32, RichText, ScrollArea};

const FRAUD_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const SECTION_SPACING: f32 = 15.0;

/// Everything the central panel draws for one frame.
pub struct ResultsView<'a> {
    pub summary: Option<&'a AnalysisSummary>,
    pub table: &'a TableRenderer,
    pub results_visible: bool,
    pub chart: Option<&'a PlotChart>,
    pub chart_visible: bool,
}

impl ResultsView<'_> {
    pub fn show(&self, ui: &mut egui::Ui) {
        if !self.results_visible && !self.chart_visible {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Upload a transaction file to begin").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.results_visible {
                    if let Some(summary) = self.summary {
                        Self::draw_summary(ui, summary);
                    }
                    ui.add_space(10.0);
                    self.table.show(ui);
                    ui.add_space(SECTION_SPACING);
                }

                if self.chart_visible {
                    if let Some(chart) = self.chart {
                        ui.separator();
                        ui.label(RichText::new("30-Day Spend Forecast").size(16.0).strong());
                        ui.add_space(8.0);
                        chart.show(ui);
                    }
                }
            });
    }

    fn draw_summary(ui: &mut egui::Ui, summary: &AnalysisSummary) {
        let total_color = ui.visuals().strong_text_color();
        ui.horizontal(|ui| {
            Self::stat_card(ui, "Total Transactions", summary.total_count, total_color);
            ui.add_space(12.0);
            Self::stat_card(ui, "Flagged as Fraud", summary.fraud_count, FRAUD_COLOR);
        });

        if let Some(message) = &summary.message {
            ui.add_space(6.0);
            ui.label(RichText::new(message).size(12.0).color(Color32::GRAY));
        }
        if !summary.categories_found.is_empty() {
            ui.label(
                RichText::new(format!("Categories: {}", summary.categories_found.join(", ")))
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        }
    }

    fn stat_card(ui: &mut egui::Ui, title: &str, value: u64, color: Color32) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .stroke(egui::Stroke::new(1.5, color))
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(12.0));
                    ui.label(RichText::new(value.to_string()).size(26.0).strong().color(color));
                });
            });
    }
}
