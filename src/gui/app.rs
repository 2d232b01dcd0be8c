//! ExpenseGuard Main Application
//! Main window binding the session to the control panel and results view.

use crate::charts::PlotBackend;
use crate::gui::{ControlPanel, ControlPanelAction, ResultsView};
use crate::service::HttpService;
use crate::session::Session;
use egui::SidePanel;
use tracing::debug;

/// Main application window.
pub struct ExpenseGuardApp {
    session: Session<HttpService, PlotBackend>,
    control_panel: ControlPanel,
}

impl ExpenseGuardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, service: HttpService) -> Self {
        Self {
            session: Session::new(service, PlotBackend::default()),
            control_panel: ControlPanel::new(),
        }
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            debug!(file = %path.display(), "Selected transaction file");
            self.control_panel.selected_file = Some(path);
        }
    }

    fn handle_action(&mut self, action: ControlPanelAction) {
        // Validation failures are already on the alert banner.
        match action {
            ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
            ControlPanelAction::Analyze => {
                let _ = self
                    .session
                    .submit_upload(self.control_panel.selected_file.clone());
            }
            ControlPanelAction::Forecast => {
                let _ = self.session.submit_forecast();
            }
            ControlPanelAction::None => {}
        }
    }
}

impl eframe::App for ExpenseGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply finished background requests
        self.session.poll();

        // Keep repainting while requests are outstanding
        if self.session.is_busy() {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(
                    ui,
                    (self.session.upload_control(), self.session.upload_state()),
                    (self.session.forecast_control(), self.session.forecast_state()),
                );
                self.handle_action(action);
            });

        // Central panel - Alert, results and chart
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.alert().ui(ui) {
                self.session.dismiss_alert();
            }
            if self.session.alert().is_visible() {
                ui.add_space(8.0);
            }

            ResultsView {
                summary: self.session.store().summary(),
                table: self.session.table(),
                results_visible: self.session.results_visible(),
                chart: self.session.chart().instance(),
                chart_visible: self.session.chart_visible(),
            }
            .show(ui);
        });
    }
}
