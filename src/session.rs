//! Session
//! Owns all client-side state for one window and drives both workflows.

use crate::charts::{ChartBackend, ChartRenderer};
use crate::data::{AnalysisSummary, ForecastPoint, TransactionStore};
use crate::error::WorkflowError;
use crate::gui::{AlertPresenter, TableRenderer};
use crate::service::ExpenseService;
use crate::workflow::{ForecastWorkflow, TriggerControl, UploadWorkflow, WorkflowState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// One analysis session: created with the window, lives until it closes.
pub struct Session<S: ExpenseService, B: ChartBackend> {
    service: Arc<S>,
    store: TransactionStore,
    alert: AlertPresenter,
    table: TableRenderer,
    chart: ChartRenderer<B>,
    upload: UploadWorkflow,
    forecast: ForecastWorkflow,
    results_visible: bool,
    chart_visible: bool,
}

impl<S: ExpenseService, B: ChartBackend> Session<S, B> {
    pub fn new(service: S, chart_backend: B) -> Self {
        Self {
            service: Arc::new(service),
            store: TransactionStore::new(),
            alert: AlertPresenter::new(),
            table: TableRenderer::new(),
            chart: ChartRenderer::new(chart_backend),
            upload: UploadWorkflow::new(),
            forecast: ForecastWorkflow::new(),
            results_visible: false,
            chart_visible: false,
        }
    }

    /// Start analyzing `file`. Validation failures are shown and returned.
    pub fn submit_upload(&mut self, file: Option<PathBuf>) -> Result<(), WorkflowError> {
        self.alert.clear();
        let result = self.upload.submit(file, &self.service);
        if let Err(err) = &result {
            self.report("upload", err);
        }
        result
    }

    /// Start a forecast over the stored transactions.
    pub fn submit_forecast(&mut self) -> Result<(), WorkflowError> {
        self.alert.clear();
        let result = self.forecast.submit(self.store.transactions(), &self.service);
        if let Err(err) = &result {
            self.report("forecast", err);
        }
        result
    }

    /// Apply every response that has arrived since the last call.
    ///
    /// Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(result) = self.upload.poll() {
            self.finish_upload(result);
            changed = true;
        }
        while let Some(result) = self.forecast.poll() {
            self.finish_forecast(result);
            changed = true;
        }
        changed
    }

    fn finish_upload(&mut self, result: Result<AnalysisSummary, WorkflowError>) {
        match result {
            Ok(summary) => {
                info!(
                    total = summary.total_count,
                    fraud = summary.fraud_count,
                    "Analysis complete"
                );
                self.table.render(&summary.transactions);
                self.store.replace(summary);
                self.results_visible = true;
            }
            Err(err) => self.report("upload", &err),
        }
    }

    fn finish_forecast(&mut self, result: Result<Vec<ForecastPoint>, WorkflowError>) {
        match result {
            Ok(points) => {
                info!(points = points.len(), "Forecast complete");
                self.chart_visible = true;
                self.chart.render(&points);
            }
            Err(err) => self.report("forecast", &err),
        }
    }

    fn report(&mut self, workflow: &str, err: &WorkflowError) {
        warn!(workflow, error = %err, "Workflow failed");
        self.alert.show(err.to_string());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.clear();
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn alert(&self) -> &AlertPresenter {
        &self.alert
    }

    pub fn table(&self) -> &TableRenderer {
        &self.table
    }

    pub fn chart(&self) -> &ChartRenderer<B> {
        &self.chart
    }

    pub fn upload_state(&self) -> WorkflowState {
        self.upload.state()
    }

    pub fn forecast_state(&self) -> WorkflowState {
        self.forecast.state()
    }

    pub fn upload_control(&self) -> &TriggerControl {
        self.upload.control()
    }

    pub fn forecast_control(&self) -> &TriggerControl {
        self.forecast.control()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn chart_visible(&self) -> bool {
        self.chart_visible
    }

    /// True while any request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.upload.in_flight() > 0 || self.forecast.in_flight() > 0
    }

    /// Block until the next upload response is applied.
    #[cfg(test)]
    fn wait_upload(&mut self) {
        let result = self
            .upload
            .wait(std::time::Duration::from_secs(5))
            .expect("upload response");
        self.finish_upload(result);
    }

    /// Block until the next forecast response is applied.
    #[cfg(test)]
    fn wait_forecast(&mut self) {
        let result = self
            .forecast
            .wait(std::time::Duration::from_secs(5))
            .expect("forecast response");
        self.finish_forecast(result);
    }
}
