//! Forecast Workflow
//! Sends the analyzed transactions to the forecast service.

use super::{TriggerControl, Workflow, WorkflowState};
use crate::data::{ForecastPoint, Transaction};
use crate::error::WorkflowError;
use crate::service::ExpenseService;
use std::sync::Arc;
use tracing::info;

pub const FORECAST_LABEL: &str = "Generate 30-Day Forecast";
pub const FORECAST_BUSY_LABEL: &str = "Generating...";

/// Forecast request lifecycle.
pub struct ForecastWorkflow {
    inner: Workflow<Vec<ForecastPoint>>,
}

impl Default for ForecastWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastWorkflow {
    pub fn new() -> Self {
        Self {
            inner: Workflow::new(TriggerControl::new(FORECAST_LABEL, FORECAST_BUSY_LABEL)),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.inner.state()
    }

    pub fn control(&self) -> &TriggerControl {
        self.inner.control()
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight()
    }

    /// Start a forecast from a snapshot of `transactions`.
    ///
    /// Fails without entering Loading when there is nothing to forecast.
    pub fn submit<S: ExpenseService>(
        &mut self,
        transactions: &[Transaction],
        service: &Arc<S>,
    ) -> Result<(), WorkflowError> {
        if transactions.is_empty() {
            return Err(WorkflowError::no_analyzed_data());
        }

        info!(count = transactions.len(), "Starting forecast request");
        let snapshot = transactions.to_vec();
        let service = Arc::clone(service);
        self.inner.begin(move || service.forecast(&snapshot));
        Ok(())
    }

    pub fn poll(&mut self) -> Option<Result<Vec<ForecastPoint>, WorkflowError>> {
        self.inner.try_finish()
    }

    #[cfg(test)]
    pub fn wait(
        &mut self,
        timeout: std::time::Duration,
    ) -> Option<Result<Vec<ForecastPoint>, WorkflowError>> {
        self.inner.wait_finish(timeout)
    }
}
