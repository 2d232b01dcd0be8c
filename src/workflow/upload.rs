//! Upload Workflow
//! Sends a transaction file to the analysis service.

use super::{TriggerControl, Workflow, WorkflowState};
use crate::data::AnalysisSummary;
use crate::error::WorkflowError;
use crate::service::ExpenseService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub const UPLOAD_LABEL: &str = "Analyze";
pub const UPLOAD_BUSY_LABEL: &str = "Analyzing...";

/// Analysis request lifecycle.
pub struct UploadWorkflow {
    inner: Workflow<AnalysisSummary>,
}

impl Default for UploadWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self {
            inner: Workflow::new(TriggerControl::new(UPLOAD_LABEL, UPLOAD_BUSY_LABEL)),
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

    /// Validate the selection and start the upload.
    ///
    /// A missing or empty path fails without entering Loading.
    pub fn submit<S: ExpenseService>(
        &mut self,
        file: Option<PathBuf>,
        service: &Arc<S>,
    ) -> Result<(), WorkflowError> {
        let file = file
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(WorkflowError::no_file_selected)?;

        info!(file = %file.display(), "Starting analysis upload");
        let service = Arc::clone(service);
        self.inner.begin(move || service.analyze(&file));
        Ok(())
    }

    pub fn poll(&mut self) -> Option<Result<AnalysisSummary, WorkflowError>> {
        self.inner.try_finish()
    }

    #[cfg(test)]
    pub fn wait(
        &mut self,
        timeout: std::time::Duration,
    ) -> Option<Result<AnalysisSummary, WorkflowError>> {
        self.inner.wait_finish(timeout)
    }
}
