//! Service module - Analysis and forecast collaborators

mod http;

pub use http::HttpService;

use crate::data::{AnalysisSummary, ForecastPoint, Transaction};
use crate::error::WorkflowError;
use std::path::Path;

/// The two remote collaborators the workflows talk to.
///
/// Calls block; workflows run them on background threads.
pub trait ExpenseService: Send + Sync + 'static {
    /// Upload a transaction file for fraud analysis.
    fn analyze(&self, file: &Path) -> Result<AnalysisSummary, WorkflowError>;

    /// Request a spend forecast for the given transactions.
    fn forecast(&self, transactions: &[Transaction]) -> Result<Vec<ForecastPoint>, WorkflowError>;
}
