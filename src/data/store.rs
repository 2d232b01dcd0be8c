//! Transaction Store
//! Holds the most recent analysis summary for the session.

use super::models::{AnalysisSummary, Transaction};

/// Single slot holding the last successfully analyzed summary.
///
/// Each upload replaces the slot wholesale; summaries are never merged.
#[derive(Debug, Default)]
pub struct TransactionStore {
    summary: Option<AnalysisSummary>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored summary with a freshly analyzed one.
    pub fn replace(&mut self, summary: AnalysisSummary) {
        self.summary = Some(summary);
    }

    pub fn summary(&self) -> Option<&AnalysisSummary> {
        self.summary.as_ref()
    }

    /// Transactions of the current summary, empty before the first upload.
    pub fn transactions(&self) -> &[Transaction] {
        self.summary
            .as_ref()
            .map(|summary| summary.transactions.as_slice())
            .unwrap_or_default()
    }

    /// True when there is nothing to forecast from.
    pub fn is_empty(&self) -> bool {
        self.transactions().is_empty()
    }
}
