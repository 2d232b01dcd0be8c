//! Workflow Errors
//! Every failure a workflow can hit, reduced to one user-facing message.

use serde::Deserialize;
use thiserror::Error;

/// Message shown when a failed response carries no usable `error` field.
pub const FALLBACK_SERVER_MESSAGE: &str = "Server error";

/// Failure of an upload or forecast workflow.
///
/// `Display` is the exact text handed to the alert presenter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    /// Precondition failed before any request was made.
    #[error("{0}")]
    Validation(String),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// The request never completed or the response could not be read.
    #[error("{0}")]
    Transport(String),
}

/// Error body returned by both services on failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl WorkflowError {
    pub fn no_file_selected() -> Self {
        Self::Validation("No file selected. Please select a CSV file first.".to_string())
    }

    pub fn no_analyzed_data() -> Self {
        Self::Validation(
            "No analyzed data. Please upload and analyze a transaction file first.".to_string(),
        )
    }

    /// Build a service error from a non-success response body.
    ///
    /// Uses the body's `error` field verbatim, falling back to
    /// [`FALLBACK_SERVER_MESSAGE`] when the body is missing, not JSON, or the
    /// field is absent or blank.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_SERVER_MESSAGE.to_string());
        Self::Service { status, message }
    }

    pub fn transport(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport(format!("{}: {}", context, err))
    }

    #[cfg(test)]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_used_verbatim() {
        let err = WorkflowError::from_error_body(400, br#"{"error":"bad csv header"}"#);
        assert_eq!(err.to_string(), "bad csv header");
        assert!(matches!(err, WorkflowError::Service { status: 400, .. }));
    }

    #[test]
    fn missing_or_unreadable_body_falls_back() {
        for body in [&b""[..], b"<html>oops</html>", br#"{"detail":"x"}"#, br#"{"error":""}"#] {
            let err = WorkflowError::from_error_body(500, body);
            assert_eq!(err.to_string(), FALLBACK_SERVER_MESSAGE);
        }
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(WorkflowError::no_file_selected().is_validation());
        assert!(WorkflowError::no_analyzed_data().is_validation());
        assert!(!WorkflowError::Transport("down".into()).is_validation());
    }
}
