//! HTTP Service Client
//! Talks to the analysis (`/upload_csv`) and forecast (`/forecast`) endpoints.

use super::ExpenseService;
use crate::config::{Config, ConfigError};
use crate::data::{AnalysisSummary, ForecastPoint, ForecastResponse, Transaction};
use crate::error::WorkflowError;
use reqwest::blocking::{multipart::Form, Client, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const UPLOAD_PATH: &str = "upload_csv";
const FORECAST_PATH: &str = "forecast";
const FILE_FIELD: &str = "file";

/// Blocking reqwest client for both services.
///
/// Requests have no timeout: a hung server keeps the workflow loading.
pub struct HttpService {
    client: Client,
    upload_url: Url,
    forecast_url: Url,
}

impl HttpService {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            client,
            upload_url: config.endpoint(UPLOAD_PATH)?,
            forecast_url: config.endpoint(FORECAST_PATH)?,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn forecast_url(&self) -> &Url {
        &self.forecast_url
    }

    /// Turn a response into `T`, or into a service error for non-2xx statuses.
    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, WorkflowError> {
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| WorkflowError::transport("Failed to read server response", e))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Service returned an error status");
            return Err(WorkflowError::from_error_body(status.as_u16(), &body));
        }

        serde_json::from_slice(&body)
            .map_err(|e| WorkflowError::transport("Unexpected server response", e))
    }
}

impl ExpenseService for HttpService {
    fn analyze(&self, file: &Path) -> Result<AnalysisSummary, WorkflowError> {
        let form = Form::new().file(FILE_FIELD, file).map_err(|e| {
            WorkflowError::transport(&format!("Failed to read {}", file.display()), e)
        })?;

        debug!(url = %self.upload_url, file = %file.display(), "Uploading transaction file");
        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .map_err(|e| WorkflowError::transport("Could not reach the analysis service", e))?;

        Self::decode(response)
    }

    fn forecast(&self, transactions: &[Transaction]) -> Result<Vec<ForecastPoint>, WorkflowError> {
        debug!(url = %self.forecast_url, count = transactions.len(), "Requesting forecast");
        let response = self
            .client
            .post(self.forecast_url.clone())
            .json(transactions)
            .send()
            .map_err(|e| WorkflowError::transport("Could not reach the forecast service", e))?;

        Self::decode::<ForecastResponse>(response).map(|body| body.forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mockito::Matcher;
    use std::io::Write;

    fn service_for(server: &mockito::ServerGuard) -> HttpService {
        let url = server.url();
        let config = Config::try_parse_from(["expenseguard", "--server", url.as_str()]).unwrap();
        HttpService::new(&config).unwrap()
    }

    fn csv_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "id,Amount,Description").unwrap();
        writeln!(file, "1,10.0,KROGER 42").unwrap();
        file
    }

    #[test]
    fn upload_sends_single_file_field() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/upload_csv")
            .match_header(
                "content-type",
                Matcher::Regex("multipart/form-data; boundary=.*".to_string()),
            )
            .match_body(Matcher::Regex(r#"name="file""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"total_transactions": 1, "transactions_flagged_as_fraud": 0,
                    "all_transactions": [{"id": 1, "Amount": 10, "Description": "KROGER 42",
                    "category": "Groceries", "is_fraud": 0}]}"#,
            )
            .create();

        let file = csv_file();
        let summary = service_for(&server).analyze(file.path()).unwrap();

        mock.assert();
        assert_eq!(summary.total_count, 1);
        assert_eq!(summary.transactions[0].category, "Groceries");
    }

    #[test]
    fn upload_error_uses_message_from_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/upload_csv")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"bad csv header"}"#)
            .create();

        let file = csv_file();
        let err = service_for(&server).analyze(file.path()).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Service {
                status: 400,
                message: "bad csv header".to_string()
            }
        );
    }

    #[test]
    fn upload_error_without_body_falls_back() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/upload_csv").with_status(502).create();

        let file = csv_file();
        let err = service_for(&server).analyze(file.path()).unwrap_err();
        assert_eq!(err.to_string(), crate::error::FALLBACK_SERVER_MESSAGE);
    }

    #[test]
    fn missing_file_is_a_transport_error() {
        let server = mockito::Server::new();
        let err = service_for(&server)
            .analyze(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Transport(_)));
    }

    #[test]
    fn malformed_success_body_is_a_transport_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/forecast")
            .with_status(200)
            .with_body("not json")
            .create();

        let err = service_for(&server).forecast(&[]).unwrap_err();
        assert!(matches!(err, WorkflowError::Transport(_)));
    }

    #[test]
    fn forecast_posts_transactions_as_json() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/forecast")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!([
                {"id": 2, "Amount": 500.0, "category": "electronics", "is_fraud": 1}
            ])))
            .with_status(200)
            .with_body(
                r#"{"forecast": [{"ds": "2024-01-01", "yhat": 100, "yhat_lower": 80, "yhat_upper": 120}]}"#,
            )
            .create();

        let transactions = vec![Transaction::new(2, None, 500.0, "electronics", true)];
        let points = service_for(&server).forecast(&transactions).unwrap();

        mock.assert();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].upper_bound, 120.0);
        assert_eq!(points[0].lower_bound, 80.0);
    }

    #[test]
    fn forecast_error_uses_same_policy() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/forecast")
            .with_status(500)
            .with_body(r#"{"error":"model not trained"}"#)
            .create();

        let err = service_for(&server).forecast(&[]).unwrap_err();
        assert_eq!(err.to_string(), "model not trained");
    }
}
