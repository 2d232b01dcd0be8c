//! Configuration
//! Command line and environment settings for the client.

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServer { url: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Client settings.
#[derive(Parser, Debug, Clone)]
#[command(name = "expenseguard", version, about = "Transaction fraud review and spend forecasting")]
pub struct Config {
    /// Base URL of the analysis/forecast server
    #[arg(long, env = "EXPENSEGUARD_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 820.0)]
    pub height: f32,
}

impl Config {
    /// Resolve an endpoint path against the server URL.
    ///
    /// Any path on the server URL is kept as a prefix, so
    /// `http://host/api` + `forecast` gives `http://host/api/forecast`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServer {
            url: self.server.clone(),
            reason,
        };

        let mut base = Url::parse(&self.server).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        base.join(path).map_err(|e| invalid(e.to_string()))
    }
}
