use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
///
/// Every variable has a development default, so `from_env` only fails when a
/// value is present but malformed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Jobdeck backend, without a trailing slash.
    pub base_url: String,
    /// Request timeout applied to every call.
    pub timeout_secs: u64,
}

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(ClientConfig {
            base_url: std::env::var("JOBDECK_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_secs: std::env::var("JOBDECK_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("JOBDECK_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
