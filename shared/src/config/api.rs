//! Remote API endpoint configuration

use serde::{Deserialize, Serialize};

/// Default base URL of the JobDesk REST API
///
/// Every endpoint path in the client is resolved against this single base,
/// including the `/api` prefix the server mounts its controllers under.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Remote API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined to (no trailing slash)
    pub base_url: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration for a specific base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            request_timeout_secs: default_timeout_secs(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// - `JOBDESK_API_URL` - base URL (defaults to the local dev server)
    /// - `JOBDESK_REQUEST_TIMEOUT_SECS` - per-request timeout
    pub fn from_env() -> Self {
        let base_url = std::env::var("JOBDESK_API_URL")
            .map(normalize_base_url)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            request_timeout_secs: std::env::var("JOBDESK_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
