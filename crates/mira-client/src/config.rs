//! Client configuration.
//!
//! Environment-first: `MIRA_API_URL` selects the backend, defaulting to
//! a local development server.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable selecting the API base URL.
pub const API_URL_ENV: &str = "MIRA_API_URL";

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Versioned path prefix for all API endpoints except `/health`.
pub const API_PREFIX: &str = "/api/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL without the `/api/v1` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout (seconds). Requests are not retried on
    /// timeout; retry is left to user action.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Build configuration from the environment.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_base_url);
        Self {
            base_url,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Explicit base URL, trailing slash trimmed.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full prefix for versioned API endpoints.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_PREFIX)
    }
}
