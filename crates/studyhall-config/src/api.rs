//! API endpoint configuration.
//!
//! # Configuration
//!
//! - `STUDYHALL_API_URL`: Base URL of the platform API
//!   (default: `http://localhost:8000/api`)
//! - `STUDYHALL_API_TOKEN`: Bearer token attached to every request, if set
//! - `STUDYHALL_TIMEOUT_SECS`: Per-request timeout in seconds (default: 30)

use std::time::Duration;

/// Connection settings for the remote platform API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Bearer token for authenticated requests.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
            token: None,
        }
    }
}

impl ApiConfig {
    /// Creates an `ApiConfig` from environment variables.
    ///
    /// Falls back to default values if variables are not set or cannot be
    /// parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("STUDYHALL_API_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("STUDYHALL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            token: std::env::var("STUDYHALL_API_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Config pointing at an explicit base URL, with defaults otherwise.
    #[must_use]
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
