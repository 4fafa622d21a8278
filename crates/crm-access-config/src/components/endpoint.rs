//! Permissions endpoint configuration.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default path of the permission-resolution route.
pub const DEFAULT_PERMISSIONS_PATH: &str = "/api/salesforce/permissions";

/// Where and how to fetch the permission matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Origin of the CRM web app.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Route returning the permission matrix.
    #[serde(default = "default_path")]
    pub path: String,

    /// Request timeout in seconds. A timed-out fetch counts as a failure.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token sent with the request, if the deployment needs one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_path() -> String {
    DEFAULT_PERMISSIONS_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
        }
    }
}

impl EndpointConfig {
    /// Full URL of the permissions route.
    #[must_use]
    pub fn permissions_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }

    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that cannot produce a request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty or non-HTTP base URL, a
    /// path without a leading `/`, or a zero timeout.
    pub fn validate(&self) -> ConfigResult<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::Invalid("endpoint.base_url is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint.base_url must start with http:// or https://, got '{base}'"
            )));
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "endpoint.path must start with '/', got '{}'",
                self.path
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "endpoint.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
