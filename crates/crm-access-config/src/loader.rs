//! Top-level config and loading.

use crate::{ConfigError, ConfigResult, EndpointConfig, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Env var overriding [`EndpointConfig::base_url`].
pub const ENV_BASE_URL: &str = "CRM_ACCESS_BASE_URL";
/// Env var overriding [`EndpointConfig::path`].
pub const ENV_PERMISSIONS_PATH: &str = "CRM_ACCESS_PERMISSIONS_PATH";
/// Env var overriding [`EndpointConfig::auth_token`].
pub const ENV_TOKEN: &str = "CRM_ACCESS_TOKEN";
/// Env var overriding [`EndpointConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "CRM_ACCESS_TIMEOUT_SECS";
/// Env var overriding [`LoggingConfig::level`].
pub const ENV_LOG_LEVEL: &str = "CRM_ACCESS_LOG_LEVEL";

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Permissions endpoint.
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Binary logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AccessConfig {
    /// `~/.config/crm-access/config.toml` (platform config dir).
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crm-access").join("config.toml"))
    }

    /// Load defaults, then the config file, then environment overrides, and
    /// validate the result.
    ///
    /// An explicit `path` must exist; the default path is used only if present.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or when the
    /// merged config fails [`AccessConfig::validate`].
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = Self::from_file_or_default(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a TOML file without env overrides or validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CRM_ACCESS_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the timeout override is not a number.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.endpoint.base_url = url;
        }
        if let Some(path) = lookup(ENV_PERMISSIONS_PATH) {
            self.endpoint.path = path;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.endpoint.auth_token = Some(token);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.endpoint.timeout_secs = timeout.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_TIMEOUT_SECS} must be a number, got '{timeout}'"))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::Invalid`] found.
    pub fn validate(&self) -> ConfigResult<()> {
        self.endpoint.validate()?;
        self.logging.validate()
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if rendering fails.
    pub fn display_as_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Render as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if rendering fails.
    pub fn display_as_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_win() {
        let mut config = AccessConfig::default();
        config
            .apply_env_overrides(lookup_from(&[
                (ENV_BASE_URL, "https://crm.example.com"),
                (ENV_TOKEN, "secret"),
                (ENV_TIMEOUT_SECS, "5"),
                (ENV_LOG_LEVEL, "debug"),
            ]))
            .unwrap();

        assert_eq!(config.endpoint.base_url, "https://crm.example.com");
        assert_eq!(config.endpoint.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.endpoint.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.endpoint.path, "/api/salesforce/permissions");
    }

    #[test]
    fn bad_timeout_override_is_invalid() {
        let mut config = AccessConfig::default();
        let err = config
            .apply_env_overrides(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("soon"), "got: {err}");
    }

    #[test]
    fn bad_log_level_override_is_invalid() {
        let mut config = AccessConfig::default();
        config
            .apply_env_overrides(lookup_from(&[(ENV_LOG_LEVEL, "degub")]))
            .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("degub"), "got: {err}");
    }

    #[test]
    fn empty_toml_is_default() {
        let config: AccessConfig = toml::from_str("").unwrap();
        assert_eq!(config, AccessConfig::default());
    }

    #[test]
    fn toml_round_trips_through_display() {
        let config = AccessConfig::default();
        let rendered = config.display_as_toml().unwrap();
        assert!(rendered.contains("[endpoint]"));
        let parsed: AccessConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
