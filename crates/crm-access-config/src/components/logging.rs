//! Logging configuration.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Log verbosity for the binary. Libraries only emit `tracing` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`, or a comma-separated
    /// list of `target=level` directives.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Reject levels `tracing` cannot parse.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad level.
    pub fn validate(&self) -> ConfigResult<()> {
        for directive in self.level.split(',').map(str::trim) {
            let level = match directive.rsplit_once('=') {
                Some((_, level)) => level.trim(),
                None => directive,
            };
            if level.parse::<LevelFilter>().is_err() {
                return Err(ConfigError::Invalid(format!(
                    "logging.level has unknown level '{level}' in '{}'",
                    self.level
                )));
            }
        }
        Ok(())
    }
}
