//! # crm-access configuration
//!
//! Where the permissions endpoint lives and how the CLI logs.
//!
//! Loading order, later wins:
//!
//! 1. Built-in defaults
//! 2. TOML file (explicit path, else `~/.config/crm-access/config.toml` if present)
//! 3. `CRM_ACCESS_*` environment variables
//!
//! ```toml
//! [endpoint]
//! base_url = "https://crm.example.com"
//! path = "/api/salesforce/permissions"
//! timeout_secs = 30
//!
//! [logging]
//! level = "info"
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crm_access_config::AccessConfig;
//!
//! let config = AccessConfig::load(None)?;
//! println!("{}", config.endpoint.permissions_url());
//! # Ok::<(), crm_access_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
mod error;
mod loader;

pub use components::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::*;
