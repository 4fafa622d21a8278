//! Subcommand implementations.
//!
//! Each command renders to a `String` in a pure function and prints it in
//! `execute`, so the rendering can be tested without capturing stdout.

pub mod check;
pub mod config;
pub mod level;
pub mod matrix;

use anyhow::{Context, Result};
use colored::Colorize;
use crm_access_config::AccessConfig;
use crm_access_core::PermissionSnapshot;
use crm_access_store::{HttpPermissionSource, PermissionStore, SessionStatus};
use std::sync::Arc;
use tracing::debug;

/// Sign in against the configured endpoint and return the resulting snapshot.
///
/// A failed fetch is not an error here: the snapshot carries the fallback
/// matrix and the message, like it would for any other consumer.
pub async fn load_snapshot(config: &AccessConfig) -> Result<PermissionSnapshot> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("crm-access/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;
    let source = HttpPermissionSource::new(client, &config.endpoint);
    debug!("Using permissions endpoint {}", source.url());

    let store = PermissionStore::new(Arc::new(source));
    store
        .handle_session_change(SessionStatus::Authenticated)
        .await;
    Ok(store.snapshot().await)
}

/// Warning shown when the snapshot runs on the fallback matrix.
pub fn degraded_notice(snapshot: &PermissionSnapshot) -> Option<String> {
    snapshot.error.as_ref().map(|error| {
        format!(
            "{} could not resolve permissions; showing read-only fallback\n  {error}",
            "warning:".yellow().bold(),
        )
    })
}

fn print_degraded_notice(snapshot: &PermissionSnapshot) {
    if let Some(notice) = degraded_notice(snapshot) {
        eprintln!("{notice}");
    }
}
