use super::{load_snapshot, print_degraded_notice};
use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use crm_access_config::AccessConfig;
use crm_access_core::{BadgeTone, ObjectType, PermissionBadge, PermissionSnapshot};
use serde::Serialize;

#[derive(Serialize)]
struct LevelReport {
    badge: PermissionBadge,
    accessible_objects: Vec<ObjectType>,
    full_access: bool,
}

pub async fn execute(config: AccessConfig, format: OutputFormat) -> Result<()> {
    let snapshot = load_snapshot(&config).await?;
    print_degraded_notice(&snapshot);

    let output = match format {
        OutputFormat::Table => render_table(&snapshot),
        OutputFormat::Json => render_json(&snapshot)?,
    };
    println!("{output}");
    Ok(())
}

fn paint(badge: &PermissionBadge) -> ColoredString {
    let label = badge.label.bold();
    match badge.tone {
        BadgeTone::Danger => label.red(),
        BadgeTone::Info => label.blue(),
        BadgeTone::Success => label.green(),
        BadgeTone::Neutral => label.normal(),
        BadgeTone::Muted => label.dimmed(),
    }
}

pub fn render_table(snapshot: &PermissionSnapshot) -> String {
    let check = snapshot.check();
    let badge = PermissionBadge::from_check(&check);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Object", "Access", "Manage"]);
    for object in ObjectType::ALL {
        let access = if check.can_access_object(object) {
            "yes"
        } else {
            "no"
        };
        let manage = if check.can_manage(object) {
            "yes"
        } else if check.is_read_only(object) {
            "read-only"
        } else {
            "no"
        };
        table.add_row(vec![
            Cell::new(object.label()),
            Cell::new(access),
            Cell::new(manage),
        ]);
    }

    format!("Permission level: {}\n{table}", paint(&badge))
}

pub fn render_json(snapshot: &PermissionSnapshot) -> Result<String> {
    let check = snapshot.check();
    let report = LevelReport {
        badge: PermissionBadge::from_check(&check),
        accessible_objects: check.accessible_objects(),
        full_access: check.has_full_access(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize permission level")
}
