use super::{load_snapshot, print_degraded_notice};
use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use crm_access_config::AccessConfig;
use crm_access_core::{PermissionAction, PermissionLevel, PermissionMatrix, PermissionSnapshot};
use serde::Serialize;

#[derive(Serialize)]
struct MatrixReport<'a> {
    permissions: Option<&'a PermissionMatrix>,
    level: PermissionLevel,
    error: Option<&'a str>,
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

/// One row per object, one column per action.
pub fn render_table(snapshot: &PermissionSnapshot) -> String {
    let Some(matrix) = snapshot.permissions.as_ref() else {
        return "No permissions loaded".dimmed().to_string();
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(
        std::iter::once(Cell::new("Object"))
            .chain(PermissionAction::ALL.iter().map(|action| Cell::new(action.as_str())))
            .collect::<Vec<_>>(),
    );

    for (object, permission) in matrix.iter() {
        let mut row = vec![Cell::new(object.label())];
        row.extend(PermissionAction::ALL.iter().map(|action| {
            if permission.allows(*action) {
                Cell::new("yes").fg(Color::Green)
            } else {
                Cell::new("no").fg(Color::Red)
            }
        }));
        table.add_row(row);
    }

    table.to_string()
}

pub fn render_json(snapshot: &PermissionSnapshot) -> Result<String> {
    let report = MatrixReport {
        permissions: snapshot.permissions.as_ref(),
        level: snapshot.check().permission_level(),
        error: snapshot.error.as_deref(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize permission matrix")
}
