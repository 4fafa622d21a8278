use super::{load_snapshot, print_degraded_notice};
use anyhow::Result;
use colored::Colorize;
use crm_access_config::AccessConfig;
use crm_access_core::{ObjectType, PermissionAction, PermissionDenied, PermissionGate, PermissionSnapshot};

/// Returns whether the action is allowed; the caller turns `false` into exit code 1.
pub async fn execute(
    config: AccessConfig,
    object: ObjectType,
    action: PermissionAction,
) -> Result<bool> {
    let snapshot = load_snapshot(&config).await?;
    print_degraded_notice(&snapshot);

    let (allowed, line) = render(&snapshot, object, action);
    println!("{line}");
    Ok(allowed)
}

pub fn render(
    snapshot: &PermissionSnapshot,
    object: ObjectType,
    action: PermissionAction,
) -> (bool, String) {
    let allowed = PermissionGate::new(object, action)
        .decide(snapshot)
        .is_granted();

    let line = if allowed {
        format!("{} {} {}", "granted:".green().bold(), action, object)
    } else {
        let denied = PermissionDenied::for_action(object, action);
        format!("{} {}", "denied:".red().bold(), denied.message())
    };
    (allowed, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_access_core::PermissionMatrix;

    #[test]
    fn fallback_allows_read_only() {
        let snapshot = PermissionSnapshot::degraded("offline");

        let (allowed, _) = render(&snapshot, ObjectType::Contacts, PermissionAction::Read);
        assert!(allowed);

        let (allowed, line) = render(&snapshot, ObjectType::Contacts, PermissionAction::Delete);
        assert!(!allowed);
        assert!(line.contains("You don't have permission to delete contacts."), "{line}");
    }

    #[test]
    fn full_access_grants() {
        let snapshot = PermissionSnapshot::loaded(PermissionMatrix::full_access());
        let (allowed, line) = render(&snapshot, ObjectType::Activities, PermissionAction::Edit);
        assert!(allowed);
        assert!(line.contains("edit activities"), "{line}");
    }

    #[test]
    fn pending_snapshot_is_denied() {
        let (allowed, _) = render(
            &PermissionSnapshot::pending(),
            ObjectType::Accounts,
            PermissionAction::Read,
        );
        assert!(!allowed);
    }
}
