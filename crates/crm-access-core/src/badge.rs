//! Permission level badge.

use crate::query::{PermissionCheck, PermissionLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour family a badge is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    /// Admin.
    Danger,
    /// Manager.
    Info,
    /// User.
    Success,
    /// Read-only.
    Neutral,
    /// Not loaded.
    Muted,
}

/// Display summary of a [`PermissionLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionBadge {
    /// Level being displayed.
    pub level: PermissionLevel,
    /// Text on the badge.
    pub label: &'static str,
    /// Colour family.
    pub tone: BadgeTone,
}

impl PermissionBadge {
    /// Badge for the level computed from `check`.
    #[must_use]
    pub fn from_check(check: &PermissionCheck<'_>) -> Self {
        Self::from(check.permission_level())
    }
}

impl From<PermissionLevel> for PermissionBadge {
    fn from(level: PermissionLevel) -> Self {
        let tone = match level {
            PermissionLevel::Admin => BadgeTone::Danger,
            PermissionLevel::Manager => BadgeTone::Info,
            PermissionLevel::User => BadgeTone::Success,
            PermissionLevel::ReadOnly => BadgeTone::Neutral,
            PermissionLevel::None => BadgeTone::Muted,
        };
        Self {
            level,
            label: level.label(),
            tone,
        }
    }
}

impl fmt::Display for PermissionBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PermissionMatrix;

    #[test]
    fn badge_follows_level() {
        let matrix = PermissionMatrix::full_access();
        let badge = PermissionBadge::from_check(&matrix.check());
        assert_eq!(badge.level, PermissionLevel::Admin);
        assert_eq!(badge.tone, BadgeTone::Danger);
        assert_eq!(badge.to_string(), "Administrator");
    }

    #[test]
    fn unloaded_badge_is_muted() {
        let badge = PermissionBadge::from_check(&PermissionCheck::new(None));
        assert_eq!(badge.tone, BadgeTone::Muted);
        assert_eq!(badge.label, "No Access");
    }
}
