//! Point-in-time view of the permission store.

use crate::model::PermissionMatrix;
use crate::query::PermissionCheck;
use serde::{Deserialize, Serialize};

/// What consumers observe: the matrix (if any), whether a fetch is
/// pending, and the last fetch error.
///
/// After a failed fetch `permissions` holds [`PermissionMatrix::fallback`]
/// and `error` is set; it is never left `None` by a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    /// Current matrix, `None` before sign-in and after sign-out.
    pub permissions: Option<PermissionMatrix>,
    /// A fetch is pending (or the session is still resolving).
    pub loading: bool,
    /// Human-readable message from the last failed fetch.
    pub error: Option<String>,
}

impl PermissionSnapshot {
    /// Session not yet resolved.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            permissions: None,
            loading: true,
            error: None,
        }
    }

    /// Signed out: nothing loaded, nothing pending.
    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            permissions: None,
            loading: false,
            error: None,
        }
    }

    /// A successfully loaded matrix.
    #[must_use]
    pub fn loaded(matrix: PermissionMatrix) -> Self {
        Self {
            permissions: Some(matrix),
            loading: false,
            error: None,
        }
    }

    /// Fetch failed: fallback matrix plus the error message.
    #[must_use]
    pub fn degraded(error: impl Into<String>) -> Self {
        Self {
            permissions: Some(PermissionMatrix::fallback()),
            loading: false,
            error: Some(error.into()),
        }
    }

    /// Query view over the current matrix.
    #[must_use]
    pub fn check(&self) -> PermissionCheck<'_> {
        PermissionCheck::new(self.permissions.as_ref())
    }

    /// Running on the fallback matrix after a failed fetch.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectType, PermissionAction, PermissionLevel};

    #[test]
    fn degraded_installs_fallback() {
        let snapshot = PermissionSnapshot::degraded("HTTP 500");
        assert_eq!(snapshot.permissions, Some(PermissionMatrix::fallback()));
        assert!(!snapshot.loading);
        assert!(snapshot.is_degraded());

        let check = snapshot.check();
        for object in ObjectType::ALL {
            assert!(check.has_permission(object, PermissionAction::Read));
            assert!(!check.has_permission(object, PermissionAction::Create));
            assert!(!check.has_permission(object, PermissionAction::Edit));
            assert!(!check.has_permission(object, PermissionAction::Delete));
        }
    }

    #[test]
    fn pending_and_signed_out_have_no_level() {
        assert_eq!(
            PermissionSnapshot::pending().check().permission_level(),
            PermissionLevel::None
        );
        assert_eq!(
            PermissionSnapshot::signed_out().check().permission_level(),
            PermissionLevel::None
        );
    }
}
