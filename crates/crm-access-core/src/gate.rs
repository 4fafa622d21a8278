//! Gate decisions for permission-dependent UI regions.
//!
//! A region moves `Loading → {Granted, Denied}`. There is no error state:
//! fetch failures are absorbed by the store's fallback matrix, so a gate only
//! ever sees a complete matrix or a pending load.

use crate::model::{ObjectType, PermissionAction, PermissionMatrix};
use crate::query::PermissionCheck;
use crate::snapshot::PermissionSnapshot;
use serde::{Deserialize, Serialize};

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateDecision {
    /// Permissions still loading; render neither content nor fallback.
    Loading,
    /// Render the gated content.
    Granted,
    /// Render the fallback, if any.
    Denied,
}

impl GateDecision {
    fn from_allowed(allowed: bool) -> Self {
        if allowed {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    /// `true` only for [`GateDecision::Granted`].
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Pick what to render.
    ///
    /// `Loading` yields `None` even when a fallback is supplied, which keeps a
    /// denied state from flashing before the matrix arrives.
    pub fn render<T>(self, children: T, fallback: Option<T>) -> Option<T> {
        match self {
            Self::Loading => None,
            Self::Granted => Some(children),
            Self::Denied => fallback,
        }
    }

    /// Lazy form of [`GateDecision::render`]; only the chosen branch is built.
    pub fn render_with<T>(
        self,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        match self {
            Self::Loading => None,
            Self::Granted => Some(children()),
            Self::Denied => fallback(),
        }
    }
}

/// The predicate views call directly when they do not need the tri-state.
#[must_use]
pub fn is_allowed(
    matrix: Option<&PermissionMatrix>,
    object: ObjectType,
    action: PermissionAction,
) -> bool {
    PermissionCheck::new(matrix).has_permission(object, action)
}

/// Single `(object, action)` gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionGate {
    /// Object the gated content acts on.
    pub object: ObjectType,
    /// Action the gated content performs.
    pub action: PermissionAction,
}

impl PermissionGate {
    /// Gate on an arbitrary action.
    #[must_use]
    pub fn new(object: ObjectType, action: PermissionAction) -> Self {
        Self { object, action }
    }

    /// Gate on [`PermissionAction::Create`].
    #[must_use]
    pub fn create(object: ObjectType) -> Self {
        Self::new(object, PermissionAction::Create)
    }

    /// Gate on [`PermissionAction::Read`].
    #[must_use]
    pub fn read(object: ObjectType) -> Self {
        Self::new(object, PermissionAction::Read)
    }

    /// Gate on [`PermissionAction::Edit`].
    #[must_use]
    pub fn edit(object: ObjectType) -> Self {
        Self::new(object, PermissionAction::Edit)
    }

    /// Gate on [`PermissionAction::Delete`].
    #[must_use]
    pub fn delete(object: ObjectType) -> Self {
        Self::new(object, PermissionAction::Delete)
    }

    /// Decide against the current store snapshot.
    #[must_use]
    pub fn decide(&self, snapshot: &PermissionSnapshot) -> GateDecision {
        if snapshot.loading {
            return GateDecision::Loading;
        }
        GateDecision::from_allowed(is_allowed(
            snapshot.permissions.as_ref(),
            self.object,
            self.action,
        ))
    }
}

/// Gate over several `(object, action)` pairs, combined with AND or OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiPermissionGate {
    /// Pairs evaluated independently.
    pub permissions: Vec<(ObjectType, PermissionAction)>,
    /// AND when set, OR otherwise.
    pub require_all: bool,
}

impl MultiPermissionGate {
    /// Build with an explicit combinator.
    pub fn new(
        permissions: impl IntoIterator<Item = (ObjectType, PermissionAction)>,
        require_all: bool,
    ) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            require_all,
        }
    }

    /// Granted when any pair is allowed.
    pub fn any_of(permissions: impl IntoIterator<Item = (ObjectType, PermissionAction)>) -> Self {
        Self::new(permissions, false)
    }

    /// Granted when every pair is allowed.
    pub fn all_of(permissions: impl IntoIterator<Item = (ObjectType, PermissionAction)>) -> Self {
        Self::new(permissions, true)
    }

    /// Decide against the current store snapshot.
    ///
    /// An empty pair list is granted under AND and denied under OR.
    #[must_use]
    pub fn decide(&self, snapshot: &PermissionSnapshot) -> GateDecision {
        if snapshot.loading {
            return GateDecision::Loading;
        }
        let check = snapshot.check();
        let mut results = self
            .permissions
            .iter()
            .map(|(object, action)| check.has_permission(*object, *action));

        let allowed = if self.require_all {
            results.all(|allowed| allowed)
        } else {
            results.any(|allowed| allowed)
        };
        GateDecision::from_allowed(allowed)
    }
}
