//! Permission query API.
//!
//! [`PermissionCheck`] answers point queries and aggregate classifications
//! against a borrowed matrix. Every method is a pure function of the matrix:
//! nothing is fetched and nothing is cached. A `None` matrix means "not
//! loaded" and denies everything.

use crate::model::{ObjectType, PermissionAction, PermissionMatrix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display-only summary of a matrix. It never gates behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// Every action on every object.
    Admin,
    /// Can create somewhere and edit somewhere.
    Manager,
    /// Can edit somewhere but create nowhere.
    User,
    /// No create or edit anywhere.
    #[serde(rename = "readonly")]
    ReadOnly,
    /// Permissions not loaded.
    None,
}

impl PermissionLevel {
    /// Wire name (`admin`, `manager`, `user`, `readonly`, `none`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
            Self::ReadOnly => "readonly",
            Self::None => "none",
        }
    }

    /// Human label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::User => "User",
            Self::ReadOnly => "Read Only",
            Self::None => "No Access",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view over an optional matrix.
///
/// # Example
///
/// ```
/// use crm_access_core::{ObjectType, PermissionAction, PermissionCheck, PermissionMatrix};
///
/// let matrix = PermissionMatrix::fallback();
/// let check = PermissionCheck::new(Some(&matrix));
/// assert!(check.can_access_object(ObjectType::Contacts));
/// assert!(!check.can_edit(ObjectType::Contacts));
///
/// let unloaded = PermissionCheck::new(None);
/// assert!(!unloaded.has_permission(ObjectType::Contacts, PermissionAction::Read));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PermissionCheck<'a> {
    matrix: Option<&'a PermissionMatrix>,
}

impl<'a> PermissionCheck<'a> {
    /// Wrap a matrix, or `None` when permissions are not loaded.
    #[must_use]
    pub fn new(matrix: Option<&'a PermissionMatrix>) -> Self {
        Self { matrix }
    }

    /// Whether a matrix is present.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.matrix.is_some()
    }

    /// The stored flag, or `false` when not loaded.
    #[must_use]
    pub fn has_permission(&self, object: ObjectType, action: PermissionAction) -> bool {
        self.matrix
            .is_some_and(|matrix| matrix.get(object).allows(action))
    }

    /// Access means read. An object writable but not readable is inaccessible.
    #[must_use]
    pub fn can_access_object(&self, object: ObjectType) -> bool {
        self.has_permission(object, PermissionAction::Read)
    }

    /// Create, edit and delete all allowed. Read is not consulted.
    #[must_use]
    pub fn can_manage(&self, object: ObjectType) -> bool {
        self.has_permission(object, PermissionAction::Create)
            && self.has_permission(object, PermissionAction::Edit)
            && self.has_permission(object, PermissionAction::Delete)
    }

    /// Read allowed and nothing else.
    #[must_use]
    pub fn is_read_only(&self, object: ObjectType) -> bool {
        self.has_permission(object, PermissionAction::Read)
            && !self.has_permission(object, PermissionAction::Create)
            && !self.has_permission(object, PermissionAction::Edit)
            && !self.has_permission(object, PermissionAction::Delete)
    }

    /// At least one action allowed.
    #[must_use]
    pub fn has_any_permission(&self, object: ObjectType) -> bool {
        PermissionAction::ALL
            .into_iter()
            .any(|action| self.has_permission(object, action))
    }

    /// All sixteen flags allowed.
    #[must_use]
    pub fn has_full_access(&self) -> bool {
        ObjectType::ALL.into_iter().all(|object| {
            PermissionAction::ALL
                .into_iter()
                .all(|action| self.has_permission(object, action))
        })
    }

    /// Shorthand for `has_permission(object, Create)`.
    #[must_use]
    pub fn can_create(&self, object: ObjectType) -> bool {
        self.has_permission(object, PermissionAction::Create)
    }

    /// Alias of [`PermissionCheck::can_access_object`].
    #[must_use]
    pub fn can_view(&self, object: ObjectType) -> bool {
        self.can_access_object(object)
    }

    /// Shorthand for `has_permission(object, Edit)`.
    #[must_use]
    pub fn can_edit(&self, object: ObjectType) -> bool {
        self.has_permission(object, PermissionAction::Edit)
    }

    /// Shorthand for `has_permission(object, Delete)`.
    #[must_use]
    pub fn can_delete(&self, object: ObjectType) -> bool {
        self.has_permission(object, PermissionAction::Delete)
    }

    /// Objects the user can open, in [`ObjectType::ALL`] order.
    #[must_use]
    pub fn accessible_objects(&self) -> Vec<ObjectType> {
        ObjectType::ALL
            .into_iter()
            .filter(|object| self.can_access_object(*object))
            .collect()
    }

    /// Classify the matrix. First match wins:
    ///
    /// 1. `None` when not loaded
    /// 2. `Admin` with full access
    /// 3. `Manager` when some object allows create and some object allows edit
    /// 4. `User` when some object allows edit
    /// 5. `ReadOnly` otherwise
    #[must_use]
    pub fn permission_level(&self) -> PermissionLevel {
        if !self.is_loaded() {
            return PermissionLevel::None;
        }
        if self.has_full_access() {
            return PermissionLevel::Admin;
        }

        let any = |action: PermissionAction| {
            ObjectType::ALL
                .into_iter()
                .any(|object| self.has_permission(object, action))
        };
        let creates = any(PermissionAction::Create);
        let edits = any(PermissionAction::Edit);

        if creates && edits {
            PermissionLevel::Manager
        } else if edits {
            PermissionLevel::User
        } else {
            PermissionLevel::ReadOnly
        }
    }
}

impl PermissionMatrix {
    /// Query view over this matrix.
    #[must_use]
    pub fn check(&self) -> PermissionCheck<'_> {
        PermissionCheck::new(Some(self))
    }
}
