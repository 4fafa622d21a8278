//! Permission matrix model.
//!
//! A [`PermissionMatrix`] holds one [`ObjectPermission`] per [`ObjectType`].
//! It is a struct with four required fields rather than a map, so a loaded
//! matrix can never be partial. Each `(object, action)` pair is an
//! independent fact: no wildcards, no inheritance, no row-level rules.

use crate::error::MatrixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// The CRM entity categories the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Salesforce `Account` records.
    Accounts,
    /// Salesforce `Contact` records.
    Contacts,
    /// Salesforce `Opportunity` records.
    Opportunities,
    /// Tasks and events.
    Activities,
}

impl ObjectType {
    /// Every object type, in display order.
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Accounts,
        ObjectType::Contacts,
        ObjectType::Opportunities,
        ObjectType::Activities,
    ];

    /// Wire name, as used in the permissions payload.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Contacts => "contacts",
            Self::Opportunities => "opportunities",
            Self::Activities => "activities",
        }
    }

    /// Capitalised plural label ("Opportunities").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accounts => "Accounts",
            Self::Contacts => "Contacts",
            Self::Opportunities => "Opportunities",
            Self::Activities => "Activities",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = MatrixError;

    /// Accepts the wire name or its singular form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accounts" | "account" => Ok(Self::Accounts),
            "contacts" | "contact" => Ok(Self::Contacts),
            "opportunities" | "opportunity" => Ok(Self::Opportunities),
            "activities" | "activity" => Ok(Self::Activities),
            _ => Err(MatrixError::UnknownObject(s.to_string())),
        }
    }
}

/// A CRUD action on an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    /// Create new records.
    Create,
    /// View records.
    Read,
    /// Modify existing records.
    Edit,
    /// Remove records.
    Delete,
}

impl PermissionAction {
    /// Every action, in display order.
    pub const ALL: [PermissionAction; 4] = [
        PermissionAction::Create,
        PermissionAction::Read,
        PermissionAction::Edit,
        PermissionAction::Delete,
    ];

    /// Wire name, as used in the permissions payload.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Verb used in user-facing copy ("view" rather than "read").
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionAction {
    type Err = MatrixError;

    /// Accepts the wire name plus the `view`/`update` synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "read" | "view" => Ok(Self::Read),
            "edit" | "update" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(MatrixError::UnknownAction(s.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Matrix
// ─────────────────────────────────────────────────────────────────────────────

/// The four CRUD flags for one object type.
///
/// All fields are required when deserialising; a payload missing one is
/// malformed. There is intentionally no `Default`: the safe default is
/// [`ObjectPermission::READ_ONLY`], not "all false".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPermission {
    /// May create records.
    pub create: bool,
    /// May view records.
    pub read: bool,
    /// May modify records.
    pub edit: bool,
    /// May remove records.
    pub delete: bool,
}

impl ObjectPermission {
    /// Read allowed, everything else denied.
    pub const READ_ONLY: Self = Self::new(false, true, false, false);
    /// Every action allowed.
    pub const FULL: Self = Self::new(true, true, true, true);
    /// Every action denied.
    pub const NONE: Self = Self::new(false, false, false, false);

    /// Build from the flags in `create, read, edit, delete` order.
    #[must_use]
    pub const fn new(create: bool, read: bool, edit: bool, delete: bool) -> Self {
        Self {
            create,
            read,
            edit,
            delete,
        }
    }

    /// The stored flag for `action`.
    #[must_use]
    pub fn allows(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::Create => self.create,
            PermissionAction::Read => self.read,
            PermissionAction::Edit => self.edit,
            PermissionAction::Delete => self.delete,
        }
    }

    /// Overwrite the flag for `action`.
    pub fn set(&mut self, action: PermissionAction, allowed: bool) {
        match action {
            PermissionAction::Create => self.create = allowed,
            PermissionAction::Read => self.read = allowed,
            PermissionAction::Edit => self.edit = allowed,
            PermissionAction::Delete => self.delete = allowed,
        }
    }
}

/// Per-object CRUD permissions for the signed-in user.
///
/// Serialises to the shape returned by `GET /api/salesforce/permissions`:
///
/// ```json
/// {
///   "accounts":      { "create": true, "read": true, "edit": true, "delete": false },
///   "contacts":      { "create": true, "read": true, "edit": true, "delete": false },
///   "opportunities": { "create": false, "read": true, "edit": false, "delete": false },
///   "activities":    { "create": true, "read": true, "edit": true, "delete": true }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    /// Account permissions.
    pub accounts: ObjectPermission,
    /// Contact permissions.
    pub contacts: ObjectPermission,
    /// Opportunity permissions.
    pub opportunities: ObjectPermission,
    /// Activity permissions.
    pub activities: ObjectPermission,
}

impl PermissionMatrix {
    /// Same permission for every object type.
    #[must_use]
    pub const fn uniform(permission: ObjectPermission) -> Self {
        Self {
            accounts: permission,
            contacts: permission,
            opportunities: permission,
            activities: permission,
        }
    }

    /// The matrix installed when permissions cannot be resolved: every
    /// object readable, nothing writable.
    #[must_use]
    pub const fn fallback() -> Self {
        Self::uniform(ObjectPermission::READ_ONLY)
    }

    /// Every action on every object.
    #[must_use]
    pub const fn full_access() -> Self {
        Self::uniform(ObjectPermission::FULL)
    }

    /// Nothing on any object.
    #[must_use]
    pub const fn no_access() -> Self {
        Self::uniform(ObjectPermission::NONE)
    }

    /// Decode the endpoint payload.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Parse`] when an object key or action flag is
    /// missing, or a flag is not a boolean.
    pub fn from_json(json: &str) -> Result<Self, MatrixError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode the endpoint payload from raw bytes.
    ///
    /// # Errors
    ///
    /// Same as [`PermissionMatrix::from_json`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MatrixError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Permissions for one object type.
    #[must_use]
    pub fn get(&self, object: ObjectType) -> &ObjectPermission {
        match object {
            ObjectType::Accounts => &self.accounts,
            ObjectType::Contacts => &self.contacts,
            ObjectType::Opportunities => &self.opportunities,
            ObjectType::Activities => &self.activities,
        }
    }

    /// Mutable permissions for one object type.
    pub fn get_mut(&mut self, object: ObjectType) -> &mut ObjectPermission {
        match object {
            ObjectType::Accounts => &mut self.accounts,
            ObjectType::Contacts => &mut self.contacts,
            ObjectType::Opportunities => &mut self.opportunities,
            ObjectType::Activities => &mut self.activities,
        }
    }

    /// Overwrite a single `(object, action)` flag.
    pub fn set(&mut self, object: ObjectType, action: PermissionAction, allowed: bool) {
        self.get_mut(object).set(action, allowed);
    }

    /// Builder-style [`PermissionMatrix::set`].
    #[must_use]
    pub fn with(mut self, object: ObjectType, action: PermissionAction, allowed: bool) -> Self {
        self.set(object, action, allowed);
        self
    }

    /// `(object, permission)` pairs in [`ObjectType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectType, &ObjectPermission)> + '_ {
        ObjectType::ALL.into_iter().map(move |object| (object, self.get(object)))
    }
}
