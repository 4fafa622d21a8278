//! # crm-access core
//!
//! Permission primitives for the CRM dashboard: the per-object CRUD matrix,
//! the pure query API computed from it, and the gate decisions the view layer
//! uses to show or hide permission-dependent regions.
//!
//! ```text
//! PermissionMatrix ──► PermissionCheck ──► GateDecision
//!  (model)              (query)             (gate: Loading | Granted | Denied)
//!        ▲
//!        └── PermissionSnapshot (matrix + loading + error, produced by the store)
//! ```
//!
//! Nothing in this crate performs I/O. Fetching and session handling live in
//! `crm-access-store`.
//!
//! ## Quick Start
//!
//! ```rust
//! use crm_access_core::{
//!     ObjectType, PermissionAction, PermissionGate, PermissionLevel, PermissionMatrix,
//!     PermissionSnapshot,
//! };
//!
//! let snapshot = PermissionSnapshot::loaded(PermissionMatrix::fallback());
//! let check = snapshot.check();
//!
//! assert!(check.can_access_object(ObjectType::Accounts));
//! assert!(!check.has_permission(ObjectType::Accounts, PermissionAction::Delete));
//! assert_eq!(check.permission_level(), PermissionLevel::ReadOnly);
//!
//! let gate = PermissionGate::delete(ObjectType::Accounts);
//! assert_eq!(gate.decide(&snapshot).render("delete button", Some("locked")), Some("locked"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod badge;
pub mod denied;
pub mod error;
pub mod gate;
pub mod model;
pub mod query;
pub mod snapshot;

pub use badge::{BadgeTone, PermissionBadge};
pub use denied::PermissionDenied;
pub use error::MatrixError;
pub use gate::{is_allowed, GateDecision, MultiPermissionGate, PermissionGate};
pub use model::{ObjectPermission, ObjectType, PermissionAction, PermissionMatrix};
pub use query::{PermissionCheck, PermissionLevel};
pub use snapshot::PermissionSnapshot;
