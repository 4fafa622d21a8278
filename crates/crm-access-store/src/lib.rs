//! # crm-access store
//!
//! Owns the signed-in user's permission matrix for the lifetime of a session.
//!
//! ```text
//! SessionStatus ──on_session_change──► SessionEffect
//!                                          │
//!            FetchPermissions ─────────────┤──── ClearPermissions
//!                   │                                   │
//!          PermissionSource::fetch_permissions          ▼
//!                   │                            permissions = None
//!          Ok ──► matrix      Err ──► fallback matrix + error
//! ```
//!
//! The store is constructor-injected with a [`PermissionSource`], so tests
//! can hand it a scripted source, and views can be handed a fixed
//! [`PermissionSnapshot`](crm_access_core::PermissionSnapshot) without any store at all.

pub mod error;
pub mod session;
pub mod source;
pub mod store;

pub use error::FetchError;
pub use session::{on_session_change, SessionEffect, SessionStatus};
pub use source::{HttpPermissionSource, PermissionSource};
pub use store::PermissionStore;
