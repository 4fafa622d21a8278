//! Session status transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication state reported by the session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Provider has not resolved the session yet.
    #[default]
    Loading,
    /// Signed in.
    Authenticated,
    /// Signed out.
    Unauthenticated,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Loading => "loading",
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        })
    }
}

/// What the store must do in response to a session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEffect {
    /// Issue one permissions fetch.
    FetchPermissions,
    /// Drop the matrix and stop loading.
    ClearPermissions,
    /// Nothing to do.
    None,
}

/// Pure transition function.
///
/// Entering `Authenticated` fetches, entering `Unauthenticated` clears.
/// Staying in a state, or moving into `Loading`, does nothing; in particular
/// a session refresh (`Authenticated → Loading → Authenticated`) fetches
/// again only on re-entry.
#[must_use]
pub fn on_session_change(old: SessionStatus, new: SessionStatus) -> SessionEffect {
    match (old, new) {
        (old, SessionStatus::Authenticated) if old != SessionStatus::Authenticated => {
            SessionEffect::FetchPermissions
        }
        (old, SessionStatus::Unauthenticated) if old != SessionStatus::Unauthenticated => {
            SessionEffect::ClearPermissions
        }
        _ => SessionEffect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SessionStatus::{Authenticated, Loading, Unauthenticated};

    #[test]
    fn sign_in_fetches() {
        assert_eq!(
            on_session_change(Loading, Authenticated),
            SessionEffect::FetchPermissions
        );
        assert_eq!(
            on_session_change(Unauthenticated, Authenticated),
            SessionEffect::FetchPermissions
        );
    }

    #[test]
    fn sign_out_clears() {
        assert_eq!(
            on_session_change(Authenticated, Unauthenticated),
            SessionEffect::ClearPermissions
        );
        assert_eq!(
            on_session_change(Loading, Unauthenticated),
            SessionEffect::ClearPermissions
        );
    }

    #[test]
    fn repeated_status_is_a_no_op() {
        for status in [Loading, Authenticated, Unauthenticated] {
            assert_eq!(on_session_change(status, status), SessionEffect::None);
        }
    }

    #[test]
    fn entering_loading_is_a_no_op() {
        assert_eq!(on_session_change(Authenticated, Loading), SessionEffect::None);
        assert_eq!(on_session_change(Unauthenticated, Loading), SessionEffect::None);
    }
}
