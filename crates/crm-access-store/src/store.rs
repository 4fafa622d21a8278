//! Session-scoped permission store.

use crate::session::{on_session_change, SessionEffect, SessionStatus};
use crate::source::PermissionSource;
use crm_access_core::{ObjectType, PermissionAction, PermissionLevel, PermissionSnapshot};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

struct StoreState {
    snapshot: PermissionSnapshot,
    session: SessionStatus,
    /// Bumped by every fetch and every sign-out. A fetch only applies its
    /// result if the generation it started with is still current.
    generation: u64,
}

/// Single source of truth for the current session's permission matrix.
///
/// Fetches exactly once per triggering event: entering `Authenticated`, or an
/// explicit [`refresh_permissions`](Self::refresh_permissions). Overlapping
/// fetches resolve latest-wins; a response that arrives after a newer fetch
/// started, or after sign-out, is dropped.
///
/// # Example
///
/// ```rust,no_run
/// use crm_access_config::EndpointConfig;
/// use crm_access_store::{HttpPermissionSource, PermissionStore, SessionStatus};
/// use std::sync::Arc;
///
/// # async fn demo() -> Result<(), crm_access_store::FetchError> {
/// let source = HttpPermissionSource::from_config(&EndpointConfig::default())?;
/// let store = PermissionStore::new(Arc::new(source));
///
/// store.handle_session_change(SessionStatus::Authenticated).await;
/// let snapshot = store.snapshot().await;
/// println!("level: {}", snapshot.check().permission_level());
/// # Ok(())
/// # }
/// ```
pub struct PermissionStore {
    source: Arc<dyn PermissionSource>,
    state: RwLock<StoreState>,
}

impl PermissionStore {
    /// New store in the pre-session state: nothing loaded, `loading = true`.
    pub fn new(source: Arc<dyn PermissionSource>) -> Self {
        Self {
            source,
            state: RwLock::new(StoreState {
                snapshot: PermissionSnapshot::pending(),
                session: SessionStatus::Loading,
                generation: 0,
            }),
        }
    }

    /// Current matrix, loading flag and error.
    pub async fn snapshot(&self) -> PermissionSnapshot {
        self.state.read().await.snapshot.clone()
    }

    /// Last session status seen.
    pub async fn session_status(&self) -> SessionStatus {
        self.state.read().await.session
    }

    /// Point query against the current matrix.
    pub async fn has_permission(&self, object: ObjectType, action: PermissionAction) -> bool {
        self.state
            .read()
            .await
            .snapshot
            .check()
            .has_permission(object, action)
    }

    /// Level of the current matrix.
    pub async fn permission_level(&self) -> PermissionLevel {
        self.state.read().await.snapshot.check().permission_level()
    }

    /// Feed a session status from the session provider and apply the
    /// resulting effect. Returns the effect for callers that log or test it.
    ///
    /// A fetch triggered here completes before this returns.
    pub async fn handle_session_change(&self, status: SessionStatus) -> SessionEffect {
        let effect = {
            let mut state = self.state.write().await;
            let effect = on_session_change(state.session, status);
            debug!("Session {} -> {}: {:?}", state.session, status, effect);
            state.session = status;

            if effect == SessionEffect::ClearPermissions {
                state.generation += 1;
                state.snapshot = PermissionSnapshot::signed_out();
            }
            effect
        };

        if effect == SessionEffect::FetchPermissions {
            self.load().await;
        }
        effect
    }

    /// Re-fetch regardless of what is cached.
    ///
    /// Does nothing while the session is not authenticated. Returns whether a
    /// fetch was issued.
    pub async fn refresh_permissions(&self) -> bool {
        self.load().await
    }

    /// Fetch and install a matrix. The session check and the generation bump
    /// share one write lock, so a sign-out can never slip between them.
    async fn load(&self) -> bool {
        let generation = {
            let mut state = self.state.write().await;
            if state.session != SessionStatus::Authenticated {
                debug!("Skipping permission fetch while session is {}", state.session);
                return false;
            }
            state.generation += 1;
            state.snapshot.loading = true;
            state.snapshot.error = None;
            state.generation
        };

        let result = self.source.fetch_permissions().await;

        let mut state = self.state.write().await;
        if state.generation != generation || state.session != SessionStatus::Authenticated {
            debug!(
                "Discarding stale permission response (generation {}, current {}, session {})",
                generation, state.generation, state.session
            );
            return true;
        }

        state.snapshot = match result {
            Ok(matrix) => {
                info!(
                    "Loaded permissions (level: {})",
                    matrix.check().permission_level()
                );
                PermissionSnapshot::loaded(matrix)
            }
            Err(e) => {
                warn!("Permission fetch failed, falling back to read-only: {}", e);
                PermissionSnapshot::degraded(e.to_string())
            }
        };
        true
    }
}
