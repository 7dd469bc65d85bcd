//! SessionManager: concurrent in-process map with store-backed
//! persistence.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use dealfinder_core::constants::SESSION_KEY_PREFIX;
use dealfinder_core::errors::DealResult;
use dealfinder_core::traits::ICacheStore;

use crate::state::SessionState;

/// Thread-safe session manager. The `DashMap` serves the hot path; every
/// save is written through to the store so sessions survive the process
/// and expire via store TTL.
pub struct SessionManager {
    store: Arc<dyn ICacheStore>,
    sessions: DashMap<String, SessionState>,
    ttl_seconds: u64,
}

impl SessionManager {
    pub fn new(store: Arc<dyn ICacheStore>, ttl_seconds: u64) -> Self {
        Self {
            store,
            sessions: DashMap::new(),
            ttl_seconds,
        }
    }

    fn store_key(session_id: &str) -> String {
        format!("{SESSION_KEY_PREFIX}{session_id}")
    }

    /// Start a brand-new session under a generated id.
    pub fn create(&self) -> SessionState {
        let state = SessionState::new(uuid::Uuid::new_v4().to_string());
        self.sessions.insert(state.session_id.clone(), state.clone());
        state
    }

    /// Load a session, falling back to the store when the process-local
    /// map has no copy. A missing or undecodable stored session yields a
    /// fresh one.
    pub async fn load_or_create(&self, session_id: &str) -> SessionState {
        if let Some(state) = self.sessions.get(session_id) {
            return state.clone();
        }

        match self.store.get(&Self::store_key(session_id)).await {
            Ok(Some(raw)) => match serde_json::from_str::<SessionState>(&raw) {
                Ok(state) => {
                    debug!(session_id, "session restored from store");
                    self.sessions.insert(session_id.to_string(), state.clone());
                    return state;
                }
                Err(err) => {
                    warn!(session_id, error = %err, "undecodable session, starting fresh");
                }
            },
            Ok(None) => {}
            Err(err) => {
                warn!(session_id, error = %err, "session store read failed, starting fresh");
            }
        }

        let state = SessionState::new(session_id.to_string());
        self.sessions.insert(session_id.to_string(), state.clone());
        state
    }

    /// Persist a session to the local map and write it through to the
    /// store with the session TTL.
    pub async fn save(&self, state: SessionState) -> DealResult<()> {
        let key = Self::store_key(&state.session_id);
        let payload = serde_json::to_string(&state)?;
        self.sessions.insert(state.session_id.clone(), state);
        self.store
            .set_with_ttl(&key, &payload, self.ttl_seconds)
            .await?;
        Ok(())
    }

    /// Remove a session everywhere.
    pub async fn remove(&self, session_id: &str) -> DealResult<()> {
        self.sessions.remove(session_id);
        self.store.delete(&Self::store_key(session_id)).await?;
        Ok(())
    }

    /// Number of sessions in the process-local map.
    pub fn local_count(&self) -> usize {
        self.sessions.len()
    }
}
