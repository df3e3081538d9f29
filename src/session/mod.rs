//! Session persistence and return-visitor detection
//!
//! Saves quiz state with a timestamp, rehydrates it within a 30-day validity
//! window, and answers the "has this visitor already finished" question that
//! gates showing results instead of the quiz. Persistence is best-effort:
//! storage failures are logged and swallowed, never surfaced to the flow.

use crate::error::Result;
use crate::quiz::QuizState;
use crate::storage::{keys, KeyValueStore, TypedStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default validity window for a stored session.
pub const DEFAULT_EXPIRY_DAYS: i64 = 30;

/// What actually gets persisted: the state plus when it was saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub state: QuizState,
    /// Epoch milliseconds.
    pub saved_at: i64,
}

/// Session manager over an injected key-value store.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    expiry_ms: i64,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_expiry_days(store, DEFAULT_EXPIRY_DAYS)
    }

    pub fn with_expiry_days(store: Arc<dyn KeyValueStore>, days: i64) -> Self {
        Self {
            store,
            expiry_ms: days * 24 * 60 * 60 * 1000,
        }
    }

    /// Persist the state with a fresh timestamp.
    ///
    /// Failures degrade to non-persistent mode; the quiz flow is never
    /// blocked on storage.
    pub fn save(&self, state: &QuizState) {
        let stored = StoredSession {
            state: state.clone(),
            saved_at: Utc::now().timestamp_millis(),
        };
        if let Err(e) = self.store.set_json(keys::QUIZ_SESSION, &stored) {
            warn!("session save failed, continuing without persistence: {e}");
        }
    }

    /// Load the stored session if present, valid, and parseable.
    ///
    /// An expired session is treated as absent and proactively cleared.
    /// Malformed data is a cache miss.
    pub fn load(&self) -> Option<QuizState> {
        let stored: StoredSession = match self.store.get_json(keys::QUIZ_SESSION) {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(e) => {
                warn!("session load failed: {e}");
                return None;
            }
        };

        if self.is_expired(stored.saved_at) {
            debug!("stored session expired, clearing");
            self.clear();
            return None;
        }

        Some(stored.state)
    }

    fn is_expired(&self, saved_at: i64) -> bool {
        Utc::now().timestamp_millis() - saved_at > self.expiry_ms
    }

    /// All six answers plus first name and email present.
    pub fn is_complete(&self, state: &QuizState) -> bool {
        state.is_complete()
    }

    /// Returning visitor who already finished the quiz.
    pub fn has_completed_quiz(&self) -> bool {
        self.load().map(|s| s.is_complete()).unwrap_or(false)
    }

    /// First name of a returning visitor, if one is stored.
    pub fn return_visitor_name(&self) -> Option<String> {
        let state = self.load()?;
        if state.contact.first_name.is_empty() {
            None
        } else {
            Some(state.contact.first_name)
        }
    }

    /// Remove the session and its ancillary bridge responses.
    ///
    /// Called on successful submission and on explicit retake.
    pub fn clear(&self) {
        for key in [keys::QUIZ_SESSION, keys::BRIDGE_RESPONSES] {
            if let Err(e) = self.store.remove(key) {
                warn!("failed to clear {key}: {e}");
            }
        }
    }

    /// Record a mid-page bridge response, merged into any existing map.
    pub fn save_bridge_response(&self, section: &str, response: &str) -> Result<()> {
        let mut responses = self.bridge_responses();
        responses.insert(section.to_string(), response.to_string());
        self.store.set_json(keys::BRIDGE_RESPONSES, &responses)
    }

    /// Bridge responses captured so far; empty on any storage trouble.
    pub fn bridge_responses(&self) -> HashMap<String, String> {
        self.store
            .get_json(keys::BRIDGE_RESPONSES)
            .ok()
            .flatten()
            .unwrap_or_default()
    }
}
