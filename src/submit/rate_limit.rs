//! Rolling-window submission rate limit
//!
//! Double-clicks are mitigated in the UI by disabling the control; this is
//! the second line, a small client-side cap on submission attempts per
//! rolling time window. Timestamps persist across reloads through the same
//! store the session uses.

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore, TypedStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_WINDOW_SECS: i64 = 60;
pub const DEFAULT_MAX_PER_WINDOW: usize = 3;

pub struct RateLimiter {
    store: Arc<dyn KeyValueStore>,
    window_ms: i64,
    max_per_window: usize,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn KeyValueStore>, window_secs: i64, max_per_window: usize) -> Self {
        Self {
            store,
            window_ms: window_secs * 1000,
            max_per_window,
        }
    }

    /// Record an attempt if the window has room, otherwise reject.
    ///
    /// Entries older than the window are pruned on every call. Storage
    /// trouble fails open: a broken store must not block submissions.
    pub fn check_and_record(&self) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        let mut timestamps: Vec<i64> = match self.store.get_json(keys::SUBMISSION_TIMESTAMPS) {
            Ok(Some(ts)) => ts,
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!("rate-limit store unavailable, allowing attempt: {e}");
                return Ok(());
            }
        };

        timestamps.retain(|ts| now - ts < self.window_ms);

        if timestamps.len() >= self.max_per_window {
            return Err(Error::RateLimited(format!(
                "{} submission attempts in the last {}s",
                timestamps.len(),
                self.window_ms / 1000
            )));
        }

        timestamps.push(now);
        if let Err(e) = self.store.set_json(keys::SUBMISSION_TIMESTAMPS, &timestamps) {
            debug!("failed to persist rate-limit timestamps: {e}");
        }
        Ok(())
    }
}
