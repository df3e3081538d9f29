//! Funnel configuration
//!
//! Loaded from an optional TOML file with `FUNNEL_*` environment variable
//! overrides on top. Everything has a default; a missing config file is not
//! an error, and a missing webhook URL just means submissions no-op.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

fn default_timeout_secs() -> u64 {
    10
}

fn default_rate_limit_window_secs() -> i64 {
    60
}

fn default_rate_limit_max() -> usize {
    3
}

fn default_session_expiry_days() -> i64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    /// Apps Script webhook endpoint. None disables submission.
    pub webhook_url: Option<String>,

    /// Address the receiving side notifies on new leads.
    pub notification_email: Option<String>,

    /// Directory for the session store and outbox. Defaults to the
    /// platform data dir.
    pub data_dir: Option<PathBuf>,

    /// Per-attempt submission timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Rolling rate-limit window in seconds.
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: i64,

    /// Maximum submission attempts per window.
    #[serde(default = "default_rate_limit_max")]
    pub rate_limit_max: usize,

    /// Stored-session validity window in days.
    #[serde(default = "default_session_expiry_days")]
    pub session_expiry_days: i64,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            notification_email: None,
            data_dir: None,
            request_timeout_secs: default_timeout_secs(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            rate_limit_max: default_rate_limit_max(),
            session_expiry_days: default_session_expiry_days(),
        }
    }
}

impl FunnelConfig {
    /// Load from a TOML file, then apply environment overrides.
    ///
    /// With no path given, tries `funnel.toml` in the working directory and
    /// falls back to defaults when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("cannot read {}: {e}", path.display()))
                })?;
                toml::from_str(&raw)?
            }
            None => {
                let default_path = Path::new("funnel.toml");
                if default_path.exists() {
                    let raw = std::fs::read_to_string(default_path)?;
                    toml::from_str(&raw)?
                } else {
                    debug!("no config file, using defaults");
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FUNNEL_WEBHOOK_URL") {
            if !url.is_empty() {
                self.webhook_url = Some(url);
            }
        }
        if let Ok(email) = std::env::var("FUNNEL_NOTIFICATION_EMAIL") {
            if !email.is_empty() {
                self.notification_email = Some(email);
            }
        }
        if let Ok(dir) = std::env::var("FUNNEL_DATA_DIR") {
            if !dir.is_empty() {
                self.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(secs) = std::env::var("FUNNEL_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.request_timeout_secs = secs;
            }
        }
    }

    /// Resolved data directory, creating the default under the platform
    /// data dir when unset.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("leadfunnel")
        })
    }
}
