//! UTM and click-id capture
//!
//! Read-through cache of ad-attribution query parameters. Captured once per
//! landing, stored only when present so a later parameter-free page view
//! never wipes what an earlier ad click recorded.

use crate::storage::{keys, KeyValueStore, TypedStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use url::form_urlencoded;

const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
];

const CLICK_ID_KEYS: [&str; 4] = ["gclid", "fbclid", "msclkid", "ttclid"];

/// Flattened attribution fields included in the lead submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gclid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fbclid: Option<String>,
}

/// Attribution capture over an injected store.
pub struct AttributionTracker {
    store: Arc<dyn KeyValueStore>,
}

impl AttributionTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Capture UTM parameters and click ids from a landing-page query
    /// string. Stores each group only when at least one value is present.
    /// Storage failures are swallowed; attribution is never load-bearing.
    pub fn capture(&self, query: &str) {
        let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let utm: HashMap<&str, &str> = UTM_KEYS
            .iter()
            .filter_map(|k| params.get(*k).map(|v| (*k, v.as_str())))
            .collect();
        if !utm.is_empty() {
            if let Err(e) = self.store.set_json(keys::UTM, &utm) {
                warn!("failed to store utm params: {e}");
            }
        }

        let clicks: HashMap<&str, &str> = CLICK_ID_KEYS
            .iter()
            .filter_map(|k| params.get(*k).map(|v| (*k, v.as_str())))
            .collect();
        if !clicks.is_empty() {
            if let Err(e) = self.store.set_json(keys::CLICK_IDS, &clicks) {
                warn!("failed to store click ids: {e}");
            }
        }
    }

    /// Captured UTM parameters; empty on any storage trouble.
    pub fn utm(&self) -> HashMap<String, String> {
        self.store.get_json(keys::UTM).ok().flatten().unwrap_or_default()
    }

    /// Captured click ids; empty on any storage trouble.
    pub fn click_ids(&self) -> HashMap<String, String> {
        self.store
            .get_json(keys::CLICK_IDS)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Attribution fields formatted for the submission payload.
    pub fn attribution(&self) -> Attribution {
        let utm = self.utm();
        let clicks = self.click_ids();
        Attribution {
            utm_source: utm.get("utm_source").cloned(),
            utm_medium: utm.get("utm_medium").cloned(),
            utm_campaign: utm.get("utm_campaign").cloned(),
            utm_content: utm.get("utm_content").cloned(),
            gclid: clicks.get("gclid").cloned(),
            fbclid: clicks.get("fbclid").cloned(),
        }
    }
}
