//! Lead submission
//!
//! Serializes the completed quiz plus routing profile and attribution into a
//! flat record and POSTs it to the spreadsheet webhook. Delivery is
//! two-phase: one bounded attempt, then the outbox for anything that did not
//! get through, so the visitor is never held hostage by a slow endpoint.

pub mod outbox;
pub mod rate_limit;
pub mod submitter;

pub use outbox::Outbox;
pub use rate_limit::RateLimiter;
pub use submitter::{SubmitOutcome, Submitter};

use crate::attribution::Attribution;
use crate::error::{Error, Result};
use crate::quiz::QuizState;
use crate::routing::RoutingProfile;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Which form produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    QuizComplete,
    ExitPdf,
    PartnerInquiry,
}

/// Flat record the webhook receives. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub submission_type: SubmissionType,
    pub first_name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub entity_count: String,
    pub books_status: String,
    pub frustration: String,
    pub opportunity: String,
    pub personal_time: String,
    pub tier: String,
    pub pain_level: String,
    pub urgency: String,
    pub maturity_score: i32,
    pub case_study_route: String,
    pub industry_label: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub bridge_responses: HashMap<String, String>,
    #[serde(flatten)]
    pub attribution: Attribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl LeadRecord {
    /// Build the full record for a completed quiz.
    pub fn from_quiz(
        state: &QuizState,
        profile: &RoutingProfile,
        bridge_responses: HashMap<String, String>,
        attribution: Attribution,
    ) -> Self {
        Self {
            submission_type: SubmissionType::QuizComplete,
            first_name: state.contact.first_name.clone(),
            email: state.contact.email.clone(),
            company: state.contact.company.clone(),
            industry: state.answers.industry.clone(),
            entity_count: state.answers.entity_count.clone(),
            books_status: state.answers.books_status.clone(),
            frustration: state.answers.frustration.clone(),
            opportunity: state.answers.opportunity.clone(),
            personal_time: state.answers.personal_time.clone(),
            tier: profile.tier.as_str().to_string(),
            pain_level: profile.pain_level.as_str().to_string(),
            urgency: profile.urgency.as_str().to_string(),
            maturity_score: profile.maturity_score,
            case_study_route: profile.case_study_route.as_str().to_string(),
            industry_label: profile.industry_label.clone(),
            bridge_responses,
            attribution,
            user_agent: None,
            referrer: None,
        }
    }

    /// Minimal record for exit/lead-magnet forms. Only the email matters.
    pub fn exit_form(email: &str, first_name: &str) -> Self {
        Self {
            submission_type: SubmissionType::ExitPdf,
            first_name: first_name.to_string(),
            email: email.to_string(),
            company: String::new(),
            industry: String::new(),
            entity_count: String::new(),
            books_status: String::new(),
            frustration: String::new(),
            opportunity: String::new(),
            personal_time: String::new(),
            tier: String::new(),
            pain_level: String::new(),
            urgency: String::new(),
            maturity_score: 0,
            case_study_route: String::new(),
            industry_label: String::new(),
            bridge_responses: HashMap::new(),
            attribution: Attribution::default(),
            user_agent: None,
            referrer: None,
        }
    }
}

/// Delivery seam. The webhook implementation is the only production sink;
/// tests swap in a recording or failing one.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, record: &LeadRecord) -> Result<()>;
}

/// POSTs records to the configured Apps Script webhook.
pub struct WebhookSink {
    client: Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    async fn deliver(&self, record: &LeadRecord) -> Result<()> {
        debug!("posting lead to webhook");
        let response = self.client.post(&self.url).json(record).send().await?;
        response.error_for_status()?;
        Ok(())
    }
}
