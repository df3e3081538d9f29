//! End-to-end submission flow
//!
//! Completed quiz through record building, validation, the two-phase
//! submitter, and the outbox, with a controllable sink standing in for the
//! webhook.

use async_trait::async_trait;
use leadfunnel::attribution::Attribution;
use leadfunnel::error::{Error, Result};
use leadfunnel::quiz::QuizState;
use leadfunnel::routing::RoutingProfile;
use leadfunnel::storage::MemoryStore;
use leadfunnel::submit::{
    LeadRecord, LeadSink, Outbox, RateLimiter, SubmitOutcome, Submitter,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

struct FakeWebhook {
    delivered: Mutex<Vec<LeadRecord>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FakeWebhook {
    fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl LeadSink for FakeWebhook {
    async fn deliver(&self, record: &LeadRecord) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Other("503 from webhook".to_string()));
        }
        self.delivered.lock().unwrap().push(record.clone());
        Ok(())
    }
}

fn completed_state() -> QuizState {
    let mut state = QuizState::new();
    for value in ["multi", "7+", "never", "trust", "yes", "second-job"] {
        state.select(value).unwrap();
    }
    state.contact.first_name = "Pat".to_string();
    state.contact.email = "pat@holdings.example".to_string();
    state.contact.company = "Pat Holdings".to_string();
    state
}

fn quiz_record() -> LeadRecord {
    let state = completed_state();
    let profile = RoutingProfile::from_state(&state);
    let mut attribution = Attribution::default();
    attribution.utm_source = Some("google".to_string());
    LeadRecord::from_quiz(
        &state,
        &profile,
        HashMap::from([("speed".to_string(), "asap".to_string())]),
        attribution,
    )
}

fn submitter(sink: Arc<FakeWebhook>, dir: &TempDir) -> Submitter {
    Submitter::new(
        Some(sink),
        Outbox::new(dir.path().to_path_buf()).unwrap(),
        RateLimiter::new(Arc::new(MemoryStore::new()), 60, 10),
        Duration::from_secs(2),
    )
}

#[tokio::test]
async fn completed_quiz_submits_full_wire_record() {
    let dir = TempDir::new().unwrap();
    let webhook = Arc::new(FakeWebhook::new());
    let submitter = submitter(webhook.clone(), &dir);

    let outcome = submitter.submit(&quiz_record(), "").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Sent);

    let delivered = webhook.delivered.lock().unwrap();
    let record = &delivered[0];
    assert_eq!(record.first_name, "Pat");
    assert_eq!(record.tier, "a");
    assert_eq!(record.pain_level, "high");
    assert_eq!(record.urgency, "high");
    assert_eq!(record.case_study_route, "cpa");
    assert_eq!(record.maturity_score, 5);
    assert_eq!(record.industry_label, "multi-entity operations");
    assert_eq!(record.bridge_responses.get("speed").unwrap(), "asap");
    assert_eq!(record.attribution.utm_source.as_deref(), Some("google"));
}

#[tokio::test]
async fn failed_delivery_queues_then_flush_drains() {
    let dir = TempDir::new().unwrap();
    let webhook = Arc::new(FakeWebhook::new());
    webhook.set_failing(true);
    let submitter = submitter(webhook.clone(), &dir);

    let outcome = submitter.submit(&quiz_record(), "").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Queued);
    assert_eq!(submitter.outbox_len(), 1);

    // Endpoint comes back; a flush delivers the queued lead.
    webhook.set_failing(false);
    let stats = submitter.flush_outbox().await.unwrap();
    assert_eq!(stats.delivered, 1);
    assert_eq!(stats.remaining, 0);
    assert_eq!(submitter.outbox_len(), 0);

    let delivered = webhook.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].email, "pat@holdings.example");
}

#[tokio::test]
async fn disposable_email_never_reaches_the_wire() {
    let dir = TempDir::new().unwrap();
    let webhook = Arc::new(FakeWebhook::new());
    let submitter = submitter(webhook.clone(), &dir);

    let mut record = quiz_record();
    record.email = "pat@10minutemail.com".to_string();

    let result = submitter.submit(&record, "").await;
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(webhook.calls.load(Ordering::SeqCst), 0);
    assert_eq!(submitter.outbox_len(), 0);
}

#[tokio::test]
async fn honeypot_suppresses_without_touching_sink_or_outbox() {
    let dir = TempDir::new().unwrap();
    let webhook = Arc::new(FakeWebhook::new());
    let submitter = submitter(webhook.clone(), &dir);

    let outcome = submitter.submit(&quiz_record(), "filled-by-bot").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Suppressed);
    assert_eq!(webhook.calls.load(Ordering::SeqCst), 0);
    assert_eq!(submitter.outbox_len(), 0);
}

#[tokio::test]
async fn exit_form_record_is_minimal_but_valid() {
    let dir = TempDir::new().unwrap();
    let webhook = Arc::new(FakeWebhook::new());
    let submitter = submitter(webhook.clone(), &dir);

    let record = LeadRecord::exit_form("reader@example.com", "Reader");
    let outcome = submitter.submit(&record, "").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Sent);

    let delivered = webhook.delivered.lock().unwrap();
    assert!(delivered[0].industry.is_empty());
    assert_eq!(delivered[0].maturity_score, 0);
}
