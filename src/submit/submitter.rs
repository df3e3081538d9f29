//! Two-phase lead submission
//!
//! Phase one: a single bounded delivery attempt the caller awaits, so the
//! lead is sent before navigation when the network cooperates. Phase two:
//! anything that fails or times out lands in the outbox for a later
//! best-effort flush. No automatic in-flight retry.

use super::{LeadRecord, LeadSink, Outbox, RateLimiter};
use crate::error::{Error, Result};
use crate::validate::{check_email, is_honeypot_tripped, EmailCheck};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// How a submission attempt ended. Every variant lets the visitor proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered to the webhook.
    Sent,
    /// Delivery failed or timed out; queued in the outbox.
    Queued,
    /// No webhook configured; nothing sent, nothing queued.
    NotConfigured,
    /// Honeypot tripped. The caller shows a fake success and nothing is
    /// sent or stored.
    Suppressed,
}

pub struct Submitter {
    sink: Option<Arc<dyn LeadSink>>,
    outbox: Outbox,
    rate_limiter: RateLimiter,
    attempt_timeout: Duration,
}

impl Submitter {
    pub fn new(
        sink: Option<Arc<dyn LeadSink>>,
        outbox: Outbox,
        rate_limiter: RateLimiter,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            sink,
            outbox,
            rate_limiter,
            attempt_timeout,
        }
    }

    /// Validate and submit a lead.
    ///
    /// Bad or disposable emails are rejected before any network call. A
    /// tripped honeypot short-circuits into a silent fake success. Rate
    /// limiting rejects the attempt outright.
    pub async fn submit(&self, record: &LeadRecord, honeypot_field: &str) -> Result<SubmitOutcome> {
        if is_honeypot_tripped(honeypot_field) {
            info!("honeypot tripped, faking success");
            return Ok(SubmitOutcome::Suppressed);
        }

        match check_email(&record.email) {
            EmailCheck::Valid { .. } => {}
            EmailCheck::Malformed => {
                return Err(Error::Validation(format!(
                    "'{}' is not a valid email address",
                    record.email
                )))
            }
            EmailCheck::Disposable => {
                return Err(Error::Validation(
                    "disposable email addresses are not accepted".to_string(),
                ))
            }
        }

        self.rate_limiter.check_and_record()?;

        let sink = match &self.sink {
            Some(sink) => sink,
            None => {
                info!("webhook not configured, skipping submission");
                return Ok(SubmitOutcome::NotConfigured);
            }
        };

        match timeout(self.attempt_timeout, sink.deliver(record)).await {
            Ok(Ok(())) => {
                info!("lead submitted");
                Ok(SubmitOutcome::Sent)
            }
            Ok(Err(e)) => {
                warn!("submission failed, queueing in outbox: {e}");
                self.outbox.push(record)?;
                Ok(SubmitOutcome::Queued)
            }
            Err(_) => {
                warn!(
                    "submission timed out after {:?}, queueing in outbox",
                    self.attempt_timeout
                );
                self.outbox.push(record)?;
                Ok(SubmitOutcome::Queued)
            }
        }
    }

    /// Retry everything sitting in the outbox.
    pub async fn flush_outbox(&self) -> Result<super::outbox::FlushStats> {
        match &self.sink {
            Some(sink) => self.outbox.flush(sink.as_ref()).await,
            None => Err(Error::Config(
                "cannot flush outbox without a configured webhook".to_string(),
            )),
        }
    }

    /// Queued leads awaiting retry.
    pub fn outbox_len(&self) -> usize {
        self.outbox.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct CountingSink {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSink {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl LeadSink for CountingSink {
        async fn deliver(&self, _record: &LeadRecord) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Error::Other("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn submitter_with(sink: Option<Arc<dyn LeadSink>>, dir: &TempDir) -> Submitter {
        Submitter::new(
            sink,
            Outbox::new(dir.path().to_path_buf()).unwrap(),
            RateLimiter::new(Arc::new(MemoryStore::new()), 60, 10),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn happy_path_sends() {
        let dir = TempDir::new().unwrap();
        let sink = Arc::new(CountingSink::new(false));
        let submitter = submitter_with(Some(sink.clone()), &dir);

        let record = LeadRecord::exit_form("lead@example.com", "Lee");
        let outcome = submitter.submit(&record, "").await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(submitter.outbox_len(), 0);
    }

    #[tokio::test]
    async fn disposable_email_rejected_before_any_network_call() {
        let dir = TempDir::new().unwrap();
        let sink = Arc::new(CountingSink::new(false));
        let submitter = submitter_with(Some(sink.clone()), &dir);

        let record = LeadRecord::exit_form("bot@mailinator.com", "");
        let result = submitter.submit(&record, "").await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(sink.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn honeypot_fakes_success_and_sends_nothing() {
        let dir = TempDir::new().unwrap();
        let sink = Arc::new(CountingSink::new(false));
        let submitter = submitter_with(Some(sink.clone()), &dir);

        let record = LeadRecord::exit_form("bot@example.com", "");
        let outcome = submitter.submit(&record, "gotcha").await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Suppressed);
        assert_eq!(sink.calls.load(Ordering::SeqCst), 0);
        assert_eq!(submitter.outbox_len(), 0);
    }

    #[tokio::test]
    async fn failed_delivery_lands_in_outbox() {
        let dir = TempDir::new().unwrap();
        let submitter = submitter_with(Some(Arc::new(CountingSink::new(true))), &dir);

        let record = LeadRecord::exit_form("lead@example.com", "");
        let outcome = submitter.submit(&record, "").await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Queued);
        assert_eq!(submitter.outbox_len(), 1);
    }

    #[tokio::test]
    async fn missing_webhook_is_a_silent_noop() {
        let dir = TempDir::new().unwrap();
        let submitter = submitter_with(None, &dir);

        let record = LeadRecord::exit_form("lead@example.com", "");
        let outcome = submitter.submit(&record, "").await.unwrap();

        assert_eq!(outcome, SubmitOutcome::NotConfigured);
        assert_eq!(submitter.outbox_len(), 0);
    }

    #[tokio::test]
    async fn rate_limit_rejects_after_cap() {
        let dir = TempDir::new().unwrap();
        let submitter = Submitter::new(
            Some(Arc::new(CountingSink::new(false))),
            Outbox::new(dir.path().to_path_buf()).unwrap(),
            RateLimiter::new(Arc::new(MemoryStore::new()), 60, 1),
            Duration::from_secs(5),
        );

        let record = LeadRecord::exit_form("lead@example.com", "");
        assert_eq!(
            submitter.submit(&record, "").await.unwrap(),
            SubmitOutcome::Sent
        );
        assert!(matches!(
            submitter.submit(&record, "").await,
            Err(Error::RateLimited(_))
        ));
    }
}
