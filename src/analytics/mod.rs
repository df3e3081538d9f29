//! Funnel event dispatch
//!
//! Events go to an opaque sink; the default implementation just logs them
//! through `tracing`. Dispatch is fire-and-forget and never fails the flow.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Funnel events worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelEvent {
    QuizStart,
    QuizAnswer,
    QuizBack,
    QuizEmailView,
    QuizComplete,
    QuizAbandon,
    ResultsView,
    SolutionView,
    CtaClickPrimary,
    CtaClickBooking,
    BridgeResponse,
    ExitPdfRequest,
    ReturnVisitorDetected,
}

impl FunnelEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelEvent::QuizStart => "quiz_start",
            FunnelEvent::QuizAnswer => "quiz_answer",
            FunnelEvent::QuizBack => "quiz_back",
            FunnelEvent::QuizEmailView => "quiz_email_view",
            FunnelEvent::QuizComplete => "quiz_complete",
            FunnelEvent::QuizAbandon => "quiz_abandon",
            FunnelEvent::ResultsView => "results_view",
            FunnelEvent::SolutionView => "solution_view",
            FunnelEvent::CtaClickPrimary => "cta_click_primary",
            FunnelEvent::CtaClickBooking => "cta_click_booking",
            FunnelEvent::BridgeResponse => "bridge_response",
            FunnelEvent::ExitPdfRequest => "exit_pdf_request",
            FunnelEvent::ReturnVisitorDetected => "return_visitor_detected",
        }
    }
}

/// Where events go. Implementations must not error; analytics never blocks
/// the funnel.
pub trait EventSink: Send + Sync {
    fn track(&self, event: FunnelEvent, params: &HashMap<String, String>);

    fn track_event(&self, event: FunnelEvent) {
        self.track(event, &HashMap::new());
    }
}

/// Default sink: structured log lines.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn track(&self, event: FunnelEvent, params: &HashMap<String, String>) {
        if params.is_empty() {
            info!(event = event.as_str(), "funnel event");
        } else {
            info!(event = event.as_str(), ?params, "funnel event");
        }
    }
}

/// Test sink that remembers everything it saw.
#[derive(Default)]
pub struct RecordingSink {
    events: std::sync::Mutex<Vec<(FunnelEvent, HashMap<String, String>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(FunnelEvent, HashMap<String, String>)> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn track(&self, event: FunnelEvent, params: &HashMap<String, String>) {
        self.events.lock().unwrap().push((event, params.clone()));
    }
}
