//! Chat engine: transcript state and single-shot query dispatch.
//!
//! [`ChatEngine`] owns the append-only transcript and the input buffer. A
//! submission echoes the user's text into the transcript immediately, then
//! performs one round trip to the agent endpoint and appends either the
//! answer (with derived display stats) or a synthetic connectivity-error
//! entry. A failed answer is the one error the user is actually waiting on,
//! so it is surfaced in the transcript rather than only logged.

pub mod display;
mod transcript;

pub use display::{
    confidence_for, format_ms, DisplaySource, PipelineEstimate, RagDisplayStats, SourceKind,
};
pub use transcript::{ChatMessage, Role};

use crate::api::{AgentQueryRequest, ConstitutionalBackend, QueryMode};
use std::sync::Arc;

/// Greeting seeded into every new transcript.
const GREETING: &str = "SYSTEM INITIALIZED. CONSTITUTIONAL MISTRAL READY. AWAITING QUERY.";

/// Outcome of a [`ChatEngine::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Answer received and appended.
    Answered,
    /// Query failed; a synthetic error entry was appended.
    Failed,
    /// Input was blank; nothing was dispatched or appended.
    Ignored,
}

/// Client-side chat state controller.
///
/// One engine handles one conversation. `submit` borrows the engine mutably
/// for the whole round trip, so overlapping submissions are structurally
/// impossible: callers must await the outcome of one query before starting
/// the next.
pub struct ChatEngine {
    backend: Arc<dyn ConstitutionalBackend>,
    mode: QueryMode,
    messages: Vec<ChatMessage>,
    input: String,
    awaiting: bool,
    last_error: Option<String>,
}

impl ChatEngine {
    /// New engine with mode hint "auto" (server picks the response mode).
    pub fn new(backend: Arc<dyn ConstitutionalBackend>) -> Self {
        Self {
            backend,
            mode: QueryMode::Auto,
            messages: vec![ChatMessage::assistant(GREETING, None)],
            input: String::new(),
            awaiting: false,
            last_error: None,
        }
    }

    /// Pin the response mode instead of letting the server choose.
    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Append-only transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// True while a query round trip is in flight.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Raw error text from the most recent failed query, cleared on the next
    /// submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Dispatch the current input buffer to the agent endpoint.
    ///
    /// Blank or whitespace-only input is a no-op: nothing is appended and
    /// the backend is never called. Otherwise the input is echoed into the
    /// transcript verbatim (untrimmed), the buffer is cleared, and exactly
    /// one assistant entry is appended whichever way the round trip ends.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let question = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(question.clone()));
        self.awaiting = true;
        self.last_error = None;

        let request = AgentQueryRequest {
            question,
            mode: Some(self.mode),
        };

        let outcome = match self.backend.agent_query(request).await {
            Ok(response) => {
                let stats = RagDisplayStats::from(&response);
                tracing::info!(
                    total_time_ms = response.total_time_ms,
                    evidence_level = ?response.evidence_level,
                    warden_status = ?response.warden_status,
                    sources = response.sources.len(),
                    "agent query answered"
                );
                self.messages
                    .push(ChatMessage::assistant(response.answer, Some(stats)));
                SubmitOutcome::Answered
            }
            Err(e) => {
                let raw = e.to_string();
                tracing::error!(error = %raw, "agent query failed");
                self.messages.push(ChatMessage::assistant(
                    format!(
                        "CONNECTION FAILURE: {}. UNABLE TO REACH CONSTITUTIONAL ARCHIVES.",
                        raw
                    ),
                    None,
                ));
                self.last_error = Some(raw);
                SubmitOutcome::Failed
            }
        };

        // Runs on both branches: awaiting never survives a completed submit.
        self.awaiting = false;
        outcome
    }
}
