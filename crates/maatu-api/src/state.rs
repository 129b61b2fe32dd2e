//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use maatu_chat::ChatOrchestrator;
use maatu_speech::SpeechSynthesizer;

/// Shared application state, passed to handlers via axum's State
/// extractor. All fields are `Arc` for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Session orchestrator (owns the conversation transcript).
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Text-to-speech backend.
    pub speech: Arc<dyn SpeechSynthesizer>,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(orchestrator: Arc<ChatOrchestrator>, speech: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            orchestrator,
            speech,
            start_time: Instant::now(),
        }
    }
}
