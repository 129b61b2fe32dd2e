//! Chat dispatch: routes each incoming message through the completion or
//! translation adapters and keeps the persisted transcript in sync.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use maatu_core::types::{iso_now, ConversationTurn, Language};
use maatu_llm::{CompletionClient, PromptBuilder};
use maatu_store::ConversationStore;
use maatu_translate::{Direction, Translator};

use crate::error::ChatError;
use crate::session::SessionContext;

/// Per-request dispatch with two states and no others: an English message
/// goes straight to the completion API (DIRECT), anything else is
/// translated to English first and the reply translated back (TRANSLATED).
///
/// Session state lives behind a mutex; the store assumes a single writer
/// per transcript file and the lock upholds that.
pub struct ChatOrchestrator {
    llm: Arc<dyn CompletionClient>,
    translator: Arc<Translator>,
    prompts: PromptBuilder,
    store: ConversationStore,
    session: Mutex<SessionContext>,
}

impl ChatOrchestrator {
    /// Build an orchestrator over an existing store, resuming any turns
    /// already persisted at its path.
    pub fn new(
        llm: Arc<dyn CompletionClient>,
        translator: Arc<Translator>,
        store: ConversationStore,
    ) -> Self {
        let turns = store.load();
        let session = SessionContext::with_turns(turns);
        info!(
            session_id = %session.id(),
            path = %store.path().display(),
            resumed_turns = session.len(),
            "Chat session started"
        );
        Self {
            llm,
            translator,
            prompts: PromptBuilder::new(),
            store,
            session: Mutex::new(session),
        }
    }

    /// Handle one user message end to end and return the assistant reply.
    ///
    /// The turn is appended and the whole transcript persisted only after
    /// every adapter call has succeeded; a failure anywhere leaves both
    /// the session and the file untouched.
    pub async fn handle_message(
        &self,
        message: &str,
        language: &str,
    ) -> Result<String, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let human_timestamp = iso_now();
        let reply = match Language::from_selector(language) {
            Language::English => {
                debug!("Dispatching direct completion");
                let prompt = self.prompts.build(language, message);
                self.llm.generate(&prompt).await?
            }
            Language::Kannada => {
                debug!("Dispatching translated completion");
                let inbound = Direction::KannadaToEnglish;
                let english = self.translator.translate(message, inbound).await?;
                let prompt = self.prompts.build("english", &english);
                let english_reply = self.llm.generate(&prompt).await?;
                self.translator
                    .translate(&english_reply, inbound.reverse())
                    .await?
            }
        };

        let turn = ConversationTurn {
            human: message.to_string(),
            human_timestamp,
            assistant: reply.clone(),
            assistant_timestamp: iso_now(),
            language: language.to_string(),
        };

        let mut session = self.session.lock().await;
        session.append(turn);
        self.store.save(session.turns())?;
        debug!(turns = session.len(), "Turn persisted");
        Ok(reply)
    }

    /// Mark the turn at `index` as the edit target.
    pub async fn begin_edit(&self, index: usize) -> Result<(), ChatError> {
        let mut session = self.session.lock().await;
        if !session.begin_edit(index) {
            return Err(ChatError::TurnOutOfRange(index));
        }
        Ok(())
    }

    /// Overwrite the assistant text of the turn under edit and persist.
    ///
    /// `index` must match the active edit target; the human text and the
    /// turn count are unchanged by an edit.
    pub async fn apply_edit(&self, index: usize, new_text: &str) -> Result<(), ChatError> {
        let mut session = self.session.lock().await;
        if session.editing_index() != Some(index) {
            return Err(ChatError::NoActiveEdit);
        }
        session.apply_edit(new_text);
        self.store.save(session.turns())?;
        info!(index, "Assistant reply edited");
        Ok(())
    }

    /// Discard the active edit without touching the transcript.
    pub async fn cancel_edit(&self) {
        self.session.lock().await.cancel_edit();
    }

    /// Render the transcript as the same pretty JSON the store writes.
    pub async fn export_json(&self) -> Result<String, ChatError> {
        let session = self.session.lock().await;
        let bytes = maatu_store::to_pretty_json(session.turns())?;
        String::from_utf8(bytes).map_err(|err| ChatError::Store(err.to_string()))
    }

    pub async fn turns(&self) -> Vec<ConversationTurn> {
        self.session.lock().await.turns().to_vec()
    }

    pub async fn turn_count(&self) -> usize {
        self.session.lock().await.len()
    }

    pub fn conversation_path(&self) -> &Path {
        self.store.path()
    }
}
