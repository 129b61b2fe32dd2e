//! Error types for the session orchestrator.

use maatu_core::error::MaatuError;
use maatu_llm::LlmError;
use maatu_translate::TranslateError;

/// Errors from the chat workflow.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("turn index {0} is out of range")]
    TurnOutOfRange(usize),
    #[error("no turn is being edited")]
    NoActiveEdit,
    #[error("completion failed: {0}")]
    Llm(String),
    #[error("translation failed: {0}")]
    Translation(String),
    #[error("persistence failed: {0}")]
    Store(String),
}

impl From<LlmError> for ChatError {
    fn from(err: LlmError) -> Self {
        ChatError::Llm(err.to_string())
    }
}

impl From<TranslateError> for ChatError {
    fn from(err: TranslateError) -> Self {
        ChatError::Translation(err.to_string())
    }
}

impl From<MaatuError> for ChatError {
    fn from(err: MaatuError) -> Self {
        ChatError::Store(err.to_string())
    }
}
