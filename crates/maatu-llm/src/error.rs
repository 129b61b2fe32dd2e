//! Error type for the completion client.

use maatu_core::error::MaatuError;

/// Errors from the remote completion API.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("API credential not set: {0}")]
    MissingCredential(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl From<LlmError> for MaatuError {
    fn from(err: LlmError) -> Self {
        MaatuError::Llm(err.to_string())
    }
}
