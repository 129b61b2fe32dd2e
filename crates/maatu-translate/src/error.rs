//! Typed failures from the translation boundary.

use maatu_core::error::MaatuError;

/// Errors from the translation adapter.
///
/// There is no retry and no fallback language path; every variant is
/// terminal for the request that raised it.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("model load failed: {0}")]
    ModelLoad(String),
    #[error("decode failed: {0}")]
    Decode(String),
}

impl From<TranslateError> for MaatuError {
    fn from(err: TranslateError) -> Self {
        MaatuError::Translation(err.to_string())
    }
}
