use thiserror::Error;

/// Top-level error type for the Maatu system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for MaatuError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MaatuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conversation store error: {0}")]
    Store(String),

    #[error("Completion error: {0}")]
    Llm(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MaatuError {
    fn from(err: toml::de::Error) -> Self {
        MaatuError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MaatuError {
    fn from(err: toml::ser::Error) -> Self {
        MaatuError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MaatuError {
    fn from(err: serde_json::Error) -> Self {
        MaatuError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Maatu operations.
pub type Result<T> = std::result::Result<T, MaatuError>;
