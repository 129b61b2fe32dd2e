//! Text-to-speech adapter.
//!
//! Maps the language selector onto the fixed two-entry code table
//! (English → "en", Kannada → "kn") and fetches raw audio bytes from a
//! remote TTS engine. Base64 encoding for JSON transport happens at the
//! API boundary, not here.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use maatu_core::config::SpeechConfig;
use maatu_core::error::MaatuError;

/// Errors from speech synthesis.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

impl From<SpeechError> for MaatuError {
    fn from(err: SpeechError) -> Self {
        MaatuError::Speech(err.to_string())
    }
}

/// Resolve the two-letter speech code for a selector.
///
/// Only English and Kannada are supported; anything that is not
/// "english" resolves to "kn".
pub fn speech_code(language: &str) -> &'static str {
    if language.trim().eq_ignore_ascii_case("english") {
        "en"
    } else {
        "kn"
    }
}

/// Seam for the TTS boundary.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Convert text to raw audio bytes, synchronously from the caller's
    /// point of view.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, Serialize)]
struct TtsRequestBody<'a> {
    text: &'a str,
    lang: &'a str,
}

/// HTTP client for a remote TTS engine returning raw audio bytes.
#[derive(Debug, Clone)]
pub struct RemoteTtsClient {
    config: SpeechConfig,
    http: reqwest::Client,
}

impl RemoteTtsClient {
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl SpeechSynthesizer for RemoteTtsClient {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, SpeechError> {
        let lang = speech_code(language);
        debug!(lang, chars = text.len(), "TTS request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&TtsRequestBody { text, lang })
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(SpeechError::Synthesis(format!("{}: {}", status, message)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
