//! Backend seam for the pretrained translation models.
//!
//! The production backend talks to a translation inference server over
//! HTTP; tests substitute a mock. Tokenization, beam search, and
//! detokenization happen behind this seam — the adapter only carries the
//! decoding parameters in the request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TranslateError;

/// One generation request against a direction-specific checkpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Checkpoint identifier (model + tokenizer pair).
    pub checkpoint: String,
    pub src_tag: String,
    pub tgt_tag: String,
    /// Preprocessed source text; batches are size 1 in this design.
    pub text: String,
    pub num_beams: u32,
    pub max_length: u32,
    pub num_return_sequences: u32,
}

/// Model invocation boundary: tokenize → beam-search generate → decode.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Materialize a checkpoint so subsequent generate calls can serve it.
    async fn load_checkpoint(&self, checkpoint: &str) -> Result<(), TranslateError>;

    /// Run generation and return the decoded single best sequence.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, TranslateError>;
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct LoadRequestBody<'a> {
    checkpoint: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponseBody {
    text: Option<String>,
    error: Option<String>,
}

// =============================================================================
// RemoteTranslationBackend
// =============================================================================

/// HTTP client for a translation inference server.
#[derive(Debug, Clone)]
pub struct RemoteTranslationBackend {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteTranslationBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TranslationBackend for RemoteTranslationBackend {
    async fn load_checkpoint(&self, checkpoint: &str) -> Result<(), TranslateError> {
        let url = format!("{}/v1/models/load", self.base_url);
        debug!(checkpoint, "Loading translation checkpoint");

        let response = self
            .http
            .post(&url)
            .json(&LoadRequestBody { checkpoint })
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::ModelLoad(format!(
                "{}: {}",
                checkpoint, message
            )));
        }
        Ok(())
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, TranslateError> {
        let url = format!("{}/v1/translate", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::Decode(format!("{}: {}", status, message)));
        }

        let body: GenerationResponseBody = response
            .json()
            .await
            .map_err(|e| TranslateError::Decode(e.to_string()))?;

        match body.text {
            Some(text) => Ok(text),
            None => Err(TranslateError::Decode(
                body.error
                    .unwrap_or_else(|| "server returned no translation".to_string()),
            )),
        }
    }
}
