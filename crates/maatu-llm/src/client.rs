//! Remote completion client.
//!
//! `GroqClient` posts the composed prompt to an OpenAI-compatible
//! chat-completions endpoint and returns the completion text. There is no
//! retry or rate-limit handling; failures surface as `LlmError`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use maatu_core::config::LlmConfig;

use crate::error::LlmError;
use crate::prompt::Prompt;

/// Seam for the completion boundary so the orchestrator can be exercised
/// against a mock in tests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a completion for the given two-part prompt.
    async fn generate(&self, prompt: &Prompt) -> Result<String, LlmError>;
}

// =============================================================================
// Wire types (OpenAI-compatible chat completions)
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessageBody<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessageBody<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

// =============================================================================
// GroqClient
// =============================================================================

/// HTTP client for a hosted completion API.
#[derive(Debug, Clone)]
pub struct GroqClient {
    config: LlmConfig,
    api_key: String,
    http: reqwest::Client,
}

impl GroqClient {
    /// Create a client with an explicit credential.
    pub fn new(config: LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            config,
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client reading the credential from the configured
    /// environment variable.
    pub fn from_env(config: LlmConfig) -> Result<Self, LlmError> {
        let key = std::env::var(&config.api_key_env)
            .map_err(|_| LlmError::MissingCredential(config.api_key_env.clone()))?;
        Ok(Self::new(config, key))
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessageBody {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessageBody {
                    role: "user",
                    content: &prompt.human,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %self.config.model, "Requesting completion");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".to_string()))
    }
}
