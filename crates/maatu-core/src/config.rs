use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MaatuError, Result};

/// Top-level configuration for the Maatu service.
///
/// Loaded from `./maatu.toml` by default. Each section corresponds to one
/// external boundary or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaatuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl MaatuConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MaatuConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MaatuError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory where conversation transcripts are written.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "result".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Remote completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Chat-completions endpoint (OpenAI-compatible).
    pub endpoint: String,
    /// Model name requested from the endpoint.
    pub model: String,
    /// Maximum tokens per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Environment variable holding the API credential.
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama3-8b-8192".to_string(),
            max_tokens: 3000,
            temperature: 0.2,
            api_key_env: "GROQ_API_KEY".to_string(),
        }
    }
}

/// Translation inference settings.
///
/// Each direction uses its own pretrained checkpoint; decoding parameters
/// apply to both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Base URL of the translation inference server.
    pub endpoint: String,
    /// Checkpoint for English → Kannada.
    pub en_indic_checkpoint: String,
    /// Checkpoint for Kannada → English.
    pub indic_en_checkpoint: String,
    /// Beam width for beam-search decoding.
    pub num_beams: u32,
    /// Maximum output length in tokens.
    pub max_length: u32,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8090".to_string(),
            en_indic_checkpoint: "ai4bharat/indictrans2-en-indic-dist-200M".to_string(),
            indic_en_checkpoint: "ai4bharat/indictrans2-indic-en-dist-200M".to_string(),
            num_beams: 5,
            max_length: 256,
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// TTS endpoint returning raw audio bytes.
    pub endpoint: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5005/tts".to_string(),
            timeout_ms: 8000,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port for the HTTP surface; binds to localhost.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8000 }
    }
}
