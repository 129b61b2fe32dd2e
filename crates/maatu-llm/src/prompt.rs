//! System-prompt selection and two-part prompt composition.

/// System instruction used for English conversations, and the silent
/// fallback for unrecognized selectors.
const ENGLISH_SYSTEM_PROMPT: &str = "You are an AI assistant that helps users by answering \
     their queries and the response should be concise in English.";

/// System instruction used for Kannada conversations.
const KANNADA_SYSTEM_PROMPT: &str = "You are an AI assistant that helps users by answering \
     their queries and the response should be concise in Kannada. Give the response in \
     Kannada only.";

/// A composed two-part prompt: system instruction plus human message.
///
/// No conversation history is included; every completion call is stateless
/// from the model's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub human: String,
}

/// Maps a language selector to its fixed system prompt and composes the
/// prompt sent to the completion API.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the (system, human) prompt for one user message.
    ///
    /// The selector is matched case-insensitively; anything unrecognized
    /// falls back to the English system prompt without an error.
    pub fn build(&self, language: &str, user_message: &str) -> Prompt {
        Prompt {
            system: self.system_prompt(language).to_string(),
            human: user_message.to_string(),
        }
    }

    /// Resolve the system prompt for a selector.
    pub fn system_prompt(&self, language: &str) -> &'static str {
        match language.trim().to_lowercase().as_str() {
            "kannada" => KANNADA_SYSTEM_PROMPT,
            _ => ENGLISH_SYSTEM_PROMPT,
        }
    }
}
