//! Prompt construction and the remote completion client.
//!
//! The prompt builder maps a language selector to a fixed system
//! instruction; the client sends the composed two-part prompt to an
//! OpenAI-compatible chat-completions endpoint.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{CompletionClient, GroqClient};
pub use error::LlmError;
pub use prompt::{Prompt, PromptBuilder};
