//! Core data model: the language selector and the conversation turn.

use serde::{Deserialize, Serialize};

/// Supported conversation languages.
///
/// The selector set is closed: the service speaks English and Kannada.
/// Dispatch mirrors the chat workflow — an "english" selector goes straight
/// to the completion API, any other selector takes the translated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Kannada,
}

impl Language {
    /// Resolve a user-supplied selector, case-insensitively.
    ///
    /// Anything that is not "english" resolves to Kannada, matching the
    /// dispatch rule (non-English input is translated).
    pub fn from_selector(selector: &str) -> Language {
        if selector.trim().eq_ignore_ascii_case("english") {
            Language::English
        } else {
            Language::Kannada
        }
    }

    /// Two-letter speech-synthesis code for this language.
    pub fn speech_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Kannada => "kn",
        }
    }

    /// FLORES-style script tag used by the translation models.
    pub fn script_tag(&self) -> &'static str {
        match self {
            Language::English => "eng_Latn",
            Language::Kannada => "kan_Knda",
        }
    }
}

/// One human/assistant exchange in a conversation.
///
/// Field order is fixed so that serialization is byte-stable: saving the
/// same conversation twice produces identical file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// User message text. Immutable once written.
    pub human: String,
    /// ISO-8601 creation time of the user message.
    pub human_timestamp: String,
    /// Assistant reply text. May be overwritten by an explicit edit.
    pub assistant: String,
    /// ISO-8601 reply time, refreshed whenever the reply is edited.
    pub assistant_timestamp: String,
    /// Language selector active when the turn was created.
    pub language: String,
}

/// Current local time formatted as an ISO-8601 string with microseconds.
pub fn iso_now() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
