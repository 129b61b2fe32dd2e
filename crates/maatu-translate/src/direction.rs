//! Translation directions over the closed English/Kannada pair.

use maatu_core::config::TranslationConfig;
use maatu_core::types::Language;

/// An ordered language pair selecting which pretrained model to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    EnglishToKannada,
    KannadaToEnglish,
}

impl Direction {
    /// Source script tag for the model request.
    pub fn src_tag(&self) -> &'static str {
        match self {
            Direction::EnglishToKannada => Language::English.script_tag(),
            Direction::KannadaToEnglish => Language::Kannada.script_tag(),
        }
    }

    /// Target script tag for the model request.
    pub fn tgt_tag(&self) -> &'static str {
        match self {
            Direction::EnglishToKannada => Language::Kannada.script_tag(),
            Direction::KannadaToEnglish => Language::English.script_tag(),
        }
    }

    /// Checkpoint identifier for this direction.
    pub fn checkpoint<'a>(&self, config: &'a TranslationConfig) -> &'a str {
        match self {
            Direction::EnglishToKannada => &config.en_indic_checkpoint,
            Direction::KannadaToEnglish => &config.indic_en_checkpoint,
        }
    }

    /// The opposite direction.
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::EnglishToKannada => Direction::KannadaToEnglish,
            Direction::KannadaToEnglish => Direction::EnglishToKannada,
        }
    }
}
