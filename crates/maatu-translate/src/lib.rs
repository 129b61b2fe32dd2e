//! Machine-translation adapter.
//!
//! Two direction-specific pretrained checkpoints (English→Kannada and
//! Kannada→English) sit behind a backend seam. The adapter owns the fixed
//! pipeline around the model call: tag-aware preprocessing, beam-search
//! generation (width 5, max length 256, single sequence), and
//! postprocessing. Direction handles are loaded lazily and cached for the
//! process lifetime.

pub mod backend;
pub mod direction;
pub mod error;
pub mod processor;
pub mod translator;

pub use backend::{GenerationRequest, RemoteTranslationBackend, TranslationBackend};
pub use direction::Direction;
pub use error::TranslateError;
pub use translator::{DirectionHandle, Translator};
