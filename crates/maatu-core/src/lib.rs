//! Shared foundation for the Maatu bilingual chat service.
//!
//! Defines the conversation data model, the language selector, the
//! top-level error type, and TOML configuration used by every other crate
//! in the workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::MaatuConfig;
pub use error::{MaatuError, Result};
pub use types::{iso_now, ConversationTurn, Language};
