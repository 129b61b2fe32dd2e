//! Session orchestration for the bilingual chat workflow.
//!
//! Decides per incoming message whether to call the completion API
//! directly (English) or wrap the call in a Kannada↔English translation
//! round trip, persists each successful exchange, and owns the
//! edit-in-place flow for assistant replies.

pub mod error;
pub mod orchestrator;
pub mod session;

pub use error::ChatError;
pub use orchestrator::ChatOrchestrator;
pub use session::SessionContext;
