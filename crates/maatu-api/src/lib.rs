//! Maatu API crate - axum HTTP server and route handlers.
//!
//! Serves the chat page, the chat and text-to-speech endpoints, and a
//! stub WebSocket endpoint, all backed by the session orchestrator.

pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
