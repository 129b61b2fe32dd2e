//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its JSON body via axum extractors, calls into
//! AppState services, and returns a JSON response.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::page::CHAT_PAGE_HTML;
use crate::state::AppState;

// =============================================================================
// Request/response types
// =============================================================================

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: String,
    /// "text" or "voice". Accepted for client compatibility, not consulted.
    #[serde(default)]
    pub input_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Request body for POST /text-to-speech.
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    /// Base64-encoded audio bytes.
    pub audio_data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub turns: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET / - serve the embedded chat page.
pub async fn index() -> impl IntoResponse {
    Html(CHAT_PAGE_HTML)
}

/// GET /health - liveness plus basic session stats.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        turns: state.orchestrator.turn_count().await,
    })
}

/// POST /chat - dispatch one user message and return the reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    debug!(
        language = %req.language,
        input_type = req.input_type.as_deref().unwrap_or("text"),
        "Chat request"
    );
    let response = state
        .orchestrator
        .handle_message(&req.message, &req.language)
        .await?;
    Ok(Json(ChatResponse { response }))
}

/// POST /text-to-speech - synthesize audio and return it base64-encoded.
pub async fn text_to_speech(
    State(state): State<AppState>,
    Json(req): Json<SpeechRequest>,
) -> Result<Json<SpeechResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text cannot be empty".to_string()));
    }
    let audio = state.speech.synthesize(&req.text, &req.language).await?;
    let audio_data = base64::engine::general_purpose::STANDARD.encode(audio);
    Ok(Json(SpeechResponse { audio_data }))
}

/// GET /ws - WebSocket endpoint.
///
/// Streaming is not implemented; every text frame is answered with a
/// constant acknowledgment so clients can probe connectivity.
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(_state): State<AppState>) -> Response {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                warn!(error = %err, "WebSocket receive failed");
                break;
            }
        };
        match frame {
            Message::Text(_) => {
                if socket
                    .send(Message::Text("Processed message".into()))
                    .await
                    .is_err()
                {
                    break;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}
