//! Integration tests for the Maatu API.
//!
//! Exercises every route end to end over mock adapters: happy paths,
//! validation failures, and adapter-failure propagation. Each test gets
//! its own temp-dir transcript and fresh state.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tempfile::TempDir;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tower::ServiceExt;

use maatu_api::handlers::{ChatResponse, HealthResponse, SpeechResponse};
use maatu_api::{create_router, AppState};
use maatu_chat::ChatOrchestrator;
use maatu_core::config::TranslationConfig;
use maatu_llm::{CompletionClient, LlmError, Prompt};
use maatu_speech::{speech_code, SpeechError, SpeechSynthesizer};
use maatu_store::ConversationStore;
use maatu_translate::{GenerationRequest, TranslateError, TranslationBackend, Translator};

// =============================================================================
// Mock adapters
// =============================================================================

/// Completion client answering every prompt with a fixed reply.
struct FixedClient {
    reply: Option<String>,
}

#[async_trait]
impl CompletionClient for FixedClient {
    async fn generate(&self, _prompt: &Prompt) -> Result<String, LlmError> {
        self.reply
            .clone()
            .ok_or_else(|| LlmError::Network("connection refused".to_string()))
    }
}

/// Translation backend answering from a fixed text table.
struct TableBackend {
    table: StdMutex<HashMap<String, String>>,
}

impl TableBackend {
    fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            table: StdMutex::new(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl TranslationBackend for TableBackend {
    async fn load_checkpoint(&self, _checkpoint: &str) -> Result<(), TranslateError> {
        Ok(())
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, TranslateError> {
        self.table
            .lock()
            .unwrap()
            .get(&request.text)
            .cloned()
            .ok_or_else(|| TranslateError::Decode(format!("no entry for {:?}", request.text)))
    }
}

/// Synthesizer that bakes the resolved language code into the audio so
/// tests can observe the code selection through the base64 response.
struct EchoSynth {
    fail: bool,
}

#[async_trait]
impl SpeechSynthesizer for EchoSynth {
    async fn synthesize(&self, _text: &str, language: &str) -> Result<Vec<u8>, SpeechError> {
        if self.fail {
            return Err(SpeechError::Synthesis("engine offline".to_string()));
        }
        Ok(format!("audio-{}", speech_code(language)).into_bytes())
    }
}

// =============================================================================
// Helpers
// =============================================================================

struct TestApp {
    router: axum::Router,
    // Keeps the transcript dir alive for the test's duration.
    _dir: TempDir,
}

fn make_app_with(reply: Option<&str>, pairs: &[(&str, &str)], speech_fail: bool) -> TestApp {
    let dir = TempDir::new().unwrap();
    let translator = Arc::new(Translator::new(
        Arc::new(TableBackend::with(pairs)),
        TranslationConfig::default(),
    ));
    let orchestrator = Arc::new(ChatOrchestrator::new(
        Arc::new(FixedClient {
            reply: reply.map(|r| r.to_string()),
        }),
        translator,
        ConversationStore::open_session(dir.path()),
    ));
    let state = AppState::new(orchestrator, Arc::new(EchoSynth { fail: speech_fail }));
    TestApp {
        router: create_router(state),
        _dir: dir,
    }
}

fn make_app() -> TestApp {
    make_app_with(Some("Hi there!"), &[], false)
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// =============================================================================
// Page and health
// =============================================================================

#[tokio::test]
async fn test_index_serves_chat_page() {
    let app = make_app();
    let resp = app.router.oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Maatu"));
}

#[tokio::test]
async fn test_health_reports_zero_turns_initially() {
    let app = make_app();
    let resp = app.router.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.turns, 0);
}

// =============================================================================
// POST /chat
// =============================================================================

#[tokio::test]
async fn test_chat_english_returns_reply_verbatim() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json(
            "/chat",
            r#"{"message": "Hello", "language": "english", "input_type": "text"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(chat.response, "Hi there!");
}

#[tokio::test]
async fn test_chat_without_input_type_is_accepted() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json(
            "/chat",
            r#"{"message": "Hello", "language": "english"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_chat_kannada_round_trips_through_translation() {
    let app = make_app_with(
        Some("Greetings to you"),
        &[
            ("ನಮಸ್ಕಾರ", "Greetings"),
            ("Greetings to you", "ನಿಮಗೆ ನಮಸ್ಕಾರಗಳು"),
        ],
        false,
    );
    let resp = app
        .router
        .oneshot(post_json(
            "/chat",
            r#"{"message": "ನಮಸ್ಕಾರ", "language": "kannada", "input_type": "text"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(chat.response, "ನಿಮಗೆ ನಮಸ್ಕಾರಗಳು");
}

#[tokio::test]
async fn test_chat_empty_message_is_bad_request() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json(
            "/chat",
            r#"{"message": "   ", "language": "english"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_chat_adapter_failure_is_internal_error_and_persists_nothing() {
    let app = make_app_with(None, &[], false);

    let resp = app
        .router
        .clone()
        .oneshot(post_json(
            "/chat",
            r#"{"message": "Hello", "language": "english"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "internal_error");

    let health_resp = app.router.oneshot(get("/health")).await.unwrap();
    let health: HealthResponse =
        serde_json::from_slice(&body_bytes(health_resp).await).unwrap();
    assert_eq!(health.turns, 0);
}

#[tokio::test]
async fn test_chat_turn_count_visible_in_health() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(post_json(
            "/chat",
            r#"{"message": "Hello", "language": "english"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health_resp = app.router.oneshot(get("/health")).await.unwrap();
    let health: HealthResponse =
        serde_json::from_slice(&body_bytes(health_resp).await).unwrap();
    assert_eq!(health.turns, 1);
}

#[tokio::test]
async fn test_chat_malformed_body_is_client_error() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json("/chat", r#"{"message": "Hello"}"#))
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

// =============================================================================
// POST /text-to-speech
// =============================================================================

#[tokio::test]
async fn test_tts_resolves_english_code_and_returns_base64() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json(
            "/text-to-speech",
            r#"{"text": "Hi", "language": "English"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let speech: SpeechResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(!speech.audio_data.is_empty());
    let audio = base64::engine::general_purpose::STANDARD
        .decode(&speech.audio_data)
        .unwrap();
    assert_eq!(audio, b"audio-en");
}

#[tokio::test]
async fn test_tts_kannada_resolves_kn_code() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json(
            "/text-to-speech",
            r#"{"text": "ನಮಸ್ಕಾರ", "language": "kannada"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let speech: SpeechResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    let audio = base64::engine::general_purpose::STANDARD
        .decode(&speech.audio_data)
        .unwrap();
    assert_eq!(audio, b"audio-kn");
}

#[tokio::test]
async fn test_tts_empty_text_is_bad_request() {
    let app = make_app();
    let resp = app
        .router
        .oneshot(post_json(
            "/text-to-speech",
            r#"{"text": "", "language": "english"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tts_engine_failure_is_internal_error() {
    let app = make_app_with(Some("unused"), &[], true);
    let resp = app
        .router
        .oneshot(post_json(
            "/text-to-speech",
            r#"{"text": "Hi", "language": "english"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// GET /ws
// =============================================================================

#[tokio::test]
async fn test_ws_text_frame_gets_constant_ack() {
    let TestApp { router, _dir } = make_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
        .await
        .unwrap();

    ws.send(WsMessage::text("hello")).await.unwrap();
    let reply = ws.next().await.unwrap().unwrap();
    assert_eq!(reply.into_text().unwrap().as_str(), "Processed message");

    server.abort();
}

#[tokio::test]
async fn test_ws_ignores_non_text_frames() {
    let TestApp { router, _dir } = make_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ws", addr))
        .await
        .unwrap();

    // A binary frame gets no reply; the next text frame is still acked,
    // so exactly one message comes back.
    ws.send(WsMessage::binary(vec![1, 2, 3])).await.unwrap();
    ws.send(WsMessage::text("after binary")).await.unwrap();
    let reply = ws.next().await.unwrap().unwrap();
    assert_eq!(reply.into_text().unwrap().as_str(), "Processed message");

    ws.close(None).await.unwrap();
    server.abort();
}

// =============================================================================
// Unknown routes
// =============================================================================

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = make_app();
    let resp = app.router.oneshot(get("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
