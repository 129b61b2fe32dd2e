//! Maatu application binary - composition root.
//!
//! Ties together all Maatu crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Build the adapters (Groq completion, translation server, TTS server)
//! 3. Open a timestamped conversation transcript
//! 4. Start the axum HTTP server

mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use maatu_api::state::AppState;
use maatu_api::routes;
use maatu_chat::ChatOrchestrator;
use maatu_core::config::MaatuConfig;
use maatu_llm::GroqClient;
use maatu_speech::RemoteTtsClient;
use maatu_store::ConversationStore;
use maatu_translate::{RemoteTranslationBackend, Translator};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first: the log filter default comes from it.
    let config_file = args.resolve_config_path();
    let mut config = MaatuConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Maatu v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Transcript directory.
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| Path::new(&config.general.data_dir).to_path_buf());
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }

    // Adapters.
    let llm = Arc::new(GroqClient::from_env(config.llm.clone())?);
    tracing::info!(model = %config.llm.model, "Completion client ready");

    let backend = Arc::new(RemoteTranslationBackend::new(
        config.translation.endpoint.clone(),
    ));
    let translator = Arc::new(Translator::new(backend, config.translation.clone()));
    tracing::info!(endpoint = %config.translation.endpoint, "Translation adapter ready");

    let speech = Arc::new(RemoteTtsClient::new(config.speech.clone())?);
    tracing::info!(endpoint = %config.speech.endpoint, "Speech adapter ready");

    // Session.
    let store = ConversationStore::open_session(&data_dir);
    tracing::info!(path = %store.path().display(), "Conversation transcript opened");
    let orchestrator = Arc::new(ChatOrchestrator::new(llm, translator, store));

    // Serve.
    let state = AppState::new(orchestrator, speech);
    routes::start_server(&config, state).await?;

    Ok(())
}
