//! CLI argument definitions for the Maatu application.
//!
//! Uses `clap` with derive macros. Priority resolution: CLI args >
//! env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Maatu — a bilingual English/Kannada chat and translation service.
#[derive(Parser, Debug)]
#[command(name = "maatu", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Directory for conversation transcripts.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MAATU_CONFIG env var > ./maatu.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MAATU_CONFIG") {
            return PathBuf::from(p);
        }
        PathBuf::from("maatu.toml")
    }

    /// Resolve the HTTP server port.
    ///
    /// Priority: --port flag > MAATU_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("MAATU_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the log level filter string.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}
