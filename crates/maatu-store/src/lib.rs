//! Conversation transcript persistence.
//!
//! One JSON file per chat session, named by creation timestamp. The full
//! ordered turn sequence is rewritten on every mutation; a missing or
//! corrupt file is treated as an empty conversation rather than an error.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use maatu_core::error::{MaatuError, Result};
use maatu_core::types::ConversationTurn;

/// File-backed store for a single conversation.
///
/// Safe only under the single-writer-per-file assumption: there is no
/// locking and no multi-writer protection.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    path: PathBuf,
}

impl ConversationStore {
    /// Create a store for a new session under `dir`.
    ///
    /// The file is named `conversation_history_<YYYYMMDD_HHMMSS>.json` from
    /// the current local time. The file itself is created on first save.
    pub fn open_session(dir: &Path) -> Self {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("conversation_history_{}.json", stamp));
        debug!(path = %path.display(), "Session transcript path assigned");
        Self { path }
    }

    /// Create a store over an existing (or to-be-created) transcript file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full turn sequence.
    ///
    /// An absent file or invalid JSON yields an empty conversation; no
    /// error is surfaced either way.
    pub fn load(&self) -> Vec<ConversationTurn> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&content) {
            Ok(turns) => turns,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Transcript unreadable; starting with an empty conversation"
                );
                Vec::new()
            }
        }
    }

    /// Persist the full turn sequence, replacing any previous content.
    ///
    /// The JSON is written to a sibling temp file and renamed into place so
    /// a crash mid-write never leaves a truncated transcript. Output uses
    /// 4-space indentation with non-ASCII characters preserved unescaped,
    /// so identical turn sequences serialize to identical bytes.
    pub fn save(&self, turns: &[ConversationTurn]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let bytes = to_pretty_json(turns)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            turns = turns.len(),
            "Transcript saved"
        );
        Ok(())
    }
}

/// Serialize turns as pretty JSON with 4-space indentation.
///
/// The same rendering is used for the on-disk transcript and for
/// transcript export, so the two are always byte-identical.
pub fn to_pretty_json(turns: &[ConversationTurn]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    turns
        .serialize(&mut ser)
        .map_err(|e| MaatuError::Serialization(e.to_string()))?;
    Ok(buf)
}
