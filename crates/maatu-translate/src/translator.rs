//! The translation adapter proper: direction-keyed cached handles plus the
//! fixed preprocess → generate → postprocess pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use maatu_core::config::TranslationConfig;

use crate::backend::{GenerationRequest, TranslationBackend};
use crate::direction::Direction;
use crate::error::TranslateError;
use crate::processor::{postprocess, preprocess};

/// A loaded model handle for one direction.
///
/// Checkpoint materialization is expensive; handles are created once and
/// shared for the process lifetime.
#[derive(Debug, Clone)]
pub struct DirectionHandle {
    pub direction: Direction,
    pub checkpoint: String,
}

/// Translation adapter over two direction-specific pretrained checkpoints.
pub struct Translator {
    backend: Arc<dyn TranslationBackend>,
    config: TranslationConfig,
    handles: Mutex<HashMap<Direction, Arc<DirectionHandle>>>,
}

impl Translator {
    pub fn new(backend: Arc<dyn TranslationBackend>, config: TranslationConfig) -> Self {
        Self {
            backend,
            config,
            handles: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached handle for a direction, loading it on first use.
    pub async fn load_direction(
        &self,
        direction: Direction,
    ) -> Result<Arc<DirectionHandle>, TranslateError> {
        let mut handles = self.handles.lock().await;
        if let Some(handle) = handles.get(&direction) {
            return Ok(Arc::clone(handle));
        }

        let checkpoint = direction.checkpoint(&self.config).to_string();
        info!(?direction, checkpoint = %checkpoint, "Loading translation direction");
        self.backend.load_checkpoint(&checkpoint).await?;

        let handle = Arc::new(DirectionHandle {
            direction,
            checkpoint,
        });
        handles.insert(direction, Arc::clone(&handle));
        Ok(handle)
    }

    /// Translate one text in the given direction.
    ///
    /// The pipeline order is fixed with no branching: preprocess →
    /// generate (beam width and max length from config, one returned
    /// sequence) → postprocess. Any backend failure propagates; there is
    /// no partial or fallback translation.
    pub async fn translate(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<String, TranslateError> {
        let handle = self.load_direction(direction).await?;

        let request = GenerationRequest {
            checkpoint: handle.checkpoint.clone(),
            src_tag: handle.direction.src_tag().to_string(),
            tgt_tag: handle.direction.tgt_tag().to_string(),
            text: preprocess(text),
            num_beams: self.config.num_beams,
            max_length: self.config.max_length,
            num_return_sequences: 1,
        };

        let decoded = self.backend.generate(&request).await?;
        Ok(postprocess(&decoded))
    }
}
