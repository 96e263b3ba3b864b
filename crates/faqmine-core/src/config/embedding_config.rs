use serde::{Deserialize, Serialize};

use super::defaults;

/// Devices an embedding provider may be asked to run on.
pub const KNOWN_DEVICES: &[&str] = &["gpu", "cuda", "xpu", "cpu"];

/// Embedding collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Sentence embedding model identifier handed to the provider.
    pub model: String,
    /// Compute device: "gpu", "cuda", "xpu", "cpu".
    pub device: String,
    /// Number of summaries sent to the provider per call.
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            device: defaults::DEFAULT_EMBEDDING_DEVICE.to_string(),
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }
}
