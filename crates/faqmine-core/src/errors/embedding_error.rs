/// Embedding collaborator errors. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("batch size mismatch: sent {sent} texts, received {received} vectors")]
    BatchSizeMismatch { sent: usize, received: usize },

    #[error("non-finite value in embedding for record {index}")]
    NonFiniteVector { index: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
