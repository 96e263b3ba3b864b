use super::{ConfigError, EmbeddingError, SubclusterError};

/// Top-level error for every faqmine crate.
#[derive(Debug, thiserror::Error)]
pub enum FaqMineError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("subcluster error: {0}")]
    SubclusterError(#[from] SubclusterError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {reason}")]
    SerializationError { reason: String },

    #[error("persistence error: {reason}")]
    PersistenceError { reason: String },
}

impl From<serde_json::Error> for FaqMineError {
    fn from(err: serde_json::Error) -> Self {
        FaqMineError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for FaqMineError {
    fn from(err: std::io::Error) -> Self {
        FaqMineError::PersistenceError {
            reason: err.to_string(),
        }
    }
}

pub type FaqMineResult<T> = Result<T, FaqMineError>;
