//! In-memory embedding providers for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use faqmine_core::errors::{EmbeddingError, FaqMineResult};
use faqmine_core::traits::IEmbeddingProvider;

/// Returns preset vectors by exact text; unknown text is an inference error.
pub struct LookupEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dims: usize,
    batch_calls: AtomicUsize,
}

impl LookupEmbedder {
    pub fn new(vectors: HashMap<String, Vec<f32>>, dims: usize) -> Self {
        Self {
            vectors,
            dims,
            batch_calls: AtomicUsize::new(0),
        }
    }

    /// Number of `embed_batch` calls served.
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for LookupEmbedder {
    fn embed(&self, text: &str) -> FaqMineResult<Vec<f32>> {
        self.vectors.get(text).cloned().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: format!("no vector for '{text}'"),
            }
            .into()
        })
    }
    fn embed_batch(&self, texts: &[String]) -> FaqMineResult<Vec<Vec<f32>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        texts.iter().map(|t| self.embed(t)).collect()
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "lookup-test"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Always fails, as an unreachable remote model would.
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> FaqMineResult<Vec<f32>> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "failing-test".into(),
        }
        .into())
    }
    fn embed_batch(&self, _texts: &[String]) -> FaqMineResult<Vec<Vec<f32>>> {
        Err(EmbeddingError::ProviderUnavailable {
            provider: "failing-test".into(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        8
    }
    fn name(&self) -> &str {
        "failing-test"
    }
    fn is_available(&self) -> bool {
        false
    }
}

/// Drops the last vector of every batch.
pub struct ShortBatchEmbedder;

impl IEmbeddingProvider for ShortBatchEmbedder {
    fn embed(&self, _text: &str) -> FaqMineResult<Vec<f32>> {
        Ok(vec![1.0, 0.0, 0.0, 0.0])
    }
    fn embed_batch(&self, texts: &[String]) -> FaqMineResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .skip(1)
            .map(|_| vec![1.0, 0.0, 0.0, 0.0])
            .collect())
    }
    fn dimensions(&self) -> usize {
        4
    }
    fn name(&self) -> &str {
        "short-batch-test"
    }
    fn is_available(&self) -> bool {
        true
    }
}
