use crate::errors::FaqMineResult;

/// Embedding generation provider.
///
/// Vectors are expected to be unit length. No determinism is assumed across
/// separate calls; each parent group is embedded and reduced on its own.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> FaqMineResult<Vec<f32>>;

    /// Embed a batch of texts. Must return one vector per text, in order.
    fn embed_batch(&self, texts: &[String]) -> FaqMineResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
