mod embedding;
mod sink;

pub use embedding::IEmbeddingProvider;
pub use sink::ICandidateSink;
