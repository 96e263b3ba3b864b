mod config_error;
mod embedding_error;
mod faqmine_error;
mod subcluster_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use faqmine_error::{FaqMineError, FaqMineResult};
pub use subcluster_error::SubclusterError;
