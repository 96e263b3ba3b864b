//! Static, process-start configuration. Every section falls back to the
//! values in [`defaults`] so a partial (or empty) TOML file is valid.

pub mod defaults;
mod embedding_config;
mod observability_config;
mod ranking_config;
mod source_config;
mod subcluster_config;

pub use embedding_config::{EmbeddingConfig, KNOWN_DEVICES};
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use source_config::SourceConfig;
pub use subcluster_config::SubclusterConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, FaqMineResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqMineConfig {
    pub source: SourceConfig,
    pub embedding: EmbeddingConfig,
    pub subcluster: SubclusterConfig,
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl FaqMineConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(input: &str) -> FaqMineResult<Self> {
        toml::from_str(input).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> FaqMineResult<()> {
        if !KNOWN_DEVICES.contains(&self.embedding.device.as_str()) {
            return Err(invalid(
                "embedding.device",
                format!("unknown device '{}'", self.embedding.device),
            ));
        }
        if self.embedding.batch_size == 0 {
            return Err(invalid("embedding.batch_size", "must be positive"));
        }

        let sub = &self.subcluster;
        if sub.reduced_dimensions == 0 {
            return Err(invalid("subcluster.reduced_dimensions", "must be positive"));
        }
        if sub.min_k < 2 {
            return Err(invalid("subcluster.min_k", "must be at least 2"));
        }
        if sub.max_k < sub.min_k {
            return Err(invalid(
                "subcluster.max_k",
                format!("{} is below min_k {}", sub.max_k, sub.min_k),
            ));
        }
        if sub.min_subcluster_size < 2 {
            return Err(invalid(
                "subcluster.min_subcluster_size",
                "must be at least 2 so cohesion is defined",
            ));
        }
        if !(sub.max_dominance > 0.0 && sub.max_dominance <= 1.0) {
            return Err(invalid("subcluster.max_dominance", "must lie in (0, 1]"));
        }
        if sub.n_init == 0 {
            return Err(invalid("subcluster.n_init", "must be positive"));
        }
        if sub.max_iterations == 0 {
            return Err(invalid("subcluster.max_iterations", "must be positive"));
        }
        if !sub.tolerance.is_finite() || sub.tolerance < 0.0 {
            return Err(invalid("subcluster.tolerance", "must be finite and non-negative"));
        }

        let rank = &self.ranking;
        for (field, value) in [
            ("ranking.size_weight", rank.size_weight),
            ("ranking.cohesion_weight", rank.cohesion_weight),
            ("ranking.separation_weight", rank.separation_weight),
            ("ranking.min_size", rank.min_size),
            ("ranking.max_size", rank.max_size),
            ("ranking.epsilon", rank.epsilon),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if rank.lower_bound() >= rank.upper_bound() {
            return Err(invalid(
                "ranking.min_size",
                format!(
                    "size window ({:.4}, {:.4}) is empty",
                    rank.lower_bound(),
                    rank.upper_bound()
                ),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> crate::errors::FaqMineError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
    .into()
}
