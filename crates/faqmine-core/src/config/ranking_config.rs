use serde::{Deserialize, Serialize};

use super::defaults;

/// Global ranking weights, relative size bounds and output cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Weight of the min-max normalized size.
    pub size_weight: f64,
    /// Weight of raw cohesion.
    pub cohesion_weight: f64,
    /// Weight of raw separation.
    pub separation_weight: f64,
    /// Lower relative size bound (exclusive, widened by `epsilon`).
    pub min_size: f64,
    /// Upper relative size bound (exclusive, narrowed by `epsilon`).
    pub max_size: f64,
    /// Margin applied to both size bounds.
    pub epsilon: f64,
    /// Maximum number of subclusters handed downstream.
    pub num_faqs: usize,
}

impl RankingConfig {
    /// Exclusive lower bound a normalized size must exceed.
    pub fn lower_bound(&self) -> f64 {
        self.min_size + self.epsilon
    }

    /// Exclusive upper bound a normalized size must stay under.
    pub fn upper_bound(&self) -> f64 {
        self.max_size - self.epsilon
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            size_weight: defaults::DEFAULT_SIZE_WEIGHT,
            cohesion_weight: defaults::DEFAULT_COHESION_WEIGHT,
            separation_weight: defaults::DEFAULT_SEPARATION_WEIGHT,
            min_size: defaults::DEFAULT_MIN_SIZE,
            max_size: defaults::DEFAULT_MAX_SIZE,
            epsilon: defaults::DEFAULT_EPSILON,
            num_faqs: defaults::DEFAULT_NUM_FAQS,
        }
    }
}
