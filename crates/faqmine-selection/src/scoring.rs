//! Global normalization and composite scoring.

use faqmine_core::config::RankingConfig;
use faqmine_core::models::{ScoredSubcluster, Subcluster};
use tracing::debug;

/// Min-max normalize sizes over the whole pool.
///
/// When every size is equal the range is zero and every record gets 0.0,
/// matching a min-max scaler with zero range.
pub fn normalize_sizes(sizes: &[usize]) -> Vec<f64> {
    let (Some(&min), Some(&max)) = (sizes.iter().min(), sizes.iter().max()) else {
        return Vec::new();
    };
    if max == min {
        debug!(size = min, "degenerate size range, normalized sizes set to 0");
        return vec![0.0; sizes.len()];
    }
    let range = (max - min) as f64;
    sizes.iter().map(|&s| (s - min) as f64 / range).collect()
}

/// Weighted sum of normalized size with raw cohesion and raw separation.
pub fn composite_score(
    normalized_size: f64,
    cohesion: f64,
    separation: f64,
    config: &RankingConfig,
) -> f64 {
    config.size_weight * normalized_size
        + config.cohesion_weight * cohesion
        + config.separation_weight * separation
}

/// Attach normalized size and score to every record, keeping pool order.
pub fn score_all(records: Vec<Subcluster>, config: &RankingConfig) -> Vec<ScoredSubcluster> {
    let sizes: Vec<usize> = records.iter().map(|s| s.size).collect();
    let normalized = normalize_sizes(&sizes);

    records
        .into_iter()
        .zip(normalized)
        .map(|(subcluster, normalized_size)| {
            let score = composite_score(
                normalized_size,
                subcluster.cohesion,
                subcluster.separation,
                config,
            );
            ScoredSubcluster {
                subcluster,
                normalized_size,
                score,
            }
        })
        .collect()
}
