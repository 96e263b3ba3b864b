use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-parent-group reduction and partitioning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubclusterConfig {
    /// Width of the reduced vectors produced for each parent group.
    pub reduced_dimensions: usize,
    /// Smallest subcluster count tried during k selection.
    pub min_k: usize,
    /// Largest subcluster count tried during k selection.
    pub max_k: usize,
    /// Every accepted subcluster must hold at least this many records.
    pub min_subcluster_size: usize,
    /// No accepted subcluster may hold more than this share of its parent group.
    pub max_dominance: f64,
    /// Seed for k-means++ initialization and the reducer's power iteration.
    pub seed: u64,
    /// Number of k-means restarts; the lowest-inertia restart wins.
    pub n_init: usize,
    /// Lloyd iteration cap per restart.
    pub max_iterations: usize,
    /// Total centroid movement below which a restart is considered converged.
    pub tolerance: f64,
    /// Process parent groups on the rayon pool.
    pub parallel_groups: bool,
}

impl SubclusterConfig {
    /// Smallest parent group that can satisfy the size floor for any k >= 2.
    pub fn min_splittable_group(&self) -> usize {
        self.min_subcluster_size * self.min_k
    }
}

impl Default for SubclusterConfig {
    fn default() -> Self {
        Self {
            reduced_dimensions: defaults::DEFAULT_REDUCED_DIMENSIONS,
            min_k: defaults::DEFAULT_MIN_K,
            max_k: defaults::DEFAULT_MAX_K,
            min_subcluster_size: defaults::DEFAULT_MIN_SUBCLUSTER_SIZE,
            max_dominance: defaults::DEFAULT_MAX_DOMINANCE,
            seed: defaults::DEFAULT_SEED,
            n_init: defaults::DEFAULT_N_INIT,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_TOLERANCE,
            parallel_groups: defaults::DEFAULT_PARALLEL_GROUPS,
        }
    }
}
