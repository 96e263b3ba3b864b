//! Phase 2 (partition): choose the subcluster count by silhouette among the
//! candidates that respect the size floor and the dominance ceiling, then
//! turn the winning fit into subcluster drafts.

use faqmine_core::config::SubclusterConfig;
use faqmine_core::constants::SKIP_SENTINEL_K;
use faqmine_core::errors::FaqMineResult;
use faqmine_core::models::SubclusterDraft;
use tracing::debug;

use crate::algorithms::kmeans::{self, KMeansFit, KMeansParams};
use crate::algorithms::silhouette::silhouette_score;

/// Outcome of k selection for one parent group.
#[derive(Debug, Clone, PartialEq)]
pub enum KSelection {
    /// A valid split was found.
    Split {
        k: usize,
        silhouette: f64,
        fit: KMeansFit,
    },
    /// Every candidate violated a size constraint.
    Skip,
}

impl KSelection {
    /// Chosen subcluster count, or the skip sentinel.
    pub fn k(&self) -> usize {
        match self {
            KSelection::Split { k, .. } => *k,
            KSelection::Skip => SKIP_SENTINEL_K,
        }
    }
}

/// Run the clustering procedure for a fixed `k`.
///
/// The procedure is seeded, so calling this twice with the same input
/// returns the same labels and centroids.
pub fn partition(
    points: &[Vec<f64>],
    k: usize,
    config: &SubclusterConfig,
) -> FaqMineResult<KMeansFit> {
    kmeans::fit(
        points,
        &KMeansParams {
            k,
            n_init: config.n_init,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            seed: config.seed,
        },
    )
}

/// True when no class is below the size floor and none dominates the group.
pub fn satisfies_size_constraints(sizes: &[usize], total: usize, config: &SubclusterConfig) -> bool {
    if total == 0 {
        return false;
    }
    let largest = sizes.iter().copied().max().unwrap_or(0);
    let dominance = largest as f64 / total as f64;
    sizes.iter().all(|&s| s >= config.min_subcluster_size) && dominance <= config.max_dominance
}

/// Pick k in `min_k..=max_k` with the highest mean silhouette among the
/// candidates whose partition passes the size constraints. Ties keep the
/// smaller k.
pub fn select_k(points: &[Vec<f64>], config: &SubclusterConfig) -> FaqMineResult<KSelection> {
    let total = points.len();
    let mut best: Option<(usize, f64, KMeansFit)> = None;

    for k in config.min_k..=config.max_k {
        if k > total {
            break;
        }
        let fit = partition(points, k, config)?;
        let sizes = fit.cluster_sizes();
        if !satisfies_size_constraints(&sizes, total, config) {
            debug!(k, ?sizes, "Phase 2: candidate rejected by size constraints");
            continue;
        }

        let score = silhouette_score(points, &fit.labels, k);
        debug!(k, ?sizes, silhouette = score, "Phase 2: candidate accepted");
        if best.as_ref().map_or(true, |(_, s, _)| score > *s) {
            best = Some((k, score, fit));
        }
    }

    Ok(match best {
        Some((k, silhouette, fit)) => KSelection::Split { k, silhouette, fit },
        None => KSelection::Skip,
    })
}

/// One draft per label, in label order. Member indices keep input order.
pub fn drafts(parent_id: &str, fit: &KMeansFit) -> Vec<SubclusterDraft> {
    (0..fit.k())
        .map(|label| {
            SubclusterDraft::new(
                parent_id,
                label,
                fit.members(label),
                fit.centroids[label].clone(),
            )
        })
        .collect()
}
