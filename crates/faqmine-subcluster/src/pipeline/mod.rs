//! Per-parent-group pipeline.
//!
//! Phase 1: Reduction → Phase 2: Partition → Phase 3: Scoring →
//! Phase 4: Ranking

pub mod phase1_reduction;
pub mod phase2_partition;
pub mod phase3_scoring;
pub mod phase4_ranking;

use faqmine_core::config::SubclusterConfig;
use faqmine_core::constants::SKIP_SENTINEL_K;
use faqmine_core::errors::{FaqMineResult, SubclusterError};
use faqmine_core::models::{ParentGroup, Subcluster, SubclusterEnrichment, TicketRecord};
use tracing::{debug, info};

use phase2_partition::KSelection;

/// Why a parent group contributed no subclusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Too few records for any k to meet the size floor.
    TooSmall { members: usize, required: usize },
    /// Every candidate k violated the size floor or the dominance ceiling.
    NoValidSplit,
}

/// Result of processing one parent group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    Subclustered {
        k: usize,
        silhouette: f64,
        subclusters: Vec<Subcluster>,
    },
    Skipped(SkipReason),
}

impl GroupOutcome {
    /// Chosen subcluster count; the sentinel for skipped groups.
    pub fn k(&self) -> usize {
        match self {
            GroupOutcome::Subclustered { k, .. } => *k,
            GroupOutcome::Skipped(_) => SKIP_SENTINEL_K,
        }
    }

    /// Subclusters to promote into the global accumulator.
    pub fn into_subclusters(self) -> Vec<Subcluster> {
        match self {
            GroupOutcome::Subclustered { subclusters, .. } => subclusters,
            GroupOutcome::Skipped(_) => Vec::new(),
        }
    }
}

/// Skip decision that needs no embeddings.
pub fn precheck(group: &ParentGroup, config: &SubclusterConfig) -> Option<SkipReason> {
    let required = config.min_splittable_group();
    (group.len() < required).then_some(SkipReason::TooSmall {
        members: group.len(),
        required,
    })
}

/// Run phases 1–4 for one parent group.
///
/// `embeddings` must be parallel to `group.records`, one vector per record.
pub fn run_group(
    group: &ParentGroup,
    embeddings: &[Vec<f32>],
    config: &SubclusterConfig,
) -> FaqMineResult<GroupOutcome> {
    if let Some(reason) = precheck(group, config) {
        debug!(parent = %group.id, ?reason, "parent group skipped before reduction");
        return Ok(GroupOutcome::Skipped(reason));
    }
    if embeddings.len() != group.len() {
        return Err(SubclusterError::VectorCountMismatch {
            parent_id: group.id.clone(),
            records: group.len(),
            vectors: embeddings.len(),
        }
        .into());
    }

    // Phase 1: Reduction.
    let reduced = phase1_reduction::reduce_group(embeddings, config)?;

    // Phase 2: Partition.
    let (k, silhouette, fit) = match phase2_partition::select_k(&reduced, config)? {
        KSelection::Split { k, silhouette, fit } => (k, silhouette, fit),
        KSelection::Skip => {
            debug!(parent = %group.id, members = group.len(), "Phase 2: no valid split");
            return Ok(GroupOutcome::Skipped(SkipReason::NoValidSplit));
        }
    };
    let drafts = phase2_partition::drafts(&group.id, &fit);

    let member_vectors: Vec<Vec<&[f64]>> = drafts
        .iter()
        .map(|d| d.members().iter().map(|&i| reduced[i].as_slice()).collect())
        .collect();

    let mut subclusters = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.into_iter().enumerate() {
        // Phase 3: Scoring.
        let cohesion = phase3_scoring::cohesion(&member_vectors[index])?;
        let separation = phase3_scoring::mean_separation(index, &member_vectors)?;

        // Phase 4: Ranking.
        let members: Vec<(&[f64], &TicketRecord)> = draft
            .members()
            .iter()
            .map(|&i| (reduced[i].as_slice(), &group.records[i]))
            .collect();
        let ranked = phase4_ranking::rank_by_centroid(&members, draft.centroid());

        subclusters.push(draft.enrich(SubclusterEnrichment {
            cohesion,
            separation,
            summaries: ranked.summaries,
            resolutions: ranked.resolutions,
        })?);
    }

    info!(
        parent = %group.id,
        members = group.len(),
        k,
        silhouette = format!("{:.3}", silhouette),
        "parent group subclustered"
    );

    Ok(GroupOutcome::Subclustered {
        k,
        silhouette,
        subclusters,
    })
}
