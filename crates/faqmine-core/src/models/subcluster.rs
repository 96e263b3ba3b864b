//! Subcluster records, built in two phases.
//!
//! Partitioning produces a [`SubclusterDraft`] (membership and centroid).
//! Scoring and ranking enrich it into a [`Subcluster`], which is what the
//! global accumulator holds. Global selection wraps accepted records in a
//! [`ScoredSubcluster`], the only type carrying `normalized_size` and `score`.

use serde::{Deserialize, Serialize};

use crate::errors::{FaqMineResult, SubclusterError};

/// Partition-time view of a subcluster.
#[derive(Debug, Clone, PartialEq)]
pub struct SubclusterDraft {
    parent_id: String,
    subcluster_id: usize,
    members: Vec<usize>,
    centroid: Vec<f64>,
}

impl SubclusterDraft {
    /// `members` are indices into the parent group's records, in record order.
    pub fn new(
        parent_id: impl Into<String>,
        subcluster_id: usize,
        members: Vec<usize>,
        centroid: Vec<f64>,
    ) -> Self {
        Self {
            parent_id: parent_id.into(),
            subcluster_id,
            members,
            centroid,
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn subcluster_id(&self) -> usize {
        self.subcluster_id
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn centroid(&self) -> &[f64] {
        &self.centroid
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Attach scoring and ranking output.
    ///
    /// # Errors
    /// `SizeMismatch` if the ranked summaries do not cover every member.
    pub fn enrich(self, enrichment: SubclusterEnrichment) -> FaqMineResult<Subcluster> {
        if enrichment.summaries.len() != self.members.len() {
            return Err(SubclusterError::SizeMismatch {
                subcluster_id: self.subcluster_id,
                members: self.members.len(),
                summaries: enrichment.summaries.len(),
            }
            .into());
        }
        Ok(Subcluster {
            parent_id: self.parent_id,
            subcluster_id: self.subcluster_id,
            size: self.members.len(),
            centroid: self.centroid,
            cohesion: enrichment.cohesion,
            separation: enrichment.separation,
            summaries: enrichment.summaries,
            resolutions: enrichment.resolutions,
        })
    }
}

/// Scoring and ranking output for one draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SubclusterEnrichment {
    pub cohesion: f64,
    pub separation: f64,
    /// Every member's summary, most representative first.
    pub summaries: Vec<String>,
    /// Non-empty resolutions in the same relative order.
    pub resolutions: Vec<String>,
}

/// A fully enriched subcluster, as promoted into the global accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcluster {
    pub parent_id: String,
    pub subcluster_id: usize,
    pub size: usize,
    pub centroid: Vec<f64>,
    /// Mean pairwise cosine similarity among members.
    pub cohesion: f64,
    /// Mean over siblings of (1 - mean cross cosine similarity).
    pub separation: f64,
    pub summaries: Vec<String>,
    pub resolutions: Vec<String>,
}

/// A subcluster after global normalization and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSubcluster {
    pub subcluster: Subcluster,
    /// Size min-max normalized over the whole accumulator, in [0, 1].
    pub normalized_size: f64,
    /// Weighted composite used for ranking only.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SubclusterDraft {
        SubclusterDraft::new("12", 1, vec![0, 3, 4], vec![0.5, 0.5])
    }

    #[test]
    fn enrich_carries_partition_fields() {
        let sub = draft()
            .enrich(SubclusterEnrichment {
                cohesion: 0.7,
                separation: 0.4,
                summaries: vec!["a".into(), "b".into(), "c".into()],
                resolutions: vec!["fixed".into()],
            })
            .unwrap();
        assert_eq!(sub.parent_id, "12");
        assert_eq!(sub.subcluster_id, 1);
        assert_eq!(sub.size, 3);
        assert_eq!(sub.centroid, vec![0.5, 0.5]);
        assert_eq!(sub.resolutions.len(), 1);
    }

    #[test]
    fn enrich_rejects_partial_summaries() {
        let err = draft()
            .enrich(SubclusterEnrichment {
                cohesion: 0.7,
                separation: 0.4,
                summaries: vec!["a".into()],
                resolutions: vec![],
            })
            .unwrap_err();
        assert!(err.to_string().contains("3 members"));
    }
}
