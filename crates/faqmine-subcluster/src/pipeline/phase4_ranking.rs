//! Phase 4 (ranking): order a subcluster's members by cosine similarity to
//! its centroid, most representative first.

use faqmine_core::models::TicketRecord;

use crate::algorithms::vector::cosine_similarity;

/// Members of one subcluster in representative order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMembers {
    /// Positions into the member list, most similar first.
    pub order: Vec<usize>,
    /// Similarity to the centroid, aligned with `order`.
    pub similarities: Vec<f64>,
    /// Every member's summary in `order`, empty ones included.
    pub summaries: Vec<String>,
    /// Non-empty resolutions in the same relative order.
    pub resolutions: Vec<String>,
}

/// Rank `members` (reduced vector plus its record) against `centroid`.
///
/// The sort is stable: members with equal similarity keep their input order.
pub fn rank_by_centroid(members: &[(&[f64], &TicketRecord)], centroid: &[f64]) -> RankedMembers {
    let scores: Vec<f64> = members
        .iter()
        .map(|(vector, _)| cosine_similarity(vector, centroid))
        .collect();

    let mut order: Vec<usize> = (0..members.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let similarities = order.iter().map(|&i| scores[i]).collect();
    let summaries = order
        .iter()
        .map(|&i| members[i].1.summary.clone())
        .collect();
    let resolutions = order
        .iter()
        .filter_map(|&i| members[i].1.non_empty_resolution().map(str::to_string))
        .collect();

    RankedMembers {
        order,
        similarities,
        summaries,
        resolutions,
    }
}
