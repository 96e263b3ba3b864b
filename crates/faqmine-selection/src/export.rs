//! FAQ candidate export.
//!
//! Candidates carry ordered text lists. For flat consumers the lists are
//! joined with [`ITEM_DELIMITER`]; inside each item `\` becomes `\\` and `|`
//! becomes `\|`, so an unescaped pipe only ever belongs to a delimiter.

use faqmine_core::constants::{ESCAPE_CHAR, ITEM_DELIMITER};
use faqmine_core::models::{FaqCandidate, ScoredSubcluster};
use serde::{Deserialize, Serialize};

/// Downstream record for a selected subcluster.
pub fn to_candidate(scored: &ScoredSubcluster) -> FaqCandidate {
    let sub = &scored.subcluster;
    FaqCandidate {
        parent_id: sub.parent_id.clone(),
        subcluster_id: sub.subcluster_id,
        summary_count: sub.summaries.len(),
        resolution_count: sub.resolutions.len(),
        summaries: sub.summaries.clone(),
        resolutions: sub.resolutions.clone(),
    }
}

/// Single-row form of a candidate with both text lists flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatCandidateRow {
    pub parent_id: String,
    pub subcluster_id: usize,
    pub summary_count: usize,
    pub resolution_count: usize,
    pub all_summaries: String,
    pub all_resolutions: String,
}

pub fn flatten(candidate: &FaqCandidate) -> FlatCandidateRow {
    FlatCandidateRow {
        parent_id: candidate.parent_id.clone(),
        subcluster_id: candidate.subcluster_id,
        summary_count: candidate.summary_count,
        resolution_count: candidate.resolution_count,
        all_summaries: join_escaped(candidate.summaries.as_slice()),
        all_resolutions: join_escaped(candidate.resolutions.as_slice()),
    }
}

/// Escape every item and join them with the delimiter.
pub fn join_escaped<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(ITEM_DELIMITER);
        }
        for ch in item.as_ref().chars() {
            if ch == ESCAPE_CHAR || ch == '|' {
                out.push(ESCAPE_CHAR);
            }
            out.push(ch);
        }
    }
    out
}

/// Inverse of [`join_escaped`]. An empty string decodes to no items, so a
/// list holding a single empty item does not survive the trip; use the
/// candidate's counts or the JSON form when that matters.
pub fn split_escaped(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    let delimiter_len = ITEM_DELIMITER.chars().count();
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = joined.chars();
    let mut pipes = 0usize;

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHAR {
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
            continue;
        }
        if ch == '|' {
            pipes += 1;
            if pipes == delimiter_len {
                items.push(std::mem::take(&mut current));
                pipes = 0;
            }
            continue;
        }
        current.push(ch);
    }
    items.push(current);
    items
}
