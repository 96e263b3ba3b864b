//! Assemble parent groups from the upstream assignment and text tables.
//!
//! The two tables are inner-joined on record id. Assignments without text
//! and texts without an assignment are dropped silently; that is the
//! expected behaviour of the join, not an error.

use std::collections::HashMap;

use faqmine_core::models::{ParentGroup, TicketRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parent-group membership of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketAssignment {
    pub parent_id: String,
    pub record_id: String,
}

/// Summarized text of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketText {
    pub record_id: String,
    pub summary: String,
    pub resolution: Option<String>,
}

/// Join assignments with texts into parent groups.
///
/// Records keep assignment order inside a group. Groups are ordered by
/// descending member count, ties in order of first appearance; this order
/// fixes the accumulator order and so the score tie-breaks downstream.
/// When several texts share a record id the first one wins.
pub fn assemble_parent_groups(
    assignments: &[TicketAssignment],
    texts: &[TicketText],
) -> Vec<ParentGroup> {
    let mut by_record: HashMap<&str, &TicketText> = HashMap::with_capacity(texts.len());
    for text in texts {
        by_record.entry(text.record_id.as_str()).or_insert(text);
    }

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ParentGroup> = Vec::new();
    let mut dropped = 0usize;

    for assignment in assignments {
        let Some(text) = by_record.get(assignment.record_id.as_str()) else {
            dropped += 1;
            continue;
        };
        let slot = *slots.entry(assignment.parent_id.as_str()).or_insert_with(|| {
            groups.push(ParentGroup::new(assignment.parent_id.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].records.push(TicketRecord::new(
            text.record_id.clone(),
            text.summary.clone(),
            text.resolution.clone(),
        ));
    }

    groups.sort_by_key(|g| std::cmp::Reverse(g.len()));

    debug!(
        groups = groups.len(),
        joined = assignments.len() - dropped,
        dropped_assignments = dropped,
        "assembled parent groups"
    );
    groups
}
