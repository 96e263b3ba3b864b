//! Per-run counters, logged once at the end of a run.

use faqmine_subcluster::{GroupOutcome, SkipReason};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What happened to the parent groups of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub groups_total: usize,
    pub groups_subclustered: usize,
    pub groups_skipped_too_small: usize,
    pub groups_skipped_no_split: usize,
    pub subclusters_accumulated: usize,
    pub candidates_selected: usize,
}

impl RunReport {
    pub fn record_group(&mut self, outcome: &GroupOutcome) {
        self.groups_total += 1;
        match outcome {
            GroupOutcome::Subclustered { .. } => self.groups_subclustered += 1,
            GroupOutcome::Skipped(SkipReason::TooSmall { .. }) => {
                self.groups_skipped_too_small += 1
            }
            GroupOutcome::Skipped(SkipReason::NoValidSplit) => self.groups_skipped_no_split += 1,
        }
    }

    /// Groups that contributed nothing to the accumulator.
    pub fn groups_skipped(&self) -> usize {
        self.groups_skipped_too_small + self.groups_skipped_no_split
    }

    pub fn log_summary(&self) {
        info!(
            groups = self.groups_total,
            subclustered = self.groups_subclustered,
            skipped_too_small = self.groups_skipped_too_small,
            skipped_no_split = self.groups_skipped_no_split,
            accumulated = self.subclusters_accumulated,
            selected = self.candidates_selected,
            "run complete"
        );
    }
}
