use serde::{Deserialize, Serialize};

use super::Subcluster;

/// Append-only collection of every promoted subcluster across all parent
/// groups, in promotion order. Global selection consumes it by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalAccumulator {
    records: Vec<Subcluster>,
}

impl GlobalAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subcluster: Subcluster) {
        self.records.push(subcluster);
    }

    /// Append one parent group's subclusters, keeping their order.
    pub fn extend_group(&mut self, subclusters: impl IntoIterator<Item = Subcluster>) {
        self.records.extend(subclusters);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subcluster> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Subcluster> {
        self.records
    }
}

impl FromIterator<Subcluster> for GlobalAccumulator {
    fn from_iter<I: IntoIterator<Item = Subcluster>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
