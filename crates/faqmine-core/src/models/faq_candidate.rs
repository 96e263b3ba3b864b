use serde::{Deserialize, Serialize};

/// Final record handed to downstream persistence and FAQ drafting.
///
/// Texts are kept as ordered lists; flattening into a single delimited field
/// is the job of the exporter, which escapes the delimiter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqCandidate {
    pub parent_id: String,
    pub subcluster_id: usize,
    pub summary_count: usize,
    pub resolution_count: usize,
    pub summaries: Vec<String>,
    pub resolutions: Vec<String>,
}
