/// Partitioning and scoring errors.
#[derive(Debug, thiserror::Error)]
pub enum SubclusterError {
    #[error("too few members: need at least {required}, got {actual}")]
    TooFewMembers { required: usize, actual: usize },

    #[error("parent group {parent_id}: {records} records but {vectors} vectors")]
    VectorCountMismatch {
        parent_id: String,
        records: usize,
        vectors: usize,
    },

    #[error("subcluster {subcluster_id}: {members} members but {summaries} ranked summaries")]
    SizeMismatch {
        subcluster_id: usize,
        members: usize,
        summaries: usize,
    },

    #[error("invalid subcluster count {k} for {points} points")]
    InvalidK { k: usize, points: usize },
}
