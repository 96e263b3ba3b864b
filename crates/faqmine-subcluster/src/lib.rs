//! # faqmine-subcluster
//!
//! Per-parent-group pass: reduction (PCA) → k selection and k-means
//! partitioning → cohesion/separation scoring → centroid ranking.
//! Each group is processed in isolation; the output is the list of enriched
//! subclusters to append to the global accumulator.

pub mod algorithms;
pub mod intake;
pub mod pipeline;

pub use intake::{assemble_parent_groups, TicketAssignment, TicketText};
pub use pipeline::{run_group, GroupOutcome, SkipReason};
