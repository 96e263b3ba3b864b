//! # faqmine-core
//!
//! Foundation crate for the faqmine subcluster selector.
//! Defines the record types, traits, errors, config, and constants
//! shared by the partitioning, selection and engine crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FaqMineConfig;
pub use errors::{FaqMineError, FaqMineResult};
pub use models::{
    FaqCandidate, GlobalAccumulator, ParentGroup, ScoredSubcluster, Subcluster, SubclusterDraft,
    SubclusterEnrichment, TicketRecord,
};
