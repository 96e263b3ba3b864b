//! # faqmine-engine
//!
//! Runs the whole batch: embed each parent group, subcluster it, append the
//! results to the global accumulator, then rank and select FAQ candidates
//! once every group is done.

pub mod engine;
pub mod monitoring;
pub mod tracing_setup;

pub use engine::{FaqMineEngine, RunOutcome};
pub use monitoring::RunReport;
pub use tracing_setup::init_tracing;
