//! # faqmine-selection
//!
//! Global ranking over the complete accumulator: min-max size
//! normalization, weighted composite score, relative size window,
//! stable descending sort and output cap. Plus export of the selected
//! subclusters as FAQ candidates.

pub mod export;
pub mod filter;
pub mod scoring;
pub mod sink;

use faqmine_core::config::RankingConfig;
use faqmine_core::models::{GlobalAccumulator, ScoredSubcluster};
use tracing::info;

pub use export::{flatten, join_escaped, split_escaped, to_candidate, FlatCandidateRow};
pub use sink::JsonLinesSink;

/// Score every accumulated subcluster and return the top candidates.
///
/// Takes the accumulator by value: normalization needs the whole pool, so
/// this runs exactly once, after every parent group has been processed.
pub fn rank_and_select(
    accumulator: GlobalAccumulator,
    config: &RankingConfig,
) -> Vec<ScoredSubcluster> {
    let pool = accumulator.len();
    let scored = scoring::score_all(accumulator.into_records(), config);
    let selected = filter::select_top(scored, config);
    info!(
        pool,
        selected = selected.len(),
        cap = config.num_faqs,
        "global ranking complete"
    );
    selected
}
