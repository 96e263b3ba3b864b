//! Property tests for global ranking and the flat export format.

use proptest::prelude::*;

use faqmine_core::config::RankingConfig;
use faqmine_core::models::{GlobalAccumulator, Subcluster};
use faqmine_selection::scoring::normalize_sizes;
use faqmine_selection::{join_escaped, rank_and_select, split_escaped};

fn subcluster_strategy() -> impl Strategy<Value = Subcluster> {
    ("[a-d]", 0usize..4, 5usize..200, -1.0f64..1.0, 0.0f64..2.0).prop_map(
        |(parent_id, subcluster_id, size, cohesion, separation)| Subcluster {
            parent_id,
            subcluster_id,
            size,
            centroid: vec![],
            cohesion,
            separation,
            summaries: vec![format!("s{size}")],
            resolutions: vec![],
        },
    )
}

proptest! {
    #[test]
    fn prop_normalized_sizes_in_unit_interval(sizes in prop::collection::vec(1usize..1000, 1..50)) {
        let normalized = normalize_sizes(&sizes);
        prop_assert_eq!(normalized.len(), sizes.len());
        prop_assert!(normalized.iter().all(|n| (0.0..=1.0).contains(n)));
    }
}

proptest! {
    #[test]
    fn prop_selection_is_bounded_and_sorted(
        pool in prop::collection::vec(subcluster_strategy(), 0..60),
        num_faqs in 0usize..30,
    ) {
        let config = RankingConfig { num_faqs, ..RankingConfig::default() };
        let accumulator: GlobalAccumulator = pool.into_iter().collect();
        let selected = rank_and_select(accumulator, &config);

        prop_assert!(selected.len() <= num_faqs);
        prop_assert!(selected.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(selected
            .iter()
            .all(|s| s.normalized_size > config.lower_bound() && s.normalized_size < config.upper_bound()));
    }
}

proptest! {
    #[test]
    fn prop_selection_is_deterministic(pool in prop::collection::vec(subcluster_strategy(), 0..60)) {
        let config = RankingConfig::default();
        let a = rank_and_select(pool.iter().cloned().collect(), &config);
        let b = rank_and_select(pool.into_iter().collect(), &config);
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_escaped_lists_split_back(items in prop::collection::vec("[a-z|\\\\ ]{1,12}", 1..8)) {
        prop_assert_eq!(split_escaped(&join_escaped(items.as_slice())), items);
    }
}
