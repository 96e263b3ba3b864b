//! Integration tests for global ranking and candidate export.

use serde::Deserialize;

use faqmine_core::config::RankingConfig;
use faqmine_core::models::{GlobalAccumulator, Subcluster};
use faqmine_core::traits::ICandidateSink;
use faqmine_core::FaqCandidate;

use faqmine_selection::{flatten, rank_and_select, split_escaped, to_candidate, JsonLinesSink};
use faqmine_selection::scoring::score_all;

#[derive(Debug, Deserialize)]
struct PoolFixture {
    subclusters: Vec<Subcluster>,
    expected_normalized_sizes: Vec<f64>,
    expected_order: Vec<(String, usize)>,
}

fn pool() -> PoolFixture {
    test_fixtures::load_fixture("selection/pool_basic.json")
}

fn ids<'a>(items: impl IntoIterator<Item = &'a Subcluster>) -> Vec<(String, usize)> {
    items
        .into_iter()
        .map(|s| (s.parent_id.clone(), s.subcluster_id))
        .collect()
}

#[test]
fn fixture_is_present() {
    assert!(test_fixtures::fixture_exists("selection/pool_basic.json"));
}

#[test]
fn normalization_spans_the_whole_pool() {
    let fixture = pool();
    let scored = score_all(fixture.subclusters, &RankingConfig::default());
    let normalized: Vec<f64> = scored.iter().map(|s| s.normalized_size).collect();

    assert_eq!(normalized.len(), fixture.expected_normalized_sizes.len());
    for (got, want) in normalized.iter().zip(&fixture.expected_normalized_sizes) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn window_drops_extremes_and_orders_by_score() {
    let fixture = pool();
    let accumulator: GlobalAccumulator = fixture.subclusters.into_iter().collect();
    let selected = rank_and_select(accumulator, &RankingConfig::default());

    assert_eq!(ids(selected.iter().map(|s| &s.subcluster)), fixture.expected_order);
    assert!(selected.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(selected
        .iter()
        .all(|s| s.normalized_size > 0.051 && s.normalized_size < 0.799));
}

#[test]
fn output_is_capped_at_num_faqs() {
    let fixture = pool();
    let config = RankingConfig {
        num_faqs: 3,
        ..RankingConfig::default()
    };
    let accumulator: GlobalAccumulator = fixture.subclusters.into_iter().collect();
    let selected = rank_and_select(accumulator, &config);

    assert_eq!(
        ids(selected.iter().map(|s| &s.subcluster)),
        fixture.expected_order[..3].to_vec()
    );
}

#[test]
fn zero_cap_selects_nothing() {
    let fixture = pool();
    let config = RankingConfig {
        num_faqs: 0,
        ..RankingConfig::default()
    };
    let accumulator: GlobalAccumulator = fixture.subclusters.into_iter().collect();
    assert!(rank_and_select(accumulator, &config).is_empty());
}

#[test]
fn empty_pool_selects_nothing() {
    let selected = rank_and_select(GlobalAccumulator::new(), &RankingConfig::default());
    assert!(selected.is_empty());
}

#[test]
fn equal_sizes_are_all_filtered_out() {
    let fixture = pool();
    let accumulator: GlobalAccumulator = fixture
        .subclusters
        .into_iter()
        .map(|mut s| {
            s.size = 20;
            s
        })
        .collect();
    assert!(rank_and_select(accumulator, &RankingConfig::default()).is_empty());
}

#[test]
fn selected_candidates_export_to_rows_and_json_lines() {
    let fixture = pool();
    let accumulator: GlobalAccumulator = fixture.subclusters.into_iter().collect();
    let candidates: Vec<FaqCandidate> = rank_and_select(accumulator, &RankingConfig::default())
        .iter()
        .map(to_candidate)
        .collect();

    let top = &candidates[0];
    assert_eq!((top.parent_id.as_str(), top.subcluster_id), ("p2", 2));
    let row = flatten(top);
    assert_eq!(row.all_summaries, "driver missing");
    assert_eq!(split_escaped(&row.all_resolutions), vec!["install driver"]);

    let mut sink = JsonLinesSink::new(Vec::new());
    sink.persist(&candidates).unwrap();
    assert_eq!(sink.written(), candidates.len());

    let bytes = sink.into_inner();
    let text = String::from_utf8(bytes).unwrap();
    let parsed: Vec<FaqCandidate> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, candidates);
}
