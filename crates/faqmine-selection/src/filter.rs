//! Relative size window, ordering and output cap.

use faqmine_core::config::RankingConfig;
use faqmine_core::models::ScoredSubcluster;

/// True when `normalized_size` lies strictly inside
/// `(min_size + epsilon, max_size - epsilon)`.
pub fn within_size_window(normalized_size: f64, config: &RankingConfig) -> bool {
    normalized_size > config.lower_bound() && normalized_size < config.upper_bound()
}

/// Keep records inside the size window, order by score descending and cap
/// at `num_faqs`. The sort is stable, so equal scores keep pool order.
/// Fewer survivors than the cap are returned as-is.
pub fn select_top(scored: Vec<ScoredSubcluster>, config: &RankingConfig) -> Vec<ScoredSubcluster> {
    let mut kept: Vec<ScoredSubcluster> = scored
        .into_iter()
        .filter(|s| within_size_window(s.normalized_size, config))
        .collect();
    kept.sort_by(|a, b| b.score.total_cmp(&a.score));
    kept.truncate(config.num_faqs);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqmine_core::models::Subcluster;

    fn scored(id: usize, normalized_size: f64, score: f64) -> ScoredSubcluster {
        ScoredSubcluster {
            subcluster: Subcluster {
                parent_id: "p".into(),
                subcluster_id: id,
                size: 5,
                centroid: vec![],
                cohesion: 0.0,
                separation: 0.0,
                summaries: vec![],
                resolutions: vec![],
            },
            normalized_size,
            score,
        }
    }

    #[test]
    fn lower_bound_is_exclusive() {
        let config = RankingConfig::default();
        let edge = config.min_size + config.epsilon;
        assert!(!within_size_window(edge, &config));
        assert!(within_size_window(edge + 1e-9, &config));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let config = RankingConfig::default();
        let edge = config.max_size - config.epsilon;
        assert!(!within_size_window(edge, &config));
        assert!(within_size_window(edge - 1e-9, &config));
    }

    #[test]
    fn extremes_are_excluded() {
        let config = RankingConfig::default();
        assert!(!within_size_window(0.0, &config));
        assert!(!within_size_window(1.0, &config));
        assert!(!within_size_window(0.05, &config));
        assert!(!within_size_window(0.80, &config));
    }

    #[test]
    fn sorted_by_score_with_stable_ties() {
        let config = RankingConfig::default();
        let out = select_top(
            vec![
                scored(0, 0.5, 1.0),
                scored(1, 0.5, 2.0),
                scored(2, 0.5, 1.0),
                scored(3, 0.5, 3.0),
            ],
            &config,
        );
        let ids: Vec<usize> = out.iter().map(|s| s.subcluster.subcluster_id).collect();
        assert_eq!(ids, vec![3, 1, 0, 2]);
    }

    #[test]
    fn cap_truncates_without_padding() {
        let config = RankingConfig {
            num_faqs: 2,
            ..RankingConfig::default()
        };
        let many: Vec<ScoredSubcluster> = (0..5).map(|i| scored(i, 0.3, i as f64)).collect();
        assert_eq!(select_top(many, &config).len(), 2);

        let few = vec![scored(0, 0.3, 1.0)];
        let default_cap = RankingConfig::default();
        assert_eq!(select_top(few, &default_cap).len(), 1);
    }
}
