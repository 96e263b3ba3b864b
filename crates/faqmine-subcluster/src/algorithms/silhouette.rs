//! Silhouette coefficient with Euclidean distance.

use super::vector::distance;

/// Per-point silhouette values.
///
/// For point i with label L: `a` is the mean distance to the other members of
/// L, `b` the smallest mean distance to the members of any other non-empty
/// label, and the value is `(b - a) / max(a, b)`. Points alone in their label,
/// points with no other label to compare against, and points where
/// `max(a, b) == 0` score 0.
pub fn silhouette_samples(points: &[Vec<f64>], labels: &[usize], k: usize) -> Vec<f64> {
    let n = points.len();
    let mut sizes = vec![0usize; k];
    for &l in labels {
        sizes[l] += 1;
    }

    let mut dist = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = distance(&points[i], &points[j]);
            dist[i][j] = d;
            dist[j][i] = d;
        }
    }

    (0..n)
        .map(|i| {
            let own = labels[i];
            if sizes[own] < 2 {
                return 0.0;
            }
            let mut sums = vec![0.0; k];
            for j in 0..n {
                sums[labels[j]] += dist[i][j];
            }
            let a = sums[own] / (sizes[own] - 1) as f64;
            let b = (0..k)
                .filter(|&l| l != own && sizes[l] > 0)
                .map(|l| sums[l] / sizes[l] as f64)
                .fold(f64::INFINITY, f64::min);
            if !b.is_finite() {
                return 0.0;
            }
            let scale = a.max(b);
            if scale > 0.0 {
                (b - a) / scale
            } else {
                0.0
            }
        })
        .collect()
}

/// Mean silhouette over all points; 0.0 for empty input.
pub fn silhouette_score(points: &[Vec<f64>], labels: &[usize], k: usize) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let samples = silhouette_samples(points, labels, k);
    samples.iter().sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_separated_labels_score_near_one() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
        ];
        let score = silhouette_score(&points, &[0, 0, 1, 1], 2);
        assert!(score > 0.98, "score {score}");
    }

    #[test]
    fn swapped_labels_score_negative() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
        ];
        let score = silhouette_score(&points, &[0, 1, 0, 1], 2);
        assert!(score < 0.0);
    }

    #[test]
    fn singleton_label_scores_zero() {
        let points = vec![vec![0.0], vec![1.0], vec![1.1]];
        let samples = silhouette_samples(&points, &[0, 1, 1], 2);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn values_stay_in_range() {
        let points: Vec<Vec<f64>> = (0..9).map(|i| vec![(i * i % 7) as f64, i as f64]).collect();
        let labels: Vec<usize> = (0..9).map(|i| i % 3).collect();
        for s in silhouette_samples(&points, &labels, 3) {
            assert!((-1.0..=1.0).contains(&s));
        }
    }
}
