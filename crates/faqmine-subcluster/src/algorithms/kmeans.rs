//! Seeded k-means with k-means++ initialization and multiple restarts.
//!
//! One `ChaCha8Rng` stream, seeded once, drives every restart in order, so a
//! fit is fully determined by the input, `k` and the seed.

use faqmine_core::errors::{FaqMineResult, SubclusterError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::vector::{mean, squared_distance};

/// Parameters for one k-means fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansParams {
    pub k: usize,
    /// Independent restarts; the lowest-inertia one is kept.
    pub n_init: usize,
    /// Lloyd iterations per restart.
    pub max_iterations: usize,
    /// Convergence threshold, relative to the mean per-dimension variance.
    pub tolerance: f64,
    pub seed: u64,
}

/// Result of a k-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    /// Cluster label for every point, in `0..k`.
    pub labels: Vec<usize>,
    /// Mean of each cluster's members.
    pub centroids: Vec<Vec<f64>>,
    /// Sum of squared distances from points to their centroid.
    pub inertia: f64,
}

impl KMeansFit {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Member count per label.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Indices of the points carrying `label`, in input order.
    pub fn members(&self, label: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, &l)| (l == label).then_some(i))
            .collect()
    }
}

/// Fit k-means to `points`.
///
/// # Errors
/// `InvalidK` if `k` is zero or exceeds the number of points.
pub fn fit(points: &[Vec<f64>], params: &KMeansParams) -> FaqMineResult<KMeansFit> {
    let n = points.len();
    if params.k == 0 || params.k > n {
        return Err(SubclusterError::InvalidK {
            k: params.k,
            points: n,
        }
        .into());
    }

    let dim = points[0].len();
    let threshold = params.tolerance * mean_variance(points, dim);
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    let mut best: Option<KMeansFit> = None;
    for _ in 0..params.n_init.max(1) {
        let seeds = plus_plus_init(points, params.k, &mut rng);
        let candidate = lloyd(points, seeds, params.max_iterations, threshold);
        let better = best
            .as_ref()
            .map_or(true, |b| candidate.inertia < b.inertia);
        if better {
            best = Some(candidate);
        }
    }

    best.ok_or_else(|| {
        SubclusterError::InvalidK {
            k: params.k,
            points: n,
        }
        .into()
    })
}

/// k-means++ seeding: each new center is drawn with probability
/// proportional to its squared distance from the nearest chosen center.
fn plus_plus_init(points: &[Vec<f64>], k: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.random_range(0..n)].clone());

    let mut nearest: Vec<f64> = points
        .iter()
        .map(|p| squared_distance(p, &centers[0]))
        .collect();

    while centers.len() < k {
        let total: f64 = nearest.iter().sum();
        let pick = if total > 0.0 {
            let target = rng.random::<f64>() * total;
            let mut cumulative = 0.0;
            let mut chosen = n - 1;
            for (i, d) in nearest.iter().enumerate() {
                cumulative += d;
                if cumulative > target {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            rng.random_range(0..n)
        };

        let center = points[pick].clone();
        for (d, p) in nearest.iter_mut().zip(points) {
            *d = d.min(squared_distance(p, &center));
        }
        centers.push(center);
    }
    centers
}

/// Lloyd iterations from the given seeds.
fn lloyd(
    points: &[Vec<f64>],
    mut centroids: Vec<Vec<f64>>,
    max_iterations: usize,
    threshold: f64,
) -> KMeansFit {
    let k = centroids.len();
    let dim = points[0].len();
    let mut labels = vec![usize::MAX; points.len()];

    for _ in 0..max_iterations.max(1) {
        let mut changed = false;
        for (i, p) in points.iter().enumerate() {
            let label = nearest_centroid(p, &centroids);
            if labels[i] != label {
                labels[i] = label;
                changed = true;
            }
        }

        repair_empty_clusters(points, &centroids, &mut labels, k);

        let updated: Vec<Vec<f64>> = (0..k)
            .map(|c| {
                mean(
                    points
                        .iter()
                        .zip(&labels)
                        .filter(|(_, l)| **l == c)
                        .map(|(p, _)| p.as_slice()),
                    dim,
                )
            })
            .collect();
        let shift: f64 = centroids
            .iter()
            .zip(&updated)
            .map(|(a, b)| squared_distance(a, b))
            .sum();
        centroids = updated;

        if !changed || shift <= threshold {
            break;
        }
    }

    let inertia = points
        .iter()
        .zip(&labels)
        .map(|(p, &l)| squared_distance(p, &centroids[l]))
        .sum();

    KMeansFit {
        labels,
        centroids,
        inertia,
    }
}

/// Index of the closest centroid; ties go to the lowest index.
fn nearest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(point, centroid);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

/// Give every empty cluster the point farthest from its current centroid,
/// taken from a cluster that can spare it.
fn repair_empty_clusters(
    points: &[Vec<f64>],
    centroids: &[Vec<f64>],
    labels: &mut [usize],
    k: usize,
) {
    let mut sizes = vec![0usize; k];
    for &l in labels.iter() {
        sizes[l] += 1;
    }

    for empty in 0..k {
        if sizes[empty] > 0 {
            continue;
        }
        let mut donor: Option<(usize, f64)> = None;
        for (i, p) in points.iter().enumerate() {
            let l = labels[i];
            if sizes[l] < 2 {
                continue;
            }
            let d = squared_distance(p, &centroids[l]);
            if donor.map_or(true, |(_, best)| d > best) {
                donor = Some((i, d));
            }
        }
        if let Some((i, _)) = donor {
            sizes[labels[i]] -= 1;
            labels[i] = empty;
            sizes[empty] = 1;
        }
    }
}

/// Mean over dimensions of the per-dimension variance.
fn mean_variance(points: &[Vec<f64>], dim: usize) -> f64 {
    if dim == 0 {
        return 0.0;
    }
    let center = mean(points.iter().map(|p| p.as_slice()), dim);
    let total: f64 = points.iter().map(|p| squared_distance(p, &center)).sum();
    total / (points.len() as f64 * dim as f64)
}
