//! Principal component projection for one parent group.
//!
//! Groups are small (tens to low hundreds of records) while embeddings are
//! wide, so the eigenproblem is solved on the N×N Gram matrix of the centered
//! data instead of the D×D covariance. Leading eigenpairs are found by power
//! iteration with deflation; the projection of record j onto component i is
//! `sqrt(λ_i) * u_i[j]`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::vector::{dot, mean, norm};

/// Power iteration cap per component.
const MAX_POWER_ITERATIONS: usize = 1000;
/// Convergence threshold on the change of the unit eigenvector estimate.
const POWER_TOLERANCE: f64 = 1e-12;
/// Eigenvalues below this fraction of the Gram trace are treated as zero.
const RANK_TOLERANCE: f64 = 1e-12;

/// Output of a reduction.
#[derive(Debug, Clone)]
pub struct PcaProjection {
    /// One row per input vector, each exactly `target_dims` wide.
    pub projected: Vec<Vec<f64>>,
    /// Variance captured by each non-zero component, in descending order.
    pub explained_variance: Vec<f64>,
}

impl PcaProjection {
    /// Number of components carrying variance; the remaining columns are zero.
    pub fn rank(&self) -> usize {
        self.explained_variance.len()
    }
}

/// Project `rows` onto their leading `target_dims` principal components.
///
/// Components beyond the rank of the centered data are emitted as zero
/// columns, so the output width is always `target_dims`. The sign of each
/// component is fixed so its largest-magnitude loading is positive, which
/// together with the seeded start vector makes the output deterministic.
pub fn project(rows: &[Vec<f64>], target_dims: usize, seed: u64) -> PcaProjection {
    let n = rows.len();
    let mut projected = vec![vec![0.0; target_dims]; n];
    if n == 0 || target_dims == 0 {
        return PcaProjection {
            projected,
            explained_variance: Vec::new(),
        };
    }

    let dim = rows[0].len();
    let center = mean(rows.iter().map(|r| r.as_slice()), dim);
    let centered: Vec<Vec<f64>> = rows
        .iter()
        .map(|r| r.iter().zip(&center).map(|(x, m)| x - m).collect())
        .collect();

    let mut gram = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let g = dot(&centered[i], &centered[j]);
            gram[i][j] = g;
            gram[j][i] = g;
        }
    }
    let trace: f64 = (0..n).map(|i| gram[i][i]).sum();
    let floor = trace * RANK_TOLERANCE + f64::MIN_POSITIVE;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut explained_variance = Vec::new();
    let dof = (n.saturating_sub(1)).max(1) as f64;

    for component in 0..target_dims.min(n) {
        let Some((eigenvalue, eigenvector)) = leading_eigenpair(&gram, &mut rng) else {
            break;
        };
        if eigenvalue <= floor {
            break;
        }

        let scale = eigenvalue.sqrt();
        for (row, u) in projected.iter_mut().zip(&eigenvector) {
            row[component] = scale * u;
        }
        explained_variance.push(eigenvalue / dof);

        // Deflate.
        for i in 0..n {
            for j in 0..n {
                gram[i][j] -= eigenvalue * eigenvector[i] * eigenvector[j];
            }
        }
    }

    PcaProjection {
        projected,
        explained_variance,
    }
}

/// Dominant eigenpair of a symmetric positive semi-definite matrix.
fn leading_eigenpair(matrix: &[Vec<f64>], rng: &mut ChaCha8Rng) -> Option<(f64, Vec<f64>)> {
    let n = matrix.len();
    let mut v: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
    let start = norm(&v);
    if start < f64::EPSILON {
        return None;
    }
    v.iter_mut().for_each(|x| *x /= start);

    for _ in 0..MAX_POWER_ITERATIONS {
        let mut w = mat_vec(matrix, &v);
        let length = norm(&w);
        if length < f64::MIN_POSITIVE {
            return Some((0.0, v));
        }
        w.iter_mut().for_each(|x| *x /= length);
        let shift: f64 = w.iter().zip(&v).map(|(a, b)| (a - b).abs()).sum();
        v = w;
        if shift < POWER_TOLERANCE {
            break;
        }
    }

    let eigenvalue = dot(&v, &mat_vec(matrix, &v));
    fix_sign(&mut v);
    Some((eigenvalue, v))
}

fn mat_vec(matrix: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    matrix.iter().map(|row| dot(row, v)).collect()
}

/// Flip `v` so its largest-magnitude entry is positive.
fn fix_sign(v: &mut [f64]) {
    let mut pivot = 0;
    for (i, x) in v.iter().enumerate() {
        if x.abs() > v[pivot].abs() {
            pivot = i;
        }
    }
    if v.get(pivot).is_some_and(|x| *x < 0.0) {
        v.iter_mut().for_each(|x| *x = -*x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::vector::distance;

    fn spread_points() -> Vec<Vec<f64>> {
        vec![
            vec![3.0, 1.5, 0.5],
            vec![-3.0, 1.5, -0.5],
            vec![2.0, -1.5, 0.5],
            vec![-2.0, -1.0, -0.5],
            vec![1.0, 0.5, 0.2],
            vec![-1.0, -1.0, -0.2],
        ]
    }

    #[test]
    fn output_has_fixed_width() {
        let out = project(&spread_points(), 10, 42);
        assert_eq!(out.projected.len(), 6);
        assert!(out.projected.iter().all(|r| r.len() == 10));
    }

    #[test]
    fn rank_deficient_components_are_zero() {
        let out = project(&spread_points(), 10, 42);
        assert_eq!(out.rank(), 3);
        for row in &out.projected {
            assert!(row[3..].iter().all(|x| *x == 0.0));
        }
    }

    #[test]
    fn full_rank_projection_preserves_distances() {
        let rows = spread_points();
        let out = project(&rows, 10, 7);
        for i in 0..rows.len() {
            for j in 0..rows.len() {
                let before = distance(&rows[i], &rows[j]);
                let after = distance(&out.projected[i], &out.projected[j]);
                assert!((before - after).abs() < 1e-6, "{before} vs {after}");
            }
        }
    }

    #[test]
    fn variance_is_descending() {
        let out = project(&spread_points(), 3, 42);
        let ev = &out.explained_variance;
        assert!(ev.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a = project(&spread_points(), 2, 42);
        let b = project(&spread_points(), 2, 42);
        assert_eq!(a.projected, b.projected);
    }

    #[test]
    fn identical_rows_project_to_origin() {
        let rows = vec![vec![0.6, 0.8]; 5];
        let out = project(&rows, 10, 42);
        assert_eq!(out.rank(), 0);
        assert!(out.projected.iter().flatten().all(|x| *x == 0.0));
    }

    #[test]
    fn empty_input_yields_empty_projection() {
        let out = project(&[], 10, 42);
        assert!(out.projected.is_empty());
        assert_eq!(out.rank(), 0);
    }
}
