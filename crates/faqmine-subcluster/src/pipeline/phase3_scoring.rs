//! Phase 3 (scoring): cohesion within a subcluster and separation from its
//! siblings, both on cosine similarity of the reduced vectors.
//!
//! With unit rows u_i and s = Σ u_i, the sum of a full similarity matrix is
//! s·s and a cross matrix sums to s_a·s_b, so neither matrix is built.

use faqmine_core::errors::{FaqMineResult, SubclusterError};

use crate::algorithms::vector::{dot, normalized, normalized_sum};

/// Mean pairwise cosine similarity over distinct ordered pairs.
///
/// Closer to 1 means tighter. The subtracted diagonal is the actual
/// self-similarity, which is 1 for every non-zero vector.
///
/// # Errors
/// `TooFewMembers` for fewer than two members.
pub fn cohesion(members: &[&[f64]]) -> FaqMineResult<f64> {
    let n = members.len();
    if n < 2 {
        return Err(SubclusterError::TooFewMembers {
            required: 2,
            actual: n,
        }
        .into());
    }
    let dim = members[0].len();
    let sum = normalized_sum(members.iter().copied(), dim);
    let total = dot(&sum, &sum);
    let diagonal: f64 = members
        .iter()
        .map(|m| {
            let u = normalized(m);
            dot(&u, &u)
        })
        .sum();
    let pairs = (n * (n - 1)) as f64;
    Ok(((total - diagonal) / pairs).clamp(-1.0, 1.0))
}

/// One minus the mean cross cosine similarity between two groups.
///
/// # Errors
/// `TooFewMembers` if either side is empty.
pub fn separation(a: &[&[f64]], b: &[&[f64]]) -> FaqMineResult<f64> {
    for side in [a, b] {
        if side.is_empty() {
            return Err(SubclusterError::TooFewMembers {
                required: 1,
                actual: 0,
            }
            .into());
        }
    }
    let dim = a[0].len();
    let sum_a = normalized_sum(a.iter().copied(), dim);
    let sum_b = normalized_sum(b.iter().copied(), dim);
    let mean_similarity = dot(&sum_a, &sum_b) / (a.len() * b.len()) as f64;
    Ok((1.0 - mean_similarity).clamp(0.0, 2.0))
}

/// Separation of `groups[index]` from its parent group: the mean of its
/// separation against each sibling taken one at a time. 0.0 without siblings.
pub fn mean_separation(index: usize, groups: &[Vec<&[f64]>]) -> FaqMineResult<f64> {
    let own = &groups[index];
    let mut scores = Vec::with_capacity(groups.len().saturating_sub(1));
    for (other_index, other) in groups.iter().enumerate() {
        if other_index == index {
            continue;
        }
        scores.push(separation(own, other)?);
    }
    if scores.is_empty() {
        return Ok(0.0);
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}
