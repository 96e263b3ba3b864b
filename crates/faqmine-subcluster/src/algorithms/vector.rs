//! Dense vector helpers. All math is done in f64.

/// Dot product over the shared prefix of two vectors.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Unit-length copy of `v`. A zero vector stays zero.
pub fn normalized(v: &[f64]) -> Vec<f64> {
    let n = norm(v);
    if n < f64::EPSILON {
        return vec![0.0; v.len()];
    }
    v.iter().map(|x| x / n).collect()
}

/// Cosine similarity between two vectors.
/// Returns 0.0 for mismatched lengths or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let denom = norm(a) * norm(b);
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot(a, b) / denom).clamp(-1.0, 1.0)
    }
}

/// Squared Euclidean distance.
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    squared_distance(a, b).sqrt()
}

/// Component-wise mean of `rows`; `dim` zeros when `rows` is empty.
pub fn mean<'a>(rows: impl IntoIterator<Item = &'a [f64]>, dim: usize) -> Vec<f64> {
    let mut acc = vec![0.0; dim];
    let mut count = 0usize;
    for row in rows {
        for (a, x) in acc.iter_mut().zip(row) {
            *a += x;
        }
        count += 1;
    }
    if count > 0 {
        for a in &mut acc {
            *a /= count as f64;
        }
    }
    acc
}

/// Sum of the unit-normalized rows. The pairwise cosine sums used by the
/// scorer collapse to dot products of these sums.
pub fn normalized_sum<'a>(rows: impl IntoIterator<Item = &'a [f64]>, dim: usize) -> Vec<f64> {
    let mut acc = vec![0.0; dim];
    for row in rows {
        for (a, x) in acc.iter_mut().zip(normalized(row)) {
            *a += x;
        }
    }
    acc
}
