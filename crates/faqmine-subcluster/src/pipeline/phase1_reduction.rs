//! Phase 1 (reduction): validate one group's embeddings and project them
//! onto the configured number of principal components.

use faqmine_core::config::SubclusterConfig;
use faqmine_core::errors::{EmbeddingError, FaqMineResult};
use tracing::debug;

use crate::algorithms::pca;

/// Reduce a parent group's embeddings.
///
/// The reduction basis is fit on this group alone. Groups with no more
/// records than target dimensions get zero columns past their rank.
///
/// # Errors
/// `DimensionMismatch` for empty or ragged vectors, `NonFiniteVector` for
/// NaN or infinite entries.
pub fn reduce_group(
    embeddings: &[Vec<f32>],
    config: &SubclusterConfig,
) -> FaqMineResult<Vec<Vec<f64>>> {
    let Some(first) = embeddings.first() else {
        return Ok(Vec::new());
    };
    let dim = first.len();
    if dim == 0 {
        return Err(EmbeddingError::DimensionMismatch {
            expected: 1,
            actual: 0,
        }
        .into());
    }

    let mut rows = Vec::with_capacity(embeddings.len());
    for (index, embedding) in embeddings.iter().enumerate() {
        if embedding.len() != dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dim,
                actual: embedding.len(),
            }
            .into());
        }
        if embedding.iter().any(|x| !x.is_finite()) {
            return Err(EmbeddingError::NonFiniteVector { index }.into());
        }
        rows.push(embedding.iter().map(|&x| f64::from(x)).collect::<Vec<f64>>());
    }

    let projection = pca::project(&rows, config.reduced_dimensions, config.seed);
    debug!(
        records = rows.len(),
        input_dims = dim,
        rank = projection.rank(),
        "Phase 1: reduced group embeddings"
    );
    Ok(projection.projected)
}
