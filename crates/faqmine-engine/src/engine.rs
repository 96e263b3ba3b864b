//! FaqMineEngine: owns the embedding provider and the validated config.

use faqmine_core::config::FaqMineConfig;
use faqmine_core::errors::{EmbeddingError, FaqMineResult};
use faqmine_core::models::{FaqCandidate, GlobalAccumulator, ParentGroup, ScoredSubcluster};
use faqmine_core::traits::{ICandidateSink, IEmbeddingProvider};
use faqmine_subcluster::pipeline::{self, GroupOutcome};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::monitoring::RunReport;

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Selected subclusters with their normalized size and score, best first.
    pub selected: Vec<ScoredSubcluster>,
    /// Downstream records, in the same order as `selected`.
    pub candidates: Vec<FaqCandidate>,
    pub report: RunReport,
}

/// The batch engine.
///
/// Parent groups are independent; the accumulator is only appended to,
/// and global ranking starts after the last group has been processed.
pub struct FaqMineEngine {
    /// Embedding provider for record summaries.
    embedding_provider: Box<dyn IEmbeddingProvider>,
    config: FaqMineConfig,
}

impl FaqMineEngine {
    /// Create an engine. The config is validated here, once, so every later
    /// stage can rely on it.
    pub fn new(
        embedding_provider: Box<dyn IEmbeddingProvider>,
        config: FaqMineConfig,
    ) -> FaqMineResult<Self> {
        config.validate()?;
        Ok(Self {
            embedding_provider,
            config,
        })
    }

    pub fn config(&self) -> &FaqMineConfig {
        &self.config
    }

    /// Run every parent group through the per-group pass and collect the
    /// surviving subclusters in group order.
    pub fn build_accumulator(
        &self,
        groups: &[ParentGroup],
    ) -> FaqMineResult<(GlobalAccumulator, RunReport)> {
        let outcomes: Vec<GroupOutcome> = if self.config.subcluster.parallel_groups {
            groups
                .par_iter()
                .map(|g| self.process_group(g))
                .collect::<FaqMineResult<_>>()?
        } else {
            groups
                .iter()
                .map(|g| self.process_group(g))
                .collect::<FaqMineResult<_>>()?
        };

        let mut report = RunReport::default();
        let mut accumulator = GlobalAccumulator::new();
        for outcome in outcomes {
            report.record_group(&outcome);
            accumulator.extend_group(outcome.into_subclusters());
        }
        report.subclusters_accumulated = accumulator.len();

        info!(
            groups = report.groups_total,
            subclustered = report.groups_subclustered,
            accumulated = accumulator.len(),
            "accumulator complete"
        );
        Ok((accumulator, report))
    }

    /// Global ranking over a complete accumulator.
    pub fn select(&self, accumulator: GlobalAccumulator) -> Vec<ScoredSubcluster> {
        faqmine_selection::rank_and_select(accumulator, &self.config.ranking)
    }

    /// Build the accumulator, then rank and select.
    pub fn run(&self, groups: &[ParentGroup]) -> FaqMineResult<RunOutcome> {
        let (accumulator, mut report) = self.build_accumulator(groups)?;
        let selected = self.select(accumulator);
        let candidates: Vec<FaqCandidate> =
            selected.iter().map(faqmine_selection::to_candidate).collect();
        report.candidates_selected = candidates.len();
        report.log_summary();

        Ok(RunOutcome {
            selected,
            candidates,
            report,
        })
    }

    /// [`run`](Self::run), then hand the candidates to `sink`.
    pub fn run_into(
        &self,
        groups: &[ParentGroup],
        sink: &mut dyn ICandidateSink,
    ) -> FaqMineResult<RunReport> {
        let outcome = self.run(groups)?;
        sink.persist(&outcome.candidates)?;
        Ok(outcome.report)
    }

    fn process_group(&self, group: &ParentGroup) -> FaqMineResult<GroupOutcome> {
        if let Some(reason) = pipeline::precheck(group, &self.config.subcluster) {
            debug!(parent = %group.id, ?reason, "skipped before embedding");
            return Ok(GroupOutcome::Skipped(reason));
        }
        let embeddings = self.embed_group(group)?;
        pipeline::run_group(group, &embeddings, &self.config.subcluster)
    }

    /// Embed a group's summaries in batches of `embedding.batch_size`.
    fn embed_group(&self, group: &ParentGroup) -> FaqMineResult<Vec<Vec<f32>>> {
        let provider = self.embedding_provider.as_ref();
        if !provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .into());
        }

        let summaries = group.summaries();
        let mut embeddings = Vec::with_capacity(summaries.len());
        for batch in summaries.chunks(self.config.embedding.batch_size) {
            let vectors = provider.embed_batch(batch)?;
            if vectors.len() != batch.len() {
                return Err(EmbeddingError::BatchSizeMismatch {
                    sent: batch.len(),
                    received: vectors.len(),
                }
                .into());
            }
            embeddings.extend(vectors);
        }
        debug!(
            parent = %group.id,
            records = embeddings.len(),
            provider = provider.name(),
            "embedded parent group"
        );
        Ok(embeddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqmine_core::errors::{ConfigError, FaqMineError};

    struct ConstantEmbedder;

    impl IEmbeddingProvider for ConstantEmbedder {
        fn embed(&self, _text: &str) -> FaqMineResult<Vec<f32>> {
            Ok(vec![0.5; 8])
        }
        fn embed_batch(&self, texts: &[String]) -> FaqMineResult<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![0.5; 8]).collect())
        }
        fn dimensions(&self) -> usize {
            8
        }
        fn name(&self) -> &str {
            "constant"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = FaqMineConfig::default();
        config.embedding.batch_size = 0;
        let err = FaqMineEngine::new(Box::new(ConstantEmbedder), config)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            FaqMineError::ConfigError(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_input_selects_nothing() {
        let engine = FaqMineEngine::new(Box::new(ConstantEmbedder), FaqMineConfig::default())
            .unwrap();
        let outcome = engine.run(&[]).unwrap();
        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.report, RunReport::default());
    }
}
