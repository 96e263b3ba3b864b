use crate::errors::FaqMineResult;
use crate::models::FaqCandidate;

/// Downstream persistence for the final, ordered candidate list.
pub trait ICandidateSink {
    /// Persist candidates in the order given. Called once per run.
    fn persist(&mut self, candidates: &[FaqCandidate]) -> FaqMineResult<()>;
}
