//! JSON-lines persistence for FAQ candidates.

use std::io::Write;

use faqmine_core::errors::FaqMineResult;
use faqmine_core::models::FaqCandidate;
use faqmine_core::traits::ICandidateSink;
use tracing::debug;

/// Writes one JSON object per candidate, one per line. Text lists stay
/// structured, so no delimiter is involved.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of candidates written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ICandidateSink for JsonLinesSink<W> {
    fn persist(&mut self, candidates: &[FaqCandidate]) -> FaqMineResult<()> {
        for candidate in candidates {
            serde_json::to_writer(&mut self.writer, candidate)?;
            self.writer.write_all(b"\n")?;
            self.written += 1;
        }
        self.writer.flush()?;
        debug!(count = candidates.len(), "persisted FAQ candidates");
        Ok(())
    }
}
