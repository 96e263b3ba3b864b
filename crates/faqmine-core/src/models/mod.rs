mod accumulator;
mod faq_candidate;
mod subcluster;
mod ticket;

pub use accumulator::GlobalAccumulator;
pub use faq_candidate::FaqCandidate;
pub use subcluster::{ScoredSubcluster, Subcluster, SubclusterDraft, SubclusterEnrichment};
pub use ticket::{ParentGroup, TicketRecord};
