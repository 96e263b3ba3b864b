use serde::{Deserialize, Serialize};

use super::defaults;

/// Upstream ticket source selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Ticket system the parent groups were assigned from, e.g. "tdx" or "anvil".
    pub ticket_source: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            ticket_source: defaults::DEFAULT_TICKET_SOURCE.to_string(),
        }
    }
}
