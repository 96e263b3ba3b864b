use serde::{Deserialize, Serialize};

/// One summarized support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Upstream identifier used to join assignments with text.
    pub record_id: String,
    /// Summarized issue text; this is what gets embedded.
    pub summary: String,
    /// Resolution text, when the ticket has one.
    pub resolution: Option<String>,
}

impl TicketRecord {
    pub fn new(
        record_id: impl Into<String>,
        summary: impl Into<String>,
        resolution: Option<String>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            summary: summary.into(),
            resolution,
        }
    }

    /// The resolution, if present and not blank.
    pub fn non_empty_resolution(&self) -> Option<&str> {
        self.resolution
            .as_deref()
            .filter(|r| !r.trim().is_empty())
    }
}

/// A coarse group of tickets assigned upstream. Read-only input to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentGroup {
    pub id: String,
    pub records: Vec<TicketRecord>,
}

impl ParentGroup {
    pub fn new(id: impl Into<String>, records: Vec<TicketRecord>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summaries in record order, as handed to the embedding provider.
    pub fn summaries(&self) -> Vec<String> {
        self.records.iter().map(|r| r.summary.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_resolution_is_treated_as_missing() {
        let blank = TicketRecord::new("1", "vpn drops", Some("   ".to_string()));
        let missing = TicketRecord::new("2", "vpn drops", None);
        let real = TicketRecord::new("3", "vpn drops", Some("reinstall client".to_string()));
        assert_eq!(blank.non_empty_resolution(), None);
        assert_eq!(missing.non_empty_resolution(), None);
        assert_eq!(real.non_empty_resolution(), Some("reinstall client"));
    }

    #[test]
    fn summaries_keep_record_order() {
        let group = ParentGroup::new(
            "7",
            vec![
                TicketRecord::new("a", "first", None),
                TicketRecord::new("b", "second", None),
            ],
        );
        assert_eq!(group.summaries(), vec!["first", "second"]);
        assert_eq!(group.len(), 2);
    }
}
