//! Literature search response envelope.

use serde::{Deserialize, Serialize};

use super::Record;

/// Response of `GET /api/literature`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiteratureSearchResult {
    /// Matching records for the requested page.
    #[serde(default)]
    pub hits: Hits,
}

impl LiteratureSearchResult {
    /// Consume the envelope and return the records in service order.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.hits.hits.into_iter().map(|hit| hit.metadata).collect()
    }
}

/// Page of hits plus the total match count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hits {
    /// Hits on this page.
    #[serde(default)]
    pub hits: Vec<Hit>,

    /// Total number of matches across all pages, if the service reported it.
    #[serde(default)]
    pub total: Option<u64>,
}

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    /// Record metadata.
    pub metadata: Record,
}
