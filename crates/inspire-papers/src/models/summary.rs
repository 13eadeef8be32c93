//! Compact record summary.

use serde::{Deserialize, Serialize};

/// Compact view of a record. Optional fields are only emitted when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub title: String,

    /// Joined author names, cut with "et. al.".
    pub authors: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_eprint: Option<String>,

    /// arXiv abstract page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_volume: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_start: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}
