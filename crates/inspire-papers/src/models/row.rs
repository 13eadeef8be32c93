//! IOP report row.
//!
//! Column headers follow the Academia Sinica IOP reporting template verbatim,
//! including its spellings ("Correspondance", "Volumn").

use serde::{Deserialize, Serialize};

/// Number of report columns.
pub const COLUMN_COUNT: usize = 13;

/// Report column headers in output order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "Author List",
    "First Author",
    "Author for Correspondance",
    "Publishing Year",
    "Publishing Month",
    "Title",
    "Language",
    "Journal Title (Non-Mandarin)",
    "Status",
    "Volumn & Page Number",
    "DOI",
    "e-Print",
    "Publication date",
];

/// Index of "Publishing Year" in [`COLUMNS`].
pub const PUBLISHING_YEAR_COLUMN: usize = 3;

/// Value of the "Language" column for every record.
pub const LANGUAGE: &str = "Non-Chinese";

/// Y/N column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl Flag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Y",
            Self::No => "N",
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

/// Publication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Journal details are known.
    Published,
    /// No journal details yet (preprint).
    Accepted,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Accepted => "Accepted",
        }
    }
}

/// One report row. Every field is always serialized, so all rows share the
/// same key set; missing data is `""` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Author List")]
    pub author_list: String,

    #[serde(rename = "First Author")]
    pub first_author: Flag,

    /// Mirrors `first_author`.
    #[serde(rename = "Author for Correspondance")]
    pub corresponding_author: Flag,

    #[serde(rename = "Publishing Year")]
    pub publishing_year: String,

    #[serde(rename = "Publishing Month")]
    pub publishing_month: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "Journal Title (Non-Mandarin)")]
    pub journal_title: Option<String>,

    #[serde(rename = "Status")]
    pub status: Status,

    #[serde(rename = "Volumn & Page Number")]
    pub volume_and_pages: String,

    #[serde(rename = "DOI")]
    pub doi: Option<String>,

    #[serde(rename = "e-Print")]
    pub e_print: Option<String>,

    #[serde(rename = "Publication date")]
    pub publication_date: String,
}

impl OutputRow {
    /// Cell values in [`COLUMNS`] order; `None` for null.
    #[must_use]
    pub fn cells(&self) -> [Option<&str>; COLUMN_COUNT] {
        [
            Some(self.author_list.as_str()),
            Some(self.first_author.as_str()),
            Some(self.corresponding_author.as_str()),
            Some(self.publishing_year.as_str()),
            Some(self.publishing_month.as_str()),
            Some(self.title.as_str()),
            Some(self.language.as_str()),
            self.journal_title.as_deref(),
            Some(self.status.as_str()),
            Some(self.volume_and_pages.as_str()),
            self.doi.as_deref(),
            self.e_print.as_deref(),
            Some(self.publication_date.as_str()),
        ]
    }
}
