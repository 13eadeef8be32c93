//! Literature record model matching the INSPIRE-HEP metadata schema.
//!
//! Only the fields the report reads are modelled; everything else in the
//! metadata object is ignored on deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// One publication's metadata.
///
/// `titles` and `authors` are guaranteed by the service and have no serde
/// default, so a record without them fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Titles, the first one is the display title.
    pub titles: Vec<TitleEntry>,

    /// Authors in the order printed on the paper.
    pub authors: Vec<AuthorEntry>,

    /// Collaborations (e.g. "IceCube").
    #[serde(default)]
    pub collaborations: Vec<ValueEntry>,

    /// arXiv identifiers.
    #[serde(default)]
    pub arxiv_eprints: Vec<ValueEntry>,

    /// Date the record was created in the legacy system.
    #[serde(default)]
    pub legacy_creation_date: Option<String>,

    /// Journal publication details.
    #[serde(default)]
    pub publication_info: Vec<PublicationInfo>,

    /// Digital Object Identifiers.
    #[serde(default)]
    pub dois: Vec<ValueEntry>,

    /// Publisher imprints.
    #[serde(default)]
    pub imprints: Vec<Imprint>,
}

impl Record {
    /// Display title.
    pub fn title(&self) -> RecordResult<&str> {
        self.titles
            .first()
            .map(|t| t.title.as_str())
            .ok_or(RecordError::missing("titles"))
    }

    /// First listed author.
    pub fn first_author(&self) -> RecordResult<&AuthorEntry> {
        self.authors.first().ok_or(RecordError::missing("authors"))
    }

    /// First publication info entry. An empty list counts as absent.
    #[must_use]
    pub fn publication(&self) -> Option<&PublicationInfo> {
        self.publication_info.first()
    }

    /// Date of the first imprint, verbatim.
    #[must_use]
    pub fn imprint_date(&self) -> Option<&str> {
        self.imprints.first()?.date.as_deref()
    }

    /// First DOI.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        first_value(&self.dois)
    }

    /// First arXiv identifier.
    #[must_use]
    pub fn arxiv_eprint(&self) -> Option<&str> {
        first_value(&self.arxiv_eprints)
    }

    /// First collaboration name.
    #[must_use]
    pub fn collaboration(&self) -> Option<&str> {
        first_value(&self.collaborations)
    }
}

fn first_value(entries: &[ValueEntry]) -> Option<&str> {
    entries.first()?.value.as_deref()
}

/// Title entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    /// Title text.
    pub title: String,
}

/// Author entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorEntry {
    /// Name as "Last, First".
    pub full_name: String,
}

impl AuthorEntry {
    /// Create an author entry from a full name.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self { full_name: full_name.into() }
    }
}

/// Entry whose payload is a single `value` string (DOIs, eprints, collaborations).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEntry {
    /// The identifier or name.
    #[serde(default)]
    pub value: Option<String>,
}

impl ValueEntry {
    /// Create an entry holding `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: Some(value.into()) }
    }
}

/// Journal publication details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationInfo {
    /// Publication year.
    #[serde(default)]
    pub year: Option<Scalar>,

    /// Abbreviated journal title.
    #[serde(default)]
    pub journal_title: Option<String>,

    /// Journal volume.
    #[serde(default)]
    pub journal_volume: Option<Scalar>,

    /// First page or article number.
    #[serde(default)]
    pub page_start: Option<Scalar>,

    /// Last page.
    #[serde(default)]
    pub page_end: Option<Scalar>,
}

/// Publisher imprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imprint {
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
}

/// A metadata value the service sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Whether the value counts as absent: an empty string or zero.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Float(n) => n.abs() < f64::EPSILON,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
