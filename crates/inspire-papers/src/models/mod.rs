//! Data models for INSPIRE-HEP records and the report rows built from them.
//!
//! Input models use `#[serde(default)]` for optional fields; output rows
//! rename every field to its report column header.

mod record;
mod row;
mod search;
mod summary;

pub use record::{AuthorEntry, Imprint, PublicationInfo, Record, Scalar, TitleEntry, ValueEntry};
pub use row::{COLUMN_COUNT, COLUMNS, Flag, LANGUAGE, OutputRow, PUBLISHING_YEAR_COLUMN, Status};
pub use search::{Hit, Hits, LiteratureSearchResult};
pub use summary::RecordSummary;
