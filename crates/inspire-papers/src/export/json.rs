//! JSON export.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ExportResult;
use crate::models::OutputRow;

const INDENT: &[u8] = b"    ";

/// Render rows as a pretty-printed JSON array with 4-space indentation.
/// Keys keep column order.
pub fn to_json_string(rows: &[OutputRow]) -> ExportResult<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    rows.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write rows to `path`, replacing any existing file.
pub fn write_json(rows: &[OutputRow], path: &Path) -> ExportResult<()> {
    let json = to_json_string(rows)?;
    fs::write(path, json)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote JSON report");
    Ok(())
}
