//! Report pipeline: fetch, project, write.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::client::{InspireClient, author_query};
use crate::config::{ReportSettings, report};
use crate::export::{write_json, write_xlsx};
use crate::formatters::project_all;

/// Files produced by one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Number of rows written to each file.
    pub rows: usize,

    /// Path of the JSON report.
    pub json_path: PathBuf,

    /// Path of the Excel report.
    pub xlsx_path: PathBuf,
}

/// Directory holding the running executable. Reports land here regardless
/// of the directory the program is started from.
pub fn program_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable path has no parent directory")
}

/// Fetch the author's records and write `papers.json` and `papers.xlsx`
/// into `output_dir`.
///
/// Any failure aborts the run; files already written are left in place.
pub async fn generate_report(
    client: &InspireClient,
    settings: &ReportSettings,
    output_dir: &Path,
) -> anyhow::Result<ReportOutcome> {
    let query = author_query(&settings.author_name);
    tracing::info!(query = %query, max_records = settings.max_records, "Searching literature");

    let records = client
        .search_literature(&query, settings.max_records)
        .await
        .with_context(|| format!("literature search for '{query}' failed"))?;

    tracing::info!(records = records.len(), "Fetched records");

    let rows = project_all(&records, settings.max_authors, &settings.author_name)
        .context("failed to project records")?;

    let json_path = output_dir.join(report::JSON_FILE);
    write_json(&rows, &json_path)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    let xlsx_path = output_dir.join(report::XLSX_FILE);
    write_xlsx(&rows, &xlsx_path)
        .with_context(|| format!("failed to write {}", xlsx_path.display()))?;

    tracing::info!(
        rows = rows.len(),
        json = %json_path.display(),
        xlsx = %xlsx_path.display(),
        "Report written"
    );

    Ok(ReportOutcome { rows: rows.len(), json_path, xlsx_path })
}
