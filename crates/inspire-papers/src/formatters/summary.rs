//! Compact summary projection.

use super::author_list;
use crate::error::RecordResult;
use crate::models::{Record, RecordSummary};

/// arXiv abstract page prefix.
const ARXIV_ABS_URL: &str = "https://arxiv.org/abs/";

/// Summarize a record: title, authors, identifiers and journal details.
pub fn summarize(record: &Record, max_authors: usize) -> RecordResult<RecordSummary> {
    let title = record.title()?.to_string();
    let publication = record.publication();
    let arxiv_eprint = record.arxiv_eprint().map(str::to_string);

    Ok(RecordSummary {
        title,
        authors: author_list(&record.authors, max_authors),
        collaboration: record.collaboration().map(str::to_string),
        url: arxiv_eprint.as_ref().map(|id| format!("{ARXIV_ABS_URL}{id}")),
        arxiv_eprint,
        creation_date: record.legacy_creation_date.clone(),
        journal_title: publication.and_then(|p| p.journal_title.clone()),
        journal_volume: publication.and_then(|p| p.journal_volume.as_ref()).map(ToString::to_string),
        page_start: publication.and_then(|p| p.page_start.as_ref()).map(ToString::to_string),
        journal_year: publication.and_then(|p| p.year.as_ref()).map(ToString::to_string),
        doi: record.doi().map(str::to_string),
    })
}
