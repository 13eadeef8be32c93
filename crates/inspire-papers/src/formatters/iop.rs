//! IOP publication-report projection.

use super::author_list;
use crate::error::RecordResult;
use crate::models::{Flag, LANGUAGE, OutputRow, PublicationInfo, Record, Scalar, Status};

/// Project a record onto the IOP report columns.
///
/// `author_name` is matched as a substring of the first author's full name
/// to fill "First Author"; "Author for Correspondance" always mirrors it.
///
/// Only an empty `titles` or `authors` list fails. Every optional field
/// falls back to `""` or `None`.
pub fn project(record: &Record, max_authors: usize, author_name: &str) -> RecordResult<OutputRow> {
    let first_author = Flag::from(record.first_author()?.full_name.contains(author_name));
    let title = record.title()?.to_string();

    let publication = record.publication();
    let publishing_year = publication
        .and_then(|p| p.year.as_ref())
        .map(ToString::to_string)
        .unwrap_or_default();
    let imprint_date = record.imprint_date();
    let publishing_month = publishing_month(imprint_date, &publishing_year);

    Ok(OutputRow {
        author_list: author_list(&record.authors, max_authors),
        first_author,
        corresponding_author: first_author,
        publishing_year,
        publishing_month,
        title,
        language: LANGUAGE.to_string(),
        journal_title: publication.and_then(|p| p.journal_title.clone()),
        status: if publication.is_some() { Status::Published } else { Status::Accepted },
        volume_and_pages: publication.map(volume_and_pages).unwrap_or_default(),
        doi: record.doi().map(str::to_string),
        e_print: record.arxiv_eprint().map(str::to_string),
        publication_date: imprint_date.unwrap_or_default().to_string(),
    })
}

/// Project every record, preserving order. Stops at the first failure.
pub fn project_all(
    records: &[Record],
    max_authors: usize,
    author_name: &str,
) -> RecordResult<Vec<OutputRow>> {
    records.iter().map(|record| project(record, max_authors, author_name)).collect()
}

/// Month token of the imprint date, only if its year token matches the
/// publishing year exactly. Any mismatch or malformed date yields `""`.
fn publishing_month(imprint_date: Option<&str>, publishing_year: &str) -> String {
    let Some(date) = imprint_date else {
        return String::new();
    };

    let mut tokens = date.split('-');
    match (tokens.next(), tokens.next()) {
        (Some(year), Some(month))
            if !publishing_year.is_empty() && year.trim() == publishing_year.trim() =>
        {
            month.to_string()
        }
        _ => String::new(),
    }
}

/// "{volume}", "{volume}, {start}" or "{volume}, {start}-{end}".
/// The end page is ignored without a start page.
fn volume_and_pages(info: &PublicationInfo) -> String {
    let volume = info.journal_volume.as_ref().map(ToString::to_string).unwrap_or_default();

    match (non_empty(info.page_start.as_ref()), non_empty(info.page_end.as_ref())) {
        (Some(start), Some(end)) => format!("{volume}, {start}-{end}"),
        (Some(start), None) => format!("{volume}, {start}"),
        (None, _) => volume,
    }
}

fn non_empty(value: Option<&Scalar>) -> Option<&Scalar> {
    value.filter(|v| !v.is_blank())
}
