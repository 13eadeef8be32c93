//! Record projections: the IOP report row and the compact summary.

mod iop;
mod summary;

pub use iop::{project, project_all};
pub use summary::summarize;

use crate::models::AuthorEntry;

/// Separator between author names.
pub const AUTHOR_SEPARATOR: &str = "; ";

/// Marker appended when the author list is cut.
pub const ET_AL: &str = "et. al.";

/// Join author names with `"; "`, keeping at most `max_authors` and
/// appending [`ET_AL`] when some were dropped.
#[must_use]
pub fn author_list(authors: &[AuthorEntry], max_authors: usize) -> String {
    let mut names: Vec<&str> =
        authors.iter().take(max_authors).map(|a| a.full_name.as_str()).collect();

    if authors.len() > max_authors {
        names.push(ET_AL);
    }

    names.join(AUTHOR_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(n: usize) -> Vec<AuthorEntry> {
        (0..n).map(|i| AuthorEntry::new(format!("Author {i}"))).collect()
    }

    #[test]
    fn test_author_list_within_limit() {
        assert_eq!(author_list(&authors(2), 10), "Author 0; Author 1");
    }

    #[test]
    fn test_author_list_at_limit_has_no_marker() {
        assert_eq!(author_list(&authors(3), 3), "Author 0; Author 1; Author 2");
    }

    #[test]
    fn test_author_list_over_limit() {
        assert_eq!(author_list(&authors(4), 2), "Author 0; Author 1; et. al.");
    }

    #[test]
    fn test_author_list_zero_limit() {
        assert_eq!(author_list(&authors(1), 0), "et. al.");
    }
}
