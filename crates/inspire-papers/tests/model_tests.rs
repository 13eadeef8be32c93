//! Unit tests for data models.

use inspire_papers::models::*;

// =============================================================================
// Search Envelope Tests
// =============================================================================

#[test]
fn test_search_result_from_fixture() {
    let json = include_str!("fixtures/literature_search.json");
    let result: LiteratureSearchResult = serde_json::from_str(json).unwrap();

    assert_eq!(result.hits.total, Some(3));
    let records = result.into_records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title().unwrap(), "Data-driven muon-calibrated neutrino flux");
    assert_eq!(records[1].collaboration(), Some("IceCube"));
    assert!(records[2].publication().is_none());
}

#[test]
fn test_search_result_without_hits() {
    let result: LiteratureSearchResult = serde_json::from_str("{}").unwrap();
    assert_eq!(result.hits.total, None);
    assert!(result.into_records().is_empty());
}

// =============================================================================
// Record Deserialization Tests
// =============================================================================

#[test]
fn test_record_minimal() {
    let json = r#"{"titles": [{"title": "T"}], "authors": [{"full_name": "Doe, J."}]}"#;
    let record: Record = serde_json::from_str(json).unwrap();

    assert_eq!(record.title().unwrap(), "T");
    assert_eq!(record.first_author().unwrap().full_name, "Doe, J.");
    assert!(record.publication().is_none());
    assert!(record.imprint_date().is_none());
    assert!(record.doi().is_none());
    assert!(record.arxiv_eprint().is_none());
    assert!(record.legacy_creation_date.is_none());
}

#[test]
fn test_record_without_titles_fails() {
    let json = r#"{"authors": [{"full_name": "Doe, J."}]}"#;
    assert!(serde_json::from_str::<Record>(json).is_err());
}

#[test]
fn test_record_without_authors_fails() {
    let json = r#"{"titles": [{"title": "T"}]}"#;
    assert!(serde_json::from_str::<Record>(json).is_err());
}

#[test]
fn test_record_ignores_unknown_fields() {
    let json = r#"{
        "titles": [{"title": "T", "source": "arXiv"}],
        "authors": [{"full_name": "Doe, J.", "affiliations": [{"value": "DESY"}]}],
        "citation_count": 42,
        "document_type": ["article"]
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.authors.len(), 1);
}

#[test]
fn test_publication_info_year_as_number_or_string() {
    let json = r#"{
        "titles": [{"title": "T"}],
        "authors": [{"full_name": "A"}],
        "publication_info": [{"year": 2021, "journal_volume": 12, "page_start": "L7"}]
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    let info = record.publication().unwrap();

    assert_eq!(info.year, Some(Scalar::Integer(2021)));
    assert_eq!(info.journal_volume.as_ref().unwrap().to_string(), "12");
    assert_eq!(info.page_start, Some(Scalar::from("L7")));
}

#[test]
fn test_value_entry_without_value() {
    let json = r#"{
        "titles": [{"title": "T"}],
        "authors": [{"full_name": "A"}],
        "dois": [{"source": "publisher"}]
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert!(record.doi().is_none());
}

#[test]
fn test_only_first_entries_are_used() {
    let json = r#"{
        "titles": [{"title": "First"}, {"title": "Second"}],
        "authors": [{"full_name": "A"}],
        "dois": [{"value": "10.1/first"}, {"value": "10.1/second"}],
        "imprints": [{"date": "2020-01"}, {"date": "2021-02"}]
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();

    assert_eq!(record.title().unwrap(), "First");
    assert_eq!(record.doi(), Some("10.1/first"));
    assert_eq!(record.imprint_date(), Some("2020-01"));
}
