//! Integration tests against the live INSPIRE-HEP API.
//!
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use inspire_papers::client::{InspireClient, author_query};
use inspire_papers::config::{Config, report};
use inspire_papers::formatters::project_all;

fn create_client() -> InspireClient {
    InspireClient::new(Config::default()).expect("Failed to create client")
}

#[tokio::test]
async fn test_search_author_returns_records() {
    let client = create_client();
    let records = client
        .search_literature(&author_query(report::AUTHOR_NAME), 25)
        .await
        .expect("Search should succeed");

    assert!(!records.is_empty(), "Author should have papers");
    assert!(records.len() <= 25);
}

#[tokio::test]
async fn test_live_records_project_cleanly() {
    let client = create_client();
    let records = client
        .search_literature(&author_query(report::AUTHOR_NAME), 50)
        .await
        .expect("Search should succeed");

    let rows = project_all(&records, report::MAX_AUTHORS, report::AUTHOR_NAME)
        .expect("Live records should carry titles and authors");
    assert_eq!(rows.len(), records.len());
}
