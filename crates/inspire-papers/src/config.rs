//! Configuration for the INSPIRE-HEP report exporter.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the INSPIRE-HEP REST API.
    pub const BASE_URL: &str = "https://inspirehep.net/api";

    /// Request timeout. A 1000-record page can take a while to render server-side.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Largest page the literature endpoint will serve.
    pub const MAX_PAGE_SIZE: usize = 1000;

    /// Sort order for literature searches (newest first).
    pub const SORT_MOST_RECENT: &str = "mostrecent";
}

/// Record field sets requested from the literature endpoint.
pub mod fields {
    /// Everything the IOP projection and the summary read.
    pub const REPORT: &[&str] = &[
        "titles.title",
        "authors.full_name",
        "collaborations.value",
        "arxiv_eprints.value",
        "legacy_creation_date",
        "publication_info",
        "dois.value",
        "imprints.date",
    ];
}

/// Fixed report parameters.
pub mod report {
    /// Author whose publications are exported. Also the substring matched
    /// against the first author for the "First Author" column.
    pub const AUTHOR_NAME: &str = "Fedynitch";

    /// Authors listed per row before the list is cut with "et. al.".
    pub const MAX_AUTHORS: usize = 10;

    /// Records fetched from the service.
    pub const MAX_RECORDS: usize = 1000;

    /// JSON output file name.
    pub const JSON_FILE: &str = "papers.json";

    /// Excel output file name.
    pub const XLSX_FILE: &str = "papers.xlsx";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the REST API (overridable for mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Page size cap for literature searches.
    pub max_page_size: usize,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_page_size: api::MAX_PAGE_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_page_size: api::MAX_PAGE_SIZE,
        }
    }

    /// Override the page size cap.
    #[must_use]
    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Author searched for and matched as first author.
    pub author_name: String,

    /// Authors listed per row.
    pub max_authors: usize,

    /// Records fetched.
    pub max_records: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            author_name: report::AUTHOR_NAME.to_string(),
            max_authors: report::MAX_AUTHORS,
            max_records: report::MAX_RECORDS,
        }
    }
}
