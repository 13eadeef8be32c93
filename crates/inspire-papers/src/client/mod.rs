//! INSPIRE-HEP REST API client.
//!
//! Provides an async HTTP client with:
//! - Request and connect timeouts from [`Config`]
//! - Page-by-page literature search, newest records first
//! - Status-code mapping onto [`ClientError`]
//!
//! Requests are issued one at a time and never retried.

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::models::{LiteratureSearchResult, Record};

/// Build the INSPIRE search query for all papers of an author.
#[must_use]
pub fn author_query(author_name: &str) -> String {
    format!("a {author_name}")
}

/// INSPIRE-HEP API client.
#[derive(Clone)]
pub struct InspireClient {
    /// HTTP client.
    client: Client,

    /// REST API base URL.
    api_url: String,

    /// Page size cap for literature searches.
    max_page_size: usize,
}

impl InspireClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url: config.api_url, max_page_size: config.max_page_size })
    }

    /// REST API base URL this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Search literature, newest first, collecting up to `max_records` records.
    ///
    /// Pages of `min(max_records, max_page_size)` records are requested in
    /// order until enough records are collected, the reported total is
    /// reached, or a page comes back empty. A short page alone does not stop
    /// paging, since the service may serve fewer records than requested.
    ///
    /// # Errors
    ///
    /// Returns error on the first failed page; records from earlier pages are discarded.
    pub async fn search_literature(&self, query: &str, max_records: usize) -> ClientResult<Vec<Record>> {
        if max_records == 0 {
            return Ok(Vec::new());
        }

        let page_size = max_records.min(self.max_page_size);
        let mut records: Vec<Record> = Vec::new();
        let mut page = 1;

        loop {
            let result = self.search_literature_page(query, page, page_size).await?;
            let total = result.hits.total;
            let hits = result.into_records();
            let received = hits.len();
            records.extend(hits);

            tracing::debug!(page, received, total = ?total, collected = records.len(), "Fetched literature page");

            let total_reached = total.is_some_and(|total| records.len() as u64 >= total);
            if received == 0 || records.len() >= max_records || total_reached {
                break;
            }
            page += 1;
        }

        records.truncate(max_records);
        Ok(records)
    }

    /// Fetch one page of a literature search (pages start at 1).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_literature_page(
        &self,
        query: &str,
        page: usize,
        size: usize,
    ) -> ClientResult<LiteratureSearchResult> {
        let url = format!("{}/literature", self.api_url);

        let params = [
            ("q", query.to_string()),
            ("sort", api::SORT_MOST_RECENT.to_string()),
            ("size", size.to_string()),
            ("page", page.to_string()),
            ("fields", fields::REPORT.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, url: &str, params: &[(&str, String)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(url).query(params).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for InspireClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspireClient")
            .field("api_url", &self.api_url)
            .field("max_page_size", &self.max_page_size)
            .finish()
    }
}
