//! Stack Exchange search HTTP client.
//!
//! Queries the public search endpoint by title relevance and keeps the
//! top results in provider order.

use serde::Deserialize;
use tracing::debug;

use crate::analysis::model::{ErrorReport, SearchLink, MAX_LINKS};
use crate::config::Config;
use crate::error::FetchError;

/// Client for the Stack Exchange search API.
#[derive(Clone)]
pub struct SearchClient {
    url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    title: String,
    link: String,
}

impl SearchClient {
    /// Create a client from loaded configuration.
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            url: config.search_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Search Stack Overflow questions whose title matches the report.
    /// Returns at most [`MAX_LINKS`] results in provider relevance order.
    pub async fn related(&self, report: &ErrorReport) -> Result<Vec<SearchLink>, FetchError> {
        debug!(url = %self.url, "Searching Stack Overflow");

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("order", "desc"),
                ("sort", "relevance"),
                ("intitle", report.as_str()),
                ("site", "stackoverflow"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        let links = take_top(body.items);
        debug!(count = links.len(), "Search results received");
        Ok(links)
    }
}

/// Project provider items to links, keeping the first [`MAX_LINKS`] in
/// the order the provider ranked them.
fn take_top(items: Vec<SearchItem>) -> Vec<SearchLink> {
    items
        .into_iter()
        .take(MAX_LINKS)
        .map(|item| SearchLink {
            title: item.title,
            link: item.link,
        })
        .collect()
}
