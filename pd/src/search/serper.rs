//! Serper web search client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{SearchClient, SearchError, SearchResult};
use crate::config::SearchConfig;

/// Serper API client
pub struct SerperClient {
    config: SearchConfig,
    http: Client,
}

impl SerperClient {
    /// Create a new client from configuration
    ///
    /// The API key is read on every search, not here.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        debug!(base_url = %config.base_url, "SerperClient::from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            config: config.clone(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchClient for SerperClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        debug!(%query, "SerperClient::search: called");
        let api_key = self
            .config
            .get_api_key()
            .map_err(|e| SearchError::MissingApiKey(e.to_string()))?;

        let response = self
            .http
            .post(self.endpoint())
            .header("X-API-KEY", api_key)
            .header("content-type", "application/json")
            .json(&serde_json::json!({ "q": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = %status.as_u16(), "SerperClient::search: API error");
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_results(&body)
    }
}

/// Pull organic results out of a Serper response body
///
/// Hits without a snippet carry nothing to ground on and are skipped.
fn parse_results(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let parsed: SerperResponse = serde_json::from_str(body)?;
    debug!(organic_count = %parsed.organic.len(), "parse_results: parsed");

    Ok(parsed
        .organic
        .into_iter()
        .filter_map(|o| {
            let snippet = o.snippet.filter(|s| !s.trim().is_empty())?;
            Some(SearchResult {
                title: o.title.unwrap_or_default(),
                snippet,
                link: o.link.unwrap_or_default(),
            })
        })
        .collect())
}

// Serper API response types

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}
