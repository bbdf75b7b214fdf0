//! Web search for grounding context
//!
//! The search step is best-effort: [`fetch_context`] never fails, it logs and
//! degrades to an empty context so generation can proceed ungrounded.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

mod error;
mod serper;

pub use error::SearchError;
pub use serper::SerperClient;

/// One organic search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl SearchResult {
    /// Render as a context fragment with its source
    pub fn as_context(&self) -> String {
        format!("{} [Source: {}]", self.snippet, self.link)
    }
}

/// A web search collaborator
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one query and return results in rank order
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Search for `query` and fold the top `max_results` hits into one string
///
/// Any failure yields an empty string.
pub async fn fetch_context(client: &dyn SearchClient, query: &str, max_results: usize) -> String {
    debug!(%query, %max_results, "fetch_context: called");
    match client.search(query).await {
        Ok(results) => {
            debug!(result_count = %results.len(), "fetch_context: search succeeded");
            results
                .iter()
                .take(max_results)
                .map(SearchResult::as_context)
                .collect::<Vec<_>>()
                .join(" ")
        }
        Err(e) => {
            warn!(error = %e, "Search failed, proceeding without context");
            String::new()
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Canned search collaborator for unit tests
    pub struct MockSearchClient {
        results: Option<Vec<SearchResult>>,
    }

    impl MockSearchClient {
        pub fn with_results(results: Vec<SearchResult>) -> Self {
            Self { results: Some(results) }
        }

        pub fn failing() -> Self {
            Self { results: None }
        }
    }

    #[async_trait]
    impl SearchClient for MockSearchClient {
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, SearchError> {
            match &self.results {
                Some(results) => Ok(results.clone()),
                None => Err(SearchError::ApiError {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    pub fn hit(n: usize) -> SearchResult {
        SearchResult {
            title: format!("Title {}", n),
            snippet: format!("Snippet {}", n),
            link: format!("https://example.com/{}", n),
        }
    }
}
