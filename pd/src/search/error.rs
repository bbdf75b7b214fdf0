//! Search error types

use thiserror::Error;

/// Errors from the web search collaborator
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Search API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed search response: {0}")]
    Malformed(#[from] serde_json::Error),
}
