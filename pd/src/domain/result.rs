//! Generation result returned to the caller

use serde::{Deserialize, Serialize};

/// Drafts that survived filtering, plus the token estimate for the exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Markdown drafts, in model order
    pub posts: Vec<String>,

    /// Rough token cost of every prompt and response in the exchange
    pub estimated_tokens: u64,
}
