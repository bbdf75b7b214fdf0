//! Generation request as received from the form or the CLI

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Audience, Tone};

/// Smallest number of drafts a request may ask for
pub const MIN_POST_COUNT: u32 = 3;

/// Word-count target used when the caller leaves `length` out
pub const DEFAULT_LENGTH: u32 = 200;

/// Parameters for one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Subject of the posts; required, non-empty
    pub topic: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub audience: Audience,

    /// Approximate word count per draft
    #[serde(default = "default_length")]
    pub length: u32,

    /// Number of drafts requested
    #[serde(default = "default_post_count")]
    pub post_count: u32,
}

fn default_length() -> u32 {
    DEFAULT_LENGTH
}

fn default_post_count() -> u32 {
    MIN_POST_COUNT
}

impl GenerationRequest {
    /// Create a request with default tone, audience, length and count
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: Tone::default(),
            audience: Audience::default(),
            length: DEFAULT_LENGTH,
            post_count: MIN_POST_COUNT,
        }
    }

    /// Trim the topic and raise `post_count` to the minimum
    pub fn normalized(mut self) -> Self {
        debug!(post_count = %self.post_count, "GenerationRequest::normalized: called");
        self.topic = self.topic.trim().to_string();
        if self.post_count < MIN_POST_COUNT {
            debug!("GenerationRequest::normalized: raising post_count to minimum");
            self.post_count = MIN_POST_COUNT;
        }
        self
    }

    /// True when there is no topic to write about
    pub fn is_topic_empty(&self) -> bool {
        self.topic.trim().is_empty()
    }
}
