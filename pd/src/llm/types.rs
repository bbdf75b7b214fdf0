//! LLM request/response types for postdraft
//!
//! These model a conversational generate-content API: the full user/model
//! history is sent with every request, and one text reply comes back.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A completion request - the conversation so far plus output limits
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation history, oldest first; the last entry is the new prompt
    pub messages: Vec<Message>,

    /// Max output tokens for the reply (from config)
    pub max_tokens: u32,
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        debug!("Message::user: called");
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create a model (assistant) message
    pub fn model(text: impl Into<String>) -> Self {
        debug!("Message::model: called");
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Wire name used by the generate-content API
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Reply text
    pub content: String,

    /// Why the model stopped
    pub finish_reason: FinishReason,

    /// Provider-reported token usage
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// Plain text reply with defaults for everything else
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            usage: TokenUsage::default(),
        }
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other(String),
}

impl FinishReason {
    /// Parse from the API `finishReason` string
    pub fn from_gemini(s: &str) -> Self {
        debug!(%s, "FinishReason::from_gemini: called");
        match s {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::MaxTokens,
            "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" => FinishReason::Safety,
            other => {
                debug!(%other, "FinishReason::from_gemini: unrecognized reason");
                FinishReason::Other(other.to_string())
            }
        }
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.output_tokens
    }
}
