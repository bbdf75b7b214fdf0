//! LlmClient trait definition and conversational session

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmError, Message};

/// Stateless LLM client - each call carries the whole conversation
///
/// Conversation state lives in [`ChatSession`], which resends its history
/// on every turn. Implementations hold only configuration and an HTTP client,
/// so one instance is shared by every request the server handles.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a completion request and wait for the full reply
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}

/// A multi-turn conversation over a shared client
///
/// Each `send` appends the prompt, asks the client for a reply with the full
/// history, and appends the reply. A failed turn leaves the history as it was.
pub struct ChatSession {
    client: Arc<dyn LlmClient>,
    history: Vec<Message>,
    max_tokens: u32,
}

impl ChatSession {
    /// Start an empty conversation
    pub fn new(client: Arc<dyn LlmClient>, max_tokens: u32) -> Self {
        debug!(model = %client.model(), %max_tokens, "ChatSession::new: called");
        Self {
            client,
            history: Vec::new(),
            max_tokens,
        }
    }

    /// Send one prompt and return the reply text
    pub async fn send(&mut self, prompt: impl Into<String>) -> Result<String, LlmError> {
        let prompt = prompt.into();
        debug!(prompt_len = %prompt.len(), turn = %self.history.len(), "ChatSession::send: called");
        self.history.push(Message::user(prompt));

        let request = CompletionRequest {
            messages: self.history.clone(),
            max_tokens: self.max_tokens,
        };

        match self.client.complete(request).await {
            Ok(response) => {
                debug!(
                    content_len = %response.content.len(),
                    finish_reason = ?response.finish_reason,
                    usage_total = %response.usage.total(),
                    "ChatSession::send: reply received"
                );
                self.history.push(Message::model(response.content.clone()));
                Ok(response.content)
            }
            Err(e) => {
                debug!(error = %e, "ChatSession::send: completion failed, rolling back prompt");
                self.history.pop();
                Err(e)
            }
        }
    }

    /// Conversation so far
    pub fn history(&self) -> &[Message] {
        &self.history
    }
}
