//! Gemini generate-content API client implementation
//!
//! Implements the LlmClient trait over the `models/{model}:generateContent`
//! REST endpoint. Conversation history is mapped onto `contents`, output
//! limits onto `generationConfig`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{CompletionRequest, CompletionResponse, FinishReason, LlmClient, LlmError, TokenUsage};
use crate::config::LlmConfig;

/// Gemini API client
pub struct GeminiClient {
    config: LlmConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// The API key is not read here; it is looked up on every request.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, base_url = %config.base_url, "from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            config: config.clone(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the request body for the generate-content API
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(model = %self.config.model, message_count = %request.messages.len(), "build_request_body: called");
        let contents: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "parts": [{ "text": m.text }],
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": request.max_tokens.min(self.config.max_tokens),
            },
        })
    }

    /// Parse the generate-content API response
    fn parse_response(&self, api_response: GeminiResponse) -> Result<CompletionResponse, LlmError> {
        debug!(candidate_count = %api_response.candidates.len(), "parse_response: called");
        let usage = api_response
            .usage_metadata
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        let Some(candidate) = api_response.candidates.into_iter().next() else {
            if let Some(reason) = api_response.prompt_feedback.and_then(|f| f.block_reason) {
                debug!(%reason, "parse_response: prompt blocked");
                return Err(LlmError::Blocked(reason));
            }
            return Err(LlmError::InvalidResponse("No candidates in response".to_string()));
        };

        let finish_reason = candidate
            .finish_reason
            .as_deref()
            .map(FinishReason::from_gemini)
            .unwrap_or(FinishReason::Stop);

        let content: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if content.is_empty() {
            if finish_reason == FinishReason::Safety {
                return Err(LlmError::Blocked("candidate withheld by safety filter".to_string()));
            }
            return Err(LlmError::InvalidResponse("Candidate has no text".to_string()));
        }

        if finish_reason == FinishReason::MaxTokens {
            warn!(max_tokens = %self.config.max_tokens, "parse_response: reply truncated at max output tokens");
        }

        Ok(CompletionResponse {
            content,
            finish_reason,
            usage,
        })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(model = %self.config.model, %request.max_tokens, "complete: called");
        let api_key = self
            .config
            .get_api_key()
            .map_err(|e| LlmError::MissingApiKey(e.to_string()))?;

        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            debug!(status = %status.as_u16(), %message, "complete: API error");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        debug!("complete: success");
        let text = response.text().await?;
        let api_response: GeminiResponse = serde_json::from_str(&text)?;
        self.parse_response(api_response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}
