//! Post generation pipeline
//!
//! One generation runs three sequential external calls:
//!
//! 1. web search for grounding context (best-effort, see [`crate::search`])
//! 2. plan prompt, in a fresh chat session
//! 3. drafts prompt, in the same session so the model sees its plan
//!
//! The drafts reply is split, costed and filtered before it is returned.

use std::sync::Arc;

use thiserror::Error;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

mod drafts;
mod filter;
mod tokens;

pub use drafts::{DRAFT_DELIMITER, split_drafts};
pub use filter::ContentFilter;
pub use tokens::{TOKENS_PER_WORD, estimate_tokens};

use crate::config::Config;
use crate::domain::{GenerationRequest, GenerationResult};
use crate::llm::{ChatSession, LlmClient, LlmError, create_client};
use crate::prompts::{DraftContext, PlanContext, PromptLoader};
use crate::search::{SearchClient, SerperClient, fetch_context};

/// Errors that abort a generation
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Topic is required")]
    EmptyTopic,

    #[error("Failed to render {template} prompt: {message}")]
    Prompt { template: &'static str, message: String },

    #[error("Language model failed during {step}: {source}")]
    Llm {
        step: &'static str,
        #[source]
        source: LlmError,
    },
}

impl GenerateError {
    /// HTTP status from the model provider, when it was the one that failed
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GenerateError::Llm { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// Orchestrates search, planning, drafting and filtering
pub struct PostGenerator {
    llm: Arc<dyn LlmClient>,
    search: Arc<dyn SearchClient>,
    prompts: PromptLoader,
    filter: ContentFilter,
    /// Output token cap for each chat turn
    max_tokens: u32,
    /// Search hits folded into the context
    max_results: usize,
}

impl PostGenerator {
    /// Assemble a generator from its collaborators
    pub fn new(
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn SearchClient>,
        prompts: PromptLoader,
        filter: ContentFilter,
    ) -> Self {
        let defaults = Config::default();
        Self {
            llm,
            search,
            prompts,
            filter,
            max_tokens: defaults.llm.max_tokens,
            max_results: defaults.search.max_results,
        }
    }

    /// Build the production generator: Gemini, Serper, configured prompts and filter
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        debug!("PostGenerator::from_config: called");
        let llm = create_client(&config.llm)?;
        let search = Arc::new(SerperClient::from_config(&config.search)?);
        let prompts = PromptLoader::new(config.prompts.dir.as_deref());
        let filter = ContentFilter::new(&config.filter.banned_words);

        Ok(Self::new(llm, search, prompts, filter).with_limits(config.llm.max_tokens, config.search.max_results))
    }

    /// Override the per-turn token cap and the number of search hits used
    pub fn with_limits(mut self, max_tokens: u32, max_results: usize) -> Self {
        self.max_tokens = max_tokens;
        self.max_results = max_results;
        self
    }

    /// Run one generation
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, GenerateError> {
        let span = info_span!("generate", request_id = %Uuid::now_v7());
        self.run(request.normalized()).instrument(span).await
    }

    async fn run(&self, request: GenerationRequest) -> Result<GenerationResult, GenerateError> {
        debug!(?request, "PostGenerator::run: called");
        if request.is_topic_empty() {
            debug!("PostGenerator::run: empty topic, rejecting before any network call");
            return Err(GenerateError::EmptyTopic);
        }

        let context = fetch_context(self.search.as_ref(), &request.topic, self.max_results).await;
        debug!(context_len = %context.len(), "PostGenerator::run: context fetched");

        let plan_prompt = self
            .prompts
            .plan_prompt(&PlanContext::new(&request, context))
            .map_err(|e| GenerateError::Prompt {
                template: "plan",
                message: format!("{e:#}"),
            })?;

        let mut chat = ChatSession::new(self.llm.clone(), self.max_tokens);
        let plan = chat
            .send(plan_prompt.clone())
            .await
            .map_err(|source| GenerateError::Llm { step: "plan", source })?;
        debug!(plan_len = %plan.len(), "PostGenerator::run: plan received");

        let drafts_prompt = self
            .prompts
            .drafts_prompt(&DraftContext {
                plan: plan.clone(),
                post_count: request.post_count,
            })
            .map_err(|e| GenerateError::Prompt {
                template: "drafts",
                message: format!("{e:#}"),
            })?;

        let raw = chat
            .send(drafts_prompt.clone())
            .await
            .map_err(|source| GenerateError::Llm { step: "drafts", source })?;

        let drafts = split_drafts(&raw);
        let estimated_tokens = estimate_tokens(
            [plan_prompt.as_str(), plan.as_str(), drafts_prompt.as_str()]
                .into_iter()
                .chain(drafts.iter().map(String::as_str)),
        );

        let drafted = drafts.len();
        let posts = self.filter.apply(drafts, request.post_count as usize);

        info!(
            topic = %request.topic,
            requested = %request.post_count,
            %drafted,
            returned = %posts.len(),
            %estimated_tokens,
            "Generated post drafts"
        );

        Ok(GenerationResult {
            posts,
            estimated_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockLlmClient;
    use crate::search::mock::{MockSearchClient, hit};

    const PLAN: &str = "Hook: work from anywhere. Key points: focus, flexibility. CTA: share. #RemoteWork";

    fn three_drafts() -> String {
        [
            "**Post 1: Focus**\nHeadline: Deep work\nBody: Quiet homes help. #RemoteWork",
            "**Post 2: Flexibility**\nHeadline: Own your hours\nBody: Async wins. #FutureOfWork",
            "**Post 3: Culture**\nHeadline: Remote rituals\nBody: Keep the coffee chats. #Teams",
        ]
        .join(DRAFT_DELIMITER)
    }

    fn generator(llm: Arc<MockLlmClient>, search: MockSearchClient, banned: &[&str]) -> PostGenerator {
        PostGenerator::new(
            llm,
            Arc::new(search),
            PromptLoader::embedded_only(),
            ContentFilter::new(banned),
        )
    }

    #[tokio::test]
    async fn test_generate_remote_work() {
        let drafts = three_drafts();
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, drafts.as_str()]));
        let generator = generator(llm.clone(), MockSearchClient::with_results(vec![hit(1), hit(2), hit(3)]), &[]);

        let result = generator.generate(GenerationRequest::new("remote work")).await.unwrap();

        assert_eq!(result.posts.len(), 3);
        assert!(result.posts.iter().all(|p| !p.trim().is_empty()));
        assert!(result.estimated_tokens > 0);
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_plan_prompt_carries_context_and_drafts_see_plan() {
        let drafts = three_drafts();
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, drafts.as_str()]));
        let generator = generator(llm.clone(), MockSearchClient::with_results(vec![hit(1), hit(2), hit(3)]), &[]);

        generator.generate(GenerationRequest::new("remote work")).await.unwrap();

        let requests = llm.requests();
        let plan_prompt = &requests[0].messages[0].text;
        assert!(plan_prompt.contains("Snippet 1 [Source: https://example.com/1]"));
        assert!(plan_prompt.contains("Snippet 2 [Source: https://example.com/2]"));
        assert!(!plan_prompt.contains("Snippet 3"));

        let second = &requests[1].messages;
        assert_eq!(second.len(), 3);
        assert_eq!(second[1].text, PLAN);
        assert!(second[2].text.contains(PLAN));
        assert!(second[2].text.contains("generate 3 unique"));
    }

    #[tokio::test]
    async fn test_search_failure_still_generates() {
        let drafts = three_drafts();
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, drafts.as_str()]));
        let generator = generator(llm.clone(), MockSearchClient::failing(), &[]);

        let result = generator.generate(GenerationRequest::new("remote work")).await.unwrap();

        assert_eq!(result.posts.len(), 3);
        assert!(llm.requests()[0].messages[0].text.starts_with("Using this context: \"\""));
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_before_calls() {
        let llm = Arc::new(MockLlmClient::new(vec![PLAN]));
        let generator = generator(llm.clone(), MockSearchClient::failing(), &[]);

        let result = generator.generate(GenerationRequest::new("   ")).await;

        assert!(matches!(result, Err(GenerateError::EmptyTopic)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_never_more_than_post_count() {
        let five = (1..=5)
            .map(|n| format!("**Post {}: Angle**\nBody {}", n, n))
            .collect::<Vec<_>>()
            .join(DRAFT_DELIMITER);
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, five.as_str()]));
        let generator = generator(llm, MockSearchClient::with_results(vec![]), &[]);

        let mut request = GenerationRequest::new("remote work");
        request.post_count = 4;
        let result = generator.generate(request).await.unwrap();

        assert_eq!(result.posts.len(), 4);
        assert!(result.posts[3].starts_with("**Post 4"));
    }

    #[tokio::test]
    async fn test_post_count_below_minimum_is_raised() {
        let drafts = three_drafts();
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, drafts.as_str()]));
        let generator = generator(llm.clone(), MockSearchClient::with_results(vec![]), &[]);

        let mut request = GenerationRequest::new("remote work");
        request.post_count = 1;
        let result = generator.generate(request).await.unwrap();

        assert_eq!(result.posts.len(), 3);
        assert!(llm.requests()[1].messages[2].text.contains("generate 3 unique"));
    }

    #[tokio::test]
    async fn test_banned_drafts_filtered() {
        let drafts = [
            "**Post 1**\nclean",
            "**Post 2**\nthis one says PROFANITY1",
            "**Post 3**\nalso clean",
        ]
        .join(DRAFT_DELIMITER);
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, drafts.as_str()]));
        let generator = generator(llm, MockSearchClient::with_results(vec![]), &["profanity1"]);

        let result = generator.generate(GenerationRequest::new("remote work")).await.unwrap();

        assert_eq!(result.posts, vec!["**Post 1**\nclean", "**Post 3**\nalso clean"]);
    }

    #[tokio::test]
    async fn test_token_estimate_counts_prompts_and_replies() {
        let drafts = three_drafts();
        let llm = Arc::new(MockLlmClient::new(vec![PLAN, drafts.as_str()]));
        let generator = generator(llm.clone(), MockSearchClient::with_results(vec![]), &[]);

        let result = generator.generate(GenerationRequest::new("remote work")).await.unwrap();

        let requests = llm.requests();
        let plan_prompt = requests[0].messages[0].text.as_str();
        let drafts_prompt = requests[1].messages[2].text.as_str();
        let split = split_drafts(&drafts);
        let expected = estimate_tokens(
            [plan_prompt, PLAN, drafts_prompt]
                .into_iter()
                .chain(split.iter().map(String::as_str)),
        );
        assert_eq!(result.estimated_tokens, expected);
    }

    #[tokio::test]
    async fn test_llm_failure_reports_step() {
        let llm = Arc::new(MockLlmClient::with_results(vec![
            Ok(PLAN.to_string()),
            Err("overloaded".to_string()),
        ]));
        let generator = generator(llm, MockSearchClient::with_results(vec![]), &[]);

        let result = generator.generate(GenerationRequest::new("remote work")).await;

        assert!(matches!(result, Err(GenerateError::Llm { step: "drafts", .. })));
    }

    #[tokio::test]
    async fn test_upstream_status_reported() {
        let llm = Arc::new(MockLlmClient::with_results(vec![Err("overloaded".to_string())]));
        let generator = generator(llm, MockSearchClient::with_results(vec![]), &[]);

        let err = generator.generate(GenerationRequest::new("remote work")).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(500));
        assert_eq!(GenerateError::EmptyTopic.upstream_status(), None);
    }
}
