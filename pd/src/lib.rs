//! postdraft - search-grounded LinkedIn post drafts
//!
//! postdraft turns a topic into several post drafts by chaining two external
//! services: a web search for grounding snippets, then a generative language
//! model asked first for a post plan and then, in the same conversation, for
//! the drafts themselves.
//!
//! # Modules
//!
//! - [`generator`] - The search → plan → drafts → filter pipeline
//! - [`llm`] - LLM client trait, chat session and Gemini implementation
//! - [`search`] - Search client trait, Serper implementation, context fetch
//! - [`prompts`] - Handlebars prompt templates with file overrides
//! - [`server`] - HTTP endpoint and embedded form UI
//! - [`export`] - Paginated plain-text export
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod search;
pub mod server;

// Re-export commonly used types
pub use config::{Config, LlmConfig, SearchConfig};
pub use domain::{Audience, GenerationRequest, GenerationResult, Tone};
pub use generator::{ContentFilter, GenerateError, PostGenerator, estimate_tokens, split_drafts};
pub use llm::{ChatSession, GeminiClient, LlmClient, LlmError, create_client};
pub use prompts::PromptLoader;
pub use search::{SearchClient, SearchError, SearchResult, SerperClient, fetch_context};
