//! Prompt Loader
//!
//! Loads prompt templates from an override directory or falls back to
//! embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::domain::GenerationRequest;

/// Variables for the plan template
#[derive(Debug, Clone, Serialize)]
pub struct PlanContext {
    /// Search-derived grounding text (may be empty)
    pub context: String,
    pub topic: String,
    pub tone: String,
    pub audience: String,
    pub length: u32,
}

impl PlanContext {
    pub fn new(request: &GenerationRequest, context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            topic: request.topic.clone(),
            tone: request.tone.to_string(),
            audience: request.audience.to_string(),
            length: request.length,
        }
    }
}

/// Variables for the drafts template
#[derive(Debug, Clone, Serialize)]
pub struct DraftContext {
    /// Raw plan text from the previous turn
    pub plan: String,
    pub post_count: u32,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory
    override_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader that prefers templates in `dir` when it exists
    pub fn new(dir: Option<&Path>) -> Self {
        debug!(?dir, "PromptLoader::new: called");
        let override_dir = dir.filter(|d| d.exists()).map(Path::to_path_buf);
        if dir.is_some() && override_dir.is_none() {
            debug!("PromptLoader::new: override directory missing, using embedded prompts");
        }

        Self {
            hbs: Self::engine(),
            override_dir,
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Self::engine(),
            override_dir: None,
        }
    }

    /// Prompts are plain text; HTML escaping would mangle quotes in the context
    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `{dir}/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        if let Some(ref dir) = self.override_dir {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in override directory");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt override {}: {}", path.display(), e));
            }
            debug!(?path, "PromptLoader::load_template: not found in override directory");
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: found in embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        debug!(%template_name, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;

        self.hbs
            .render_template(&template, context)
            .map(|rendered| rendered.trim_end().to_string())
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Render the plan prompt
    pub fn plan_prompt(&self, context: &PlanContext) -> Result<String> {
        self.render("plan", context)
    }

    /// Render the drafts prompt
    pub fn drafts_prompt(&self, context: &DraftContext) -> Result<String> {
        self.render("drafts", context)
    }
}
