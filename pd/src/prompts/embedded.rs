//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Post structure plan prompt
pub const PLAN: &str = include_str!("../../prompts/plan.pmt");

/// Draft expansion prompt
pub const DRAFTS: &str = include_str!("../../prompts/drafts.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "plan" => Some(PLAN),
        "drafts" => Some(DRAFTS),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_plan() {
        let plan = get_embedded("plan").unwrap();
        assert!(plan.contains("{{context}}"));
        assert!(plan.contains("{{topic}}"));
        assert!(plan.contains("hook, key points, CTA, hashtags"));
    }

    #[test]
    fn test_get_embedded_drafts() {
        let drafts = get_embedded("drafts").unwrap();
        assert!(drafts.contains("{{plan}}"));
        assert!(drafts.contains("{{post_count}}"));
        assert!(drafts.contains("\n\n---\n\n"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }
}
