//! Banned-substring content filter

use tracing::debug;

/// Drops drafts containing any banned substring, case-insensitively
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Lowercased banned substrings
    banned: Vec<String>,
}

impl ContentFilter {
    /// Build a filter; blank entries are ignored since they would match everything
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        debug!(banned_count = %banned.len(), "ContentFilter::new: called");
        Self { banned }
    }

    /// True when the draft contains none of the banned substrings
    pub fn is_allowed(&self, draft: &str) -> bool {
        let lowered = draft.to_lowercase();
        !self.banned.iter().any(|word| lowered.contains(word.as_str()))
    }

    /// Keep allowed drafts in order, then cap the list at `max`
    pub fn apply(&self, drafts: Vec<String>, max: usize) -> Vec<String> {
        debug!(draft_count = %drafts.len(), %max, "ContentFilter::apply: called");
        let kept: Vec<String> = drafts.into_iter().filter(|d| self.is_allowed(d)).take(max).collect();
        debug!(kept_count = %kept.len(), "ContentFilter::apply: done");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_removes_banned_case_insensitive() {
        let filter = ContentFilter::new(["profanity1", "Profanity2"]);

        let kept = filter.apply(
            drafts(&["clean post", "this has PROFANITY1 in it", "another clean one", "xxprofanity2xx"]),
            10,
        );

        assert_eq!(kept, drafts(&["clean post", "another clean one"]));
    }

    #[test]
    fn test_truncates_to_max() {
        let filter = ContentFilter::new(["banned"]);

        let kept = filter.apply(drafts(&["a", "b", "c", "d", "e"]), 3);
        assert_eq!(kept, drafts(&["a", "b", "c"]));
    }

    #[test]
    fn test_truncation_counts_only_survivors() {
        let filter = ContentFilter::new(["bad"]);

        let kept = filter.apply(drafts(&["bad one", "a", "bad two", "b", "c", "d"]), 3);
        assert_eq!(kept, drafts(&["a", "b", "c"]));
    }

    #[test]
    fn test_may_return_fewer_than_max() {
        let filter = ContentFilter::new(["bad"]);

        let kept = filter.apply(drafts(&["bad", "BAD", "fine"]), 3);
        assert_eq!(kept, drafts(&["fine"]));
    }

    #[test]
    fn test_blank_words_ignored() {
        let filter = ContentFilter::new(["", "   "]);

        assert!(filter.is_allowed("anything at all"));
    }
}
