//! Token cost estimate
//!
//! A word-count heuristic, not a tokenizer: whitespace-delimited words times
//! [`TOKENS_PER_WORD`], rounded.

use tracing::debug;

/// Average tokens per English word
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Estimate tokens across every prompt and reply in an exchange
///
/// Words are counted per piece and summed, so two pieces never merge their
/// boundary words into one the way concatenating them first would.
pub fn estimate_tokens<'a>(texts: impl IntoIterator<Item = &'a str>) -> u64 {
    let words: usize = texts.into_iter().map(|t| t.split_whitespace().count()).sum();
    let estimate = (words as f64 * TOKENS_PER_WORD).round() as u64;
    debug!(%words, %estimate, "estimate_tokens: done");
    estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_estimate_simple() {
        // 10 words * 1.3 = 13
        assert_eq!(estimate_tokens(["one two three four five", "six seven eight nine ten"]), 13);
    }

    #[test]
    fn test_estimate_rounds() {
        // 1 word -> 1.3 -> 1, 2 words -> 2.6 -> 3
        assert_eq!(estimate_tokens(["word"]), 1);
        assert_eq!(estimate_tokens(["two words"]), 3);
    }

    #[test]
    fn test_estimate_keeps_piece_boundaries() {
        // "plan" + "Post" stay two words rather than "planPost"
        assert_eq!(estimate_tokens(["the plan", "Post one"]), 5);
        assert_eq!(estimate_tokens(["the planPost one"]), 4);
    }

    #[test]
    fn test_estimate_ignores_extra_whitespace() {
        assert_eq!(estimate_tokens(["  spaced\t\tout \n\n words  "]), estimate_tokens(["spaced out words"]));
    }

    #[test]
    fn test_estimate_empty() {
        assert_eq!(estimate_tokens(Vec::<&str>::new()), 0);
        assert_eq!(estimate_tokens(["", "   "]), 0);
    }

    proptest! {
        #[test]
        fn prop_estimate_is_deterministic(texts in proptest::collection::vec(".*", 0..6)) {
            let first = estimate_tokens(texts.iter().map(String::as_str));
            let second = estimate_tokens(texts.iter().map(String::as_str));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_estimate_bounded_by_word_count(texts in proptest::collection::vec("[a-z ]{0,40}", 0..6)) {
            let words: usize = texts.iter().map(|t| t.split_whitespace().count()).sum();
            let estimate = estimate_tokens(texts.iter().map(String::as_str));
            prop_assert!(estimate >= words as u64);
            prop_assert!(estimate <= (words as u64 * 13).div_ceil(10));
        }
    }
}
