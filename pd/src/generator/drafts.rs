//! Splitting the model's draft reply into individual posts

use tracing::debug;

/// Separator the drafts prompt asks the model to put between posts
pub const DRAFT_DELIMITER: &str = "\n\n---\n\n";

/// Split a raw drafts reply on [`DRAFT_DELIMITER`]
///
/// Segments are trimmed and blank ones dropped. The count is whatever the
/// model produced; it is not checked against the request.
pub fn split_drafts(raw: &str) -> Vec<String> {
    debug!(raw_len = %raw.len(), "split_drafts: called");
    let drafts: Vec<String> = raw
        .split(DRAFT_DELIMITER)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();
    debug!(draft_count = %drafts.len(), "split_drafts: done");
    drafts
}
