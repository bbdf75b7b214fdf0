//! Paginated plain-text export of generated drafts

use std::path::Path;

use chrono::{DateTime, Local};
use eyre::{Context, Result};
use tracing::{debug, info};

/// Characters per line before wrapping
pub const PAGE_WIDTH: usize = 80;

/// Body lines per page, header excluded
pub const LINES_PER_PAGE: usize = 54;

/// Separates pages in the rendered document
pub const PAGE_BREAK: &str = "\n\u{c}\n";

/// Greedy word wrap; words longer than `width` get a line to themselves
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

/// Lay the drafts out as numbered sections and cut them into pages
pub fn paginate(posts: &[String], width: usize, lines_per_page: usize) -> Vec<Vec<String>> {
    debug!(post_count = %posts.len(), %width, %lines_per_page, "paginate: called");
    let mut lines = Vec::new();
    for (index, post) in posts.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("Post {}", index + 1));
        lines.push(String::new());
        lines.extend(wrap(post, width));
    }

    let per_page = lines_per_page.max(1);
    lines.chunks(per_page).map(<[String]>::to_vec).collect()
}

/// Render the full document with a header on every page
pub fn render_document(posts: &[String], generated_at: DateTime<Local>) -> String {
    let pages = paginate(posts, PAGE_WIDTH, LINES_PER_PAGE);
    let total = pages.len().max(1);
    let stamp = generated_at.format("%Y-%m-%d %H:%M");

    if pages.is_empty() {
        return format!("LinkedIn Post Drafts ({stamp}) - page 1 of 1\n\nNo posts.\n");
    }

    pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            format!(
                "LinkedIn Post Drafts ({stamp}) - page {} of {}\n\n{}\n",
                i + 1,
                total,
                page.join("\n")
            )
        })
        .collect::<Vec<_>>()
        .join(PAGE_BREAK)
}

/// Write the rendered document to `path`
pub fn write_export(path: &Path, posts: &[String], generated_at: DateTime<Local>) -> Result<()> {
    debug!(?path, post_count = %posts.len(), "write_export: called");
    let document = render_document(posts, generated_at);
    std::fs::write(path, document).context(format!("Failed to write export to {}", path.display()))?;
    info!("Exported {} posts to {}", posts.len(), path.display());
    Ok(())
}
