// src/checker/markdown.rs
// =============================================================================
// This module extracts link targets from Markdown text.
//
// Only the inline `[text](target)` form is recognized, with a regular
// expression. That also catches image links (`![alt](img.png)`) since the
// `!` sits outside the match. Reference-style links are not followed.
//
// Target clean-up:
// - `(path "title")` keeps only `path`
// - `(<path with spaces>)` drops the angle brackets
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("markdown link pattern is valid"));

// Extracts every inline link target from Markdown text
//
// Example input:
//   "See [FAQ](../faq.md \"Frequently asked\") and [site](https://example.com)"
//
// Example output:
//   vec!["../faq.md", "https://example.com"]
pub fn extract_markdown_links(markdown: &str) -> Vec<String> {
    MD_LINK
        .captures_iter(markdown)
        .map(|captures| clean_target(&captures[1]))
        .collect()
}

fn clean_target(raw: &str) -> String {
    let mut target = raw.trim();
    if target.contains(' ') && !target.starts_with('<') {
        target = target.split(' ').next().unwrap_or_default().trim();
    }
    target.trim_matches(|c| c == '<' || c == '>').to_string()
}
