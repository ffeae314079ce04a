// src/markdown/convert.rs
// =============================================================================
// This module converts an HTML page body to Markdown and pulls out the page
// title for the document header.
//
// Conversion uses the `htmd` crate (a Turndown-style converter). It handles
// malformed markup permissively, so broken HTML degrades to imperfect
// Markdown instead of an error. Script and style elements are skipped - their
// text content is noise in a documentation mirror.
//
// Title extraction reuses `scraper`, the same parser we use for links.
// =============================================================================

use anyhow::{anyhow, Result};
use htmd::HtmlToMarkdown;
use scraper::{Html, Selector};

// Converts an HTML document to Markdown
//
// Parameters:
//   html: the raw page body
//
// Returns: the converted Markdown (not yet normalized - callers run
// normalize_markdown on it before writing)
pub fn html_to_markdown(html: &str) -> Result<String> {
    let converter = HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .build();

    converter
        .convert(html)
        .map_err(|e| anyhow!("Markdown conversion failed: {}", e))
}

// Extracts the content of the first <title> element
//
// Returns: Some(trimmed title) or None if the page has no usable title.
// The crawl loop falls back to the page URL when this returns None.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = Selector::parse("title").unwrap();

    let element = document.select(&selector).next()?;
    let title = element.text().collect::<String>().trim().to_string();

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
