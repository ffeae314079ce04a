// src/page/links.rs
// =============================================================================
// This module extracts anchor links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative hrefs against the URL of
// the page they appeared on, the same way a browser would.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all anchor links from an HTML page as absolute URLs
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   page_url: the URL of the page (for resolving relative links)
//
// Returns: Vec<Url> of every resolvable link; scope filtering is the
// caller's job (see crawl::filter)
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   page_url = https://example.com/guide
//   result = [https://example.com/docs]
pub fn extract_page_links(html: &str, page_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href attribute.
    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(link) = resolve_href(page_url, href.trim()) {
                links.push(link);
            }
        }
    }

    links
}

// Resolves a possibly-relative href to an absolute URL
//
// Parameters:
//   base: the URL of the current page
//   href: the href value (might be relative, might be absolute)
//
// Returns: Some(url) or None if the href carries no crawlable page
//
// Examples:
//   base = https://example.com/guide
//   href = "/docs" -> Some(https://example.com/docs)
//   href = "intro" -> Some(https://example.com/intro)
//   href = "#section" -> None (same page, no new content)
//   href = "mailto:a@b.c" -> None (not a page)
fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    // Empty hrefs and same-page anchors point back at the current page
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    // Skip special protocols that can't be fetched
    if href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Url::join handles both absolute and relative hrefs
    base.join(href).ok()
}
