// src/crawl/filter.rs
// =============================================================================
// This module decides whether a discovered URL should be queued.
//
// A URL is in scope when all of these hold:
// 1. Its scheme is http or https
// 2. Its host exactly matches the allowed host
// 3. Its path starts with the configured path prefix
// 4. Its normalized form has not been visited yet
//
// "Normalized" means fragment and query are stripped - two URLs that differ
// only by #section or ?query are the same page, so the normalized string is
// the deduplication key everywhere in the crawler.
//
// Both functions here are pure: should_visit never mutates the visited set,
// the caller does that when it actually processes the URL.
// =============================================================================

use std::collections::HashSet;
use url::Url;

// The subtree the crawl is allowed to touch
#[derive(Debug, Clone)]
pub struct CrawlScope {
    /// Host that pages must live on (exact match, e.g. "sdk.mystenlabs.com")
    pub host: String,
    /// Path prefix pages must live under (e.g. "/typescript")
    pub path_prefix: String,
}

// Strips fragment and query from a URL, producing the deduplication key
//
// Example:
//   https://example.com/guide/intro?ref=nav#section
//   -> https://example.com/guide/intro
pub fn normalize_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized.set_query(None);
    normalized
}

// Returns true if `url` should be added to the worklist
//
// Parameters:
//   url: the resolved absolute URL of a discovered link
//   scope: the host + prefix restriction for this crawl
//   visited: normalized URLs already seen this run (not mutated here)
pub fn should_visit(url: &Url, scope: &CrawlScope, visited: &HashSet<String>) -> bool {
    // Only http/https pages can be fetched; mailto:, ftp: etc. are out
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    // Stay on the configured host - an exact match, subdomains don't count
    if url.host_str() != Some(scope.host.as_str()) {
        return false;
    }

    // Stay under the configured subtree
    if !url.path().starts_with(&scope.path_prefix) {
        return false;
    }

    // Already visited (after fragment/query stripping)? Then skip
    let normalized = normalize_url(url);
    !visited.contains(normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> CrawlScope {
        CrawlScope {
            host: "example.com".to_string(),
            path_prefix: "/typescript".to_string(),
        }
    }

    #[test]
    fn test_fresh_in_scope_url() {
        let url = Url::parse("https://example.com/typescript/guide").unwrap();
        assert!(should_visit(&url, &scope(), &HashSet::new()));
    }

    #[test]
    fn test_rejects_other_host() {
        let url = Url::parse("https://other.com/typescript/guide").unwrap();
        assert!(!should_visit(&url, &scope(), &HashSet::new()));
    }

    #[test]
    fn test_rejects_subdomain() {
        let url = Url::parse("https://docs.example.com/typescript").unwrap();
        assert!(!should_visit(&url, &scope(), &HashSet::new()));
    }

    #[test]
    fn test_rejects_path_outside_prefix() {
        let url = Url::parse("https://example.com/rust/guide").unwrap();
        assert!(!should_visit(&url, &scope(), &HashSet::new()));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let url = Url::parse("ftp://example.com/typescript/file").unwrap();
        assert!(!should_visit(&url, &scope(), &HashSet::new()));
    }

    #[test]
    fn test_rejects_visited_after_stripping() {
        // The visited set holds the normalized form; a fragment/query variant
        // of the same page must be rejected
        let mut visited = HashSet::new();
        visited.insert("https://example.com/typescript/guide".to_string());

        let url = Url::parse("https://example.com/typescript/guide#install").unwrap();
        assert!(!should_visit(&url, &scope(), &visited));

        let url = Url::parse("https://example.com/typescript/guide?ref=nav").unwrap();
        assert!(!should_visit(&url, &scope(), &visited));
    }

    #[test]
    fn test_normalize_strips_fragment_and_query() {
        let url = Url::parse("https://example.com/guide?ref=nav#section").unwrap();
        assert_eq!(
            normalize_url(&url).as_str(),
            "https://example.com/guide"
        );
    }

    #[test]
    fn test_normalize_is_identity_on_clean_url() {
        let url = Url::parse("https://example.com/typescript/guide").unwrap();
        assert_eq!(normalize_url(&url), url);
    }
}
