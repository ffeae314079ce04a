// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Submodules:
// - filter: decides which discovered URLs are in scope
// - session: the breadth-first crawl loop and its state
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Respects host + path-prefix restriction (doesn't leave the subtree)
// - Deduplicates URLs by their fragment/query-stripped form
// - Bounded by a page-count cap
// =============================================================================

mod filter;
mod session;

// Re-export the public API so callers write `crawl::CrawlSession` instead of
// `crawl::session::CrawlSession`
pub use filter::{normalize_url, should_visit, CrawlScope};
pub use session::{CrawlConfig, CrawlReport, CrawlSession};
