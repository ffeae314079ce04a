// src/page/mod.rs
// =============================================================================
// This module deals with individual pages: fetching them over HTTP and
// extracting the links they contain.
//
// Submodules:
// - fetch: one GET per page, outcome reported as a value (no exceptions)
// - links: scraper-based anchor extraction with relative-URL resolution
// =============================================================================

mod fetch;
mod links;

pub use fetch::{fetch_page, FetchOutcome};
pub use links::extract_page_links;
