// src/lib.rs
// =============================================================================
// Library root for docs-mirror.
//
// docs-mirror fetches every page of a documentation site subtree, converts
// the HTML to Markdown and writes the result to a mirrored file tree.
//
// Module map:
// - cli: src/cli.rs - command-line parsing
// - crawl: src/crawl/ - crawl session, worklist and visit filtering
// - page: src/page/ - fetching pages and extracting their links
// - markdown: src/markdown/ - HTML to Markdown conversion and cleanup
// - output: src/output/ - URL-to-file-path mapping and document writing
//
// The binary (src/main.rs) is a thin wrapper; everything testable lives here
// so integration tests can drive a full crawl against a local server.
// =============================================================================

pub mod cli;
pub mod crawl;
pub mod markdown;
pub mod output;
pub mod page;
