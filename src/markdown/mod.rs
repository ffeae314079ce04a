// src/markdown/mod.rs
// =============================================================================
// This module turns fetched HTML into clean Markdown.
//
// Submodules:
// - convert: HTML -> Markdown via htmd, plus <title> extraction
// - normalize: blank-line collapsing and trailing-whitespace cleanup
// =============================================================================

mod convert;
mod normalize;

pub use convert::{extract_title, html_to_markdown};
pub use normalize::normalize_markdown;
