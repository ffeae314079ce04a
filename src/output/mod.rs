// src/output/mod.rs
// =============================================================================
// This module owns everything about the mirrored file tree.
//
// Submodules:
// - paths: pure URL-path -> relative-file-path mapping
// - writer: document header rendering and UTF-8 file writes
// =============================================================================

mod paths;
mod writer;

pub use paths::map_url_path;
pub use writer::{render_document, write_document};
