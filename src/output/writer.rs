// src/output/writer.rs
// =============================================================================
// This module renders the document header and writes finished documents.
//
// Every mirrored file has the same shape:
//
//   # <title>
//
//   - Source: [<url>](<url>)
//   - Retrieved: <YYYY-MM-DD HH:MM:SS> UTC
//
//   ---
//
//   <converted body>
//
// Writes overwrite whatever is at the target path. Filesystem errors here
// are the one fatal error class in the crawler - if we can't create the
// output tree there is no point continuing, so they propagate as Err.
// =============================================================================

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

// Renders a complete output document: header block + normalized body
//
// Parameters:
//   title: the page title (or the URL when the page had none)
//   source_url: the normalized URL the page was fetched from
//   retrieved: UTC retrieval time, formatted as "YYYY-MM-DD HH:MM:SS"
//   body: normalized Markdown body
pub fn render_document(
    title: &str,
    source_url: &str,
    retrieved: DateTime<Utc>,
    body: &str,
) -> String {
    format!(
        "# {}\n\n- Source: [{}]({})\n- Retrieved: {} UTC\n\n---\n\n{}",
        title,
        source_url,
        source_url,
        retrieved.format("%Y-%m-%d %H:%M:%S"),
        body
    )
}

// Writes a document to disk, creating parent directories as needed
//
// Overwrites any existing file at `path` (last write wins on collisions).
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_document_format() {
        let retrieved = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        let doc = render_document(
            "TypeScript SDK",
            "https://example.com/typescript",
            retrieved,
            "Body text.\n",
        );

        assert_eq!(
            doc,
            "# TypeScript SDK\n\n\
             - Source: [https://example.com/typescript](https://example.com/typescript)\n\
             - Retrieved: 2024-05-01 12:30:45 UTC\n\n\
             ---\n\n\
             Body text.\n"
        );
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide").join("intro.md");

        write_document(&path, "# Intro\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Intro\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.md");

        write_document(&path, "first\n").unwrap();
        write_document(&path, "second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
    }
}
