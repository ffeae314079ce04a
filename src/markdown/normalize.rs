// src/markdown/normalize.rs
// =============================================================================
// This module cleans up converted Markdown text.
//
// Converters tend to leave runs of blank lines and trailing whitespace
// behind. Normalization makes the output stable:
// - Any run of two or more blank (whitespace-only) lines collapses to one
// - Every kept line loses its trailing whitespace
// - The result is trimmed and ends with exactly one newline
//
// The function is idempotent: normalizing already-normalized text is a no-op.
// =============================================================================

// Normalizes Markdown text for writing to disk
pub fn normalize_markdown(text: &str) -> String {
    let mut cleaned: Vec<&str> = Vec::new();
    let mut last_blank = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            // Keep at most one blank line per run
            if !last_blank {
                cleaned.push("");
                last_blank = true;
            }
        } else {
            cleaned.push(line.trim_end());
            last_blank = false;
        }
    }

    format!("{}\n", cleaned.join("\n").trim())
}
