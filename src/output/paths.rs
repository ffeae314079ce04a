// src/output/paths.rs
// =============================================================================
// This module maps a URL path to a relative file path under the output root.
//
// Mapping rules (with prefix "/typescript"):
//   /typescript              -> index.md
//   /typescript/             -> index.md
//   /typescript/guide        -> guide.md
//   /typescript/guide/intro  -> guide/intro.md
//
// The leading segment matching the prefix's own last segment is dropped so
// the tree mirrors the subtree, not the whole site. Pathological inputs
// (empty after stripping) fall back to index.md - there are no error cases.
//
// This is a pure function: deterministic, no filesystem access. Two URLs can
// map to the same file (/guide vs /guide/index would both need guide paths);
// the crawl loop overwrites on collision, last write wins.
// =============================================================================

use std::path::PathBuf;

// Maps a URL path to a Markdown file path relative to the output root
//
// Parameters:
//   url_path: the path component of a page URL (e.g. "/typescript/guide")
//   path_prefix: the configured scope prefix (e.g. "/typescript")
pub fn map_url_path(url_path: &str, path_prefix: &str) -> PathBuf {
    let prefix = path_prefix.trim_end_matches('/');

    // The subtree root itself (with or without a trailing slash) is the index
    if url_path.is_empty() || url_path == "/" || url_path.trim_end_matches('/') == prefix {
        return PathBuf::from("index.md");
    }

    // Split into segments, ignoring leading/trailing slashes
    let stripped = url_path.trim_matches('/');
    let mut parts: Vec<&str> = stripped.split('/').filter(|s| !s.is_empty()).collect();

    // Drop a leading segment equal to the prefix's own last segment, so
    // /typescript/guide becomes guide.md rather than typescript/guide.md
    let prefix_leaf = prefix.trim_start_matches('/').rsplit('/').next().unwrap_or("");
    if !prefix_leaf.is_empty() && parts.first() == Some(&prefix_leaf) {
        parts.remove(0);
    }

    match parts.split_last() {
        // Nothing left after stripping: fall back to the index
        None => PathBuf::from("index.md"),
        Some((leaf, dirs)) => {
            let mut path = PathBuf::new();
            for dir in dirs {
                path.push(dir);
            }
            path.push(format!("{}.md", leaf));
            path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "/typescript";

    #[test]
    fn test_prefix_maps_to_index() {
        assert_eq!(map_url_path("/typescript", PREFIX), PathBuf::from("index.md"));
        assert_eq!(map_url_path("/typescript/", PREFIX), PathBuf::from("index.md"));
    }

    #[test]
    fn test_root_maps_to_index() {
        assert_eq!(map_url_path("", PREFIX), PathBuf::from("index.md"));
        assert_eq!(map_url_path("/", PREFIX), PathBuf::from("index.md"));
    }

    #[test]
    fn test_single_segment_is_flat() {
        assert_eq!(
            map_url_path("/typescript/guide", PREFIX),
            PathBuf::from("guide.md")
        );
        assert_eq!(
            map_url_path("/typescript/guide/", PREFIX),
            PathBuf::from("guide.md")
        );
    }

    #[test]
    fn test_multi_segment_nests_directories() {
        assert_eq!(
            map_url_path("/typescript/guide/intro", PREFIX),
            PathBuf::from("guide").join("intro.md")
        );
        assert_eq!(
            map_url_path("/typescript/api/client/methods", PREFIX),
            PathBuf::from("api").join("client").join("methods.md")
        );
    }

    #[test]
    fn test_path_without_prefix_segment() {
        // A path under the prefix by string match but without the literal
        // leading segment keeps all its segments
        assert_eq!(map_url_path("/guide/intro", PREFIX), PathBuf::from("guide").join("intro.md"));
    }

    #[test]
    fn test_empty_prefix_keeps_all_segments() {
        assert_eq!(map_url_path("/docs/a", ""), PathBuf::from("docs").join("a.md"));
        assert_eq!(map_url_path("/", ""), PathBuf::from("index.md"));
    }

    #[test]
    fn test_repeated_slashes_are_ignored() {
        assert_eq!(
            map_url_path("/typescript//guide", PREFIX),
            PathBuf::from("guide.md")
        );
    }

    #[test]
    fn test_deterministic() {
        let a = map_url_path("/typescript/guide/intro", PREFIX);
        let b = map_url_path("/typescript/guide/intro", PREFIX);
        assert_eq!(a, b);
    }
}
