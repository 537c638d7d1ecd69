//! Asset folder path normalization.

/// Split a slash-delimited asset path into clean segments.
///
/// Segments are trimmed and empty ones dropped, so `"a//b"`, `"/a/b/"` and
/// `" a / b"` all normalize to `["a", "b"]`. An empty or all-slash path
/// yields no segments.
pub fn normalize_path(raw: &str) -> Vec<&str> {
    raw.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(normalize_path("a/b/c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_collapses_empty_segments() {
        assert_eq!(normalize_path("a//b"), vec!["a", "b"]);
        assert_eq!(normalize_path("/a/b/"), vec!["a", "b"]);
        assert_eq!(normalize_path(" a / b "), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_path() {
        assert!(normalize_path("").is_empty());
        assert!(normalize_path("///").is_empty());
    }
}
