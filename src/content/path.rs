//! Path normalization.
//!
//! Lookups are URI-keyed: the key always starts and ends with a single `/`
//! and never contains `//`, no matter how the segments arrive.

use crate::content::types::{ContentError, ContentResult};

/// Join catch-all path segments into the canonical URI lookup key.
///
/// Segments are trimmed of `/` and split further on interior `/`, then empty
/// pieces are dropped. `["2024", "hello-world"]` and `["/2024/", "/hello-world"]`
/// both map to `/2024/hello-world/`.
pub fn lookup_key<S: AsRef<str>>(segments: &[S]) -> ContentResult<String> {
    let parts: Vec<&str> = segments
        .iter()
        .flat_map(|s| s.as_ref().split('/'))
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(ContentError::EmptyPath);
    }

    Ok(format!("/{}/", parts.join("/")))
}

/// Split the raw catch-all capture (`a/b/c`) into segments.
pub fn split_segments(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_segments() {
        assert_eq!(lookup_key(&["2024", "hello-world"]).unwrap(), "/2024/hello-world/");
        assert_eq!(lookup_key(&["x"]).unwrap(), "/x/");
    }

    #[test]
    fn test_separators_never_double() {
        let inputs: [&[&str]; 5] = [
            &["2024", "hello-world"],
            &["/2024/", "/hello-world/"],
            &["2024/", "", "hello-world"],
            &["//2024//hello-world//"],
            &["2024", "/", "hello-world/"],
        ];
        for input in inputs {
            let key = lookup_key(input).unwrap();
            assert_eq!(key, "/2024/hello-world/", "input {:?}", input);
            assert!(!key.contains("//"));
        }
    }

    #[test]
    fn test_key_is_deterministic() {
        let segments = vec!["a".to_string(), "b".to_string()];
        assert_eq!(lookup_key(&segments).unwrap(), lookup_key(&segments).unwrap());
    }

    #[test]
    fn test_empty_path() {
        let none: [&str; 0] = [];
        assert_eq!(lookup_key(&none), Err(ContentError::EmptyPath));
        assert_eq!(lookup_key(&["", "/", "//"]), Err(ContentError::EmptyPath));
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("2024/hello-world"), vec!["2024", "hello-world"]);
        assert_eq!(split_segments("/a//b/"), vec!["a", "b"]);
        assert!(split_segments("").is_empty());
    }
}
