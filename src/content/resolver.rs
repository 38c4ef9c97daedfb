//! Path Resolver: path segments in, content item out.

use crate::content::client::ContentSource;
use crate::content::path::lookup_key;
use crate::content::types::{ContentError, ContentItem, ContentResult};

/// Resolves catch-all path segments through a content source.
///
/// A resolver without a source is unconfigured and answers every lookup
/// with [`ContentError::Configuration`] without any outbound call.
#[derive(Debug, Clone)]
pub struct PathResolver<S> {
    source: Option<S>,
}

impl<S: ContentSource> PathResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source: Some(source) }
    }

    pub fn unconfigured() -> Self {
        Self { source: None }
    }

    pub fn from_source(source: Option<S>) -> Self {
        Self { source }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    /// Look up the item for `segments`. Exactly one fetch at most.
    pub async fn resolve<T: AsRef<str>>(&self, segments: &[T]) -> ContentResult<ContentItem> {
        let key = lookup_key(segments)?;
        let source = self.source.as_ref().ok_or(ContentError::Configuration)?;

        match source.fetch_by_uri(&key).await? {
            Some(item) => Ok(item),
            None => Err(ContentError::NotFound { path: key }),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory source that records the keys it was asked for.
    #[derive(Clone, Default)]
    pub(crate) struct StubSource {
        pub items: HashMap<String, ContentItem>,
        pub fail: bool,
        pub calls: Arc<AtomicUsize>,
        pub keys: Arc<Mutex<Vec<String>>>,
    }

    impl StubSource {
        pub(crate) fn with_item(key: &str, item: ContentItem) -> Self {
            let mut source = Self::default();
            source.items.insert(key.to_string(), item);
            source
        }

        pub(crate) fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ContentSource for StubSource {
        async fn fetch_by_uri(&self, uri: &str) -> ContentResult<Option<ContentItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.keys.lock().unwrap().push(uri.to_string());
            if self.fail {
                return Err(ContentError::Fetch {
                    path: uri.to_string(),
                    reason: "connection refused".into(),
                });
            }
            Ok(self.items.get(uri).cloned())
        }
    }

    pub(crate) fn item(title: &str) -> ContentItem {
        ContentItem {
            id: format!("id-{}", title),
            title: title.to_string(),
            excerpt_html: "<p>Intro [&hellip;]</p>".into(),
            body_html: "<p>Body</p>".into(),
            published_at: Some("2024-01-01T00:00:00".into()),
            modified_at: Some("2024-01-02T00:00:00".into()),
            author_name: None,
            featured_image: None,
        }
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let source = StubSource::with_item("/2024/hello-world/", item("Hello"));
        let resolver = PathResolver::new(source.clone());

        let found = resolver.resolve(&["2024", "hello-world"]).await.unwrap();
        assert_eq!(found, item("Hello"));
        assert_eq!(source.call_count(), 1);
        assert_eq!(*source.keys.lock().unwrap(), vec!["/2024/hello-world/".to_string()]);
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let resolver = PathResolver::new(StubSource::default());
        let err = resolver.resolve(&["missing"]).await.unwrap_err();
        assert_eq!(err, ContentError::NotFound { path: "/missing/".into() });
    }

    #[tokio::test]
    async fn test_resolve_fetch_error() {
        let source = StubSource::failing();
        let resolver = PathResolver::new(source.clone());
        let err = resolver.resolve(&["x"]).await.unwrap_err();
        assert!(matches!(err, ContentError::Fetch { ref path, .. } if path == "/x/"));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_makes_no_call() {
        let resolver: PathResolver<StubSource> = PathResolver::unconfigured();
        assert!(!resolver.is_configured());
        assert_eq!(resolver.resolve(&["x"]).await, Err(ContentError::Configuration));
    }

    #[tokio::test]
    async fn test_empty_path_makes_no_call() {
        let source = StubSource::default();
        let resolver = PathResolver::new(source.clone());
        let none: [&str; 0] = [];
        assert_eq!(resolver.resolve(&none).await, Err(ContentError::EmptyPath));
        assert_eq!(source.call_count(), 0);
    }
}
