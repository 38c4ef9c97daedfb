//! Per-request context handed to the decision engine.

use axum::http::{header, HeaderMap};

use crate::content::path::split_segments;

/// Normalized view of one inbound page request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    pub path_segments: Vec<String>,
    pub referer: Option<String>,
    pub host: Option<String>,
}

impl RequestContext {
    pub fn new(path_segments: Vec<String>) -> Self {
        Self {
            path_segments,
            ..Self::default()
        }
    }

    /// Build from the raw catch-all capture and request headers.
    pub fn from_parts(raw_path: &str, headers: &HeaderMap) -> Self {
        let header_str = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            path_segments: split_segments(raw_path),
            referer: header_str(header::REFERER),
            host: header_str(header::HOST),
        }
    }

    /// Canonical `https://host/key/` URL, when the host is known.
    pub fn canonical_url(&self, key: &str) -> Option<String> {
        self.host.as_ref().map(|host| format!("https://{}{}", host, key))
    }
}
