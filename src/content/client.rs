//! GraphQL content client.
//!
//! # Responsibilities
//! - Issue one `post(id, idType: URI)` query per lookup
//! - Classify the answer: item, no item, or failure
//!
//! # Design Decisions
//! - One `reqwest::Client` per process, created lazily on first use
//! - No retries and no caching
//! - The per-query timeout is set on each request, so the shared client
//!   carries no per-endpoint state

use std::future::Future;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ContentConfig;
use crate::content::types::{ContentError, ContentItem, ContentResult};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Query selecting a post by its site-relative URI.
pub const POST_BY_URI_QUERY: &str = r#"query GetPost($path: String!) {
  post(id: $path, idType: URI) {
    id
    title
    excerpt
    content
    dateGmt
    modifiedGmt
    author {
      node {
        name
      }
    }
    featuredImage {
      node {
        sourceUrl
        altText
      }
    }
  }
}"#;

/// Something that can look up a content item by URI key.
///
/// `Ok(None)` means the service answered and has no item for the key.
pub trait ContentSource: Send + Sync {
    fn fetch_by_uri(&self, uri: &str) -> impl Future<Output = ContentResult<Option<ContentItem>>> + Send;
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    path: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<PostData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct PostData {
    post: Option<ContentItem>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// Client for a GraphQL content endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: Url,
    timeout: Duration,
}

impl GraphQlClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    /// Build from config. `None` when no usable endpoint is configured.
    pub fn from_config(config: &ContentConfig) -> Option<Self> {
        let endpoint = config.endpoint.as_deref()?;
        match Url::parse(endpoint) {
            Ok(url) => Some(Self::new(url, Duration::from_secs(config.request_timeout_secs))),
            Err(e) => {
                tracing::error!(endpoint = %endpoint, error = %e, "Invalid content endpoint");
                None
            }
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContentSource for GraphQlClient {
    async fn fetch_by_uri(&self, uri: &str) -> ContentResult<Option<ContentItem>> {
        let fetch_error = |reason: String| ContentError::Fetch {
            path: uri.to_string(),
            reason,
        };

        let body = GraphQlRequest {
            query: POST_BY_URI_QUERY,
            variables: Variables { path: uri },
        };

        let response = HTTP_CLIENT
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("content service returned {}", status)));
        }

        let payload: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        interpret(payload).map_err(fetch_error)
    }
}

/// A post wins over partial errors; errors without a post are failures.
fn interpret(payload: GraphQlResponse) -> Result<Option<ContentItem>, String> {
    let post = payload.data.and_then(|d| d.post);
    if post.is_none() && !payload.errors.is_empty() {
        let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
        return Err(messages.join("; "));
    }
    Ok(post)
}
