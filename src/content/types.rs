//! Content item types and resolver errors.

use serde::Deserialize;
use thiserror::Error;

/// A single article record from the CMS.
///
/// Field names follow the GraphQL schema on the wire; the Rust names are
/// what the renderer uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(default, deserialize_with = "wire::string_or_null")]
    pub title: String,
    #[serde(rename = "excerpt", default, deserialize_with = "wire::string_or_null")]
    pub excerpt_html: String,
    #[serde(rename = "content", default, deserialize_with = "wire::string_or_null")]
    pub body_html: String,
    #[serde(rename = "dateGmt", default)]
    pub published_at: Option<String>,
    #[serde(rename = "modifiedGmt", default)]
    pub modified_at: Option<String>,
    #[serde(rename = "author", default, deserialize_with = "wire::author_name")]
    pub author_name: Option<String>,
    #[serde(rename = "featuredImage", default, deserialize_with = "wire::featured_image")]
    pub featured_image: Option<FeaturedImage>,
}

/// Featured image attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeaturedImage {
    #[serde(rename = "sourceUrl", default, deserialize_with = "wire::string_or_null")]
    pub url: String,
    #[serde(rename = "altText", default)]
    pub alt_text: Option<String>,
}

/// Unwraps the `{ node: { ... } }` connection shape and null strings.
mod wire {
    use super::FeaturedImage;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct Edge<T> {
        node: Option<T>,
    }

    #[derive(Deserialize)]
    struct Author {
        name: Option<String>,
    }

    pub(super) fn string_or_null<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }

    pub(super) fn author_name<'de, D>(d: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let edge = Option::<Edge<Author>>::deserialize(d)?;
        Ok(edge.and_then(|e| e.node).and_then(|a| a.name))
    }

    pub(super) fn featured_image<'de, D>(d: D) -> Result<Option<FeaturedImage>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let edge = Option::<Edge<FeaturedImage>>::deserialize(d)?;
        Ok(edge.and_then(|e| e.node).filter(|img| !img.url.is_empty()))
    }
}

/// Errors produced while resolving a path to a content item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// No content endpoint is configured.
    #[error("content endpoint not configured")]
    Configuration,

    /// The request carried no usable path segments.
    #[error("empty path")]
    EmptyPath,

    /// The content service answered, but holds no item for the key.
    #[error("no content at {path}")]
    NotFound { path: String },

    /// The content service could not be reached or answered badly.
    #[error("fetch of {path} failed: {reason}")]
    Fetch { path: String, reason: String },
}

/// Result type for resolver operations.
pub type ContentResult<T> = Result<T, ContentError>;
