//! Routing decision engine.
//!
//! # Responsibilities
//! - Run the path resolver for a request
//! - Map the outcome to exactly one decision
//! - Log configuration and fetch failures with the attempted path
//!
//! # Design Decisions
//! - Every error kind ends as `NotFound`; nothing escapes to the server
//! - Fetch failures are not-found pages, never an inline error page
//! - The referrer is recorded for diagnostics only and does not affect the outcome

use crate::content::{ContentError, ContentItem, ContentResult, ContentSource, PathResolver};
use crate::routing::context::RequestContext;

/// Outcome for one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve this item, exactly as fetched.
    ServeContent(ContentItem),
    /// Answer not-found.
    NotFound,
}

/// Map a resolver outcome to a decision.
pub fn decide(ctx: &RequestContext, outcome: ContentResult<ContentItem>) -> RoutingDecision {
    match outcome {
        Ok(item) => RoutingDecision::ServeContent(item),
        Err(ContentError::EmptyPath) => {
            tracing::debug!("Empty path requested");
            RoutingDecision::NotFound
        }
        Err(ContentError::NotFound { path }) => {
            tracing::info!(path = %path, "Post not found");
            RoutingDecision::NotFound
        }
        Err(ContentError::Configuration) => {
            tracing::error!(
                path = %ctx.path_segments.join("/"),
                "Content endpoint not configured; set GRAPHQL_ENDPOINT"
            );
            RoutingDecision::NotFound
        }
        Err(ContentError::Fetch { path, reason }) => {
            tracing::error!(path = %path, error = %reason, "GraphQL request failed");
            RoutingDecision::NotFound
        }
    }
}

/// Decision engine bound to a resolver.
#[derive(Debug, Clone)]
pub struct PageRouter<S> {
    resolver: PathResolver<S>,
}

impl<S: ContentSource> PageRouter<S> {
    pub fn new(resolver: PathResolver<S>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PathResolver<S> {
        &self.resolver
    }

    /// Resolve and decide for one request.
    pub async fn route(&self, ctx: &RequestContext) -> RoutingDecision {
        tracing::debug!(
            path = %ctx.path_segments.join("/"),
            referer = ctx.referer.as_deref().unwrap_or("-"),
            host = ctx.host.as_deref().unwrap_or("-"),
            "Fetching post"
        );

        let outcome = self.resolver.resolve(ctx.path_segments.as_slice()).await;
        decide(ctx, outcome)
    }
}
