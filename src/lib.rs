//! Headless-CMS content page service.
//!
//! Resolves a catch-all URL path to an article through a GraphQL content
//! API and renders it with SEO metadata, or answers not-found.

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{decide, RequestContext, RoutingDecision};
