//! Content subsystem.
//!
//! # Data Flow
//! ```text
//! path segments
//!     → path.rs (canonical URI key, "/a/b/")
//!     → resolver.rs (configured? → one fetch)
//!     → client.rs (GraphQL POST, shared reqwest client)
//!     → ContentItem | ContentError
//! ```

pub mod client;
pub mod path;
pub mod resolver;
pub mod types;

pub use client::{ContentSource, GraphQlClient};
pub use resolver::PathResolver;
pub use types::{ContentError, ContentItem, ContentResult, FeaturedImage};
