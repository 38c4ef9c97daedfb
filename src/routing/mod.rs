//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (catch-all path, Host, Referer)
//!     → context.rs (RequestContext)
//!     → decision.rs (resolve, then decide)
//!     → Return: ServeContent(item) or NotFound
//! ```
//!
//! # Design Decisions
//! - One resolver call per request at most
//! - Deterministic: same context and outcome always give the same decision

pub mod context;
pub mod decision;

pub use context::RequestContext;
pub use decision::{decide, PageRouter, RoutingDecision};
