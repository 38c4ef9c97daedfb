//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, trace + timeout layers)
//!     → RequestContext from catch-all path and headers
//!     → routing::PageRouter (decision)
//!     → 200 article HTML | 404 page
//! ```

pub mod server;

pub use server::{HttpServer, PageState};
