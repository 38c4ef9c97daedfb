//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + http handlers
//!     → tracing events (path, referer, host, error)
//!     → logging.rs subscriber (pretty or JSON, EnvFilter)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
