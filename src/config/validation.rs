//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, address parses)
//! - Validate the content endpoint URL when one is set
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - A missing endpoint is not an error; the service starts unconfigured

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("content.endpoint '{0}' is not an absolute http(s) URL")]
    Endpoint(String),

    #[error("site.locale must not be empty")]
    EmptyLocale,
}

/// Validate a loaded configuration.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("listener.request_timeout_secs"));
    }
    if config.content.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("content.request_timeout_secs"));
    }
    if let Some(endpoint) = &config.content.endpoint {
        let valid = Url::parse(endpoint)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false);
        if !valid {
            errors.push(ValidationError::Endpoint(endpoint.clone()));
        }
    }
    if config.site.locale.trim().is_empty() {
        errors.push(ValidationError::EmptyLocale);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
