//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every section has defaults so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Environment variable holding the GraphQL content endpoint.
pub const ENDPOINT_ENV: &str = "GRAPHQL_ENDPOINT";

/// Root configuration for the page service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Content API settings.
    pub content: ContentConfig,

    /// Site-wide metadata used in Open Graph tags.
    pub site: SiteMetaConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl SiteConfig {
    /// Overlay values taken from the process environment.
    ///
    /// `GRAPHQL_ENDPOINT` wins over `content.endpoint`. An empty value is
    /// treated as unset.
    pub fn apply_env(&mut self) {
        self.apply_endpoint_override(std::env::var(ENDPOINT_ENV).ok());
    }

    pub(crate) fn apply_endpoint_override(&mut self, value: Option<String>) {
        if let Some(endpoint) = value.map(|v| v.trim().to_string()) {
            if !endpoint.is_empty() {
                self.content.endpoint = Some(endpoint);
            }
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Overall per-request timeout enforced by the HTTP layer.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Content API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    /// GraphQL endpoint URL. `None` leaves the service unconfigured.
    pub endpoint: Option<String>,

    /// Timeout for the single outbound query.
    pub request_timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: 10,
        }
    }
}

/// Site metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteMetaConfig {
    /// Value of `og:site_name`.
    pub name: String,

    /// Value of `og:locale`.
    pub locale: String,
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            name: "postpath".to_string(),
            locale: "en_US".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_format: LogFormat,
}
