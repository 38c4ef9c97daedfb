//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all page handler
//! - Wire up middleware (tracing, request timeout)
//! - Map routing decisions to HTML responses
//! - Serve until the shutdown signal fires

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{SiteConfig, SiteMetaConfig};
use crate::content::path::lookup_key;
use crate::content::{GraphQlClient, PathResolver};
use crate::render::{render_article, render_not_found, SeoMeta};
use crate::routing::{PageRouter, RequestContext, RoutingDecision};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct PageState {
    pub router: Arc<PageRouter<GraphQlClient>>,
    pub site: Arc<SiteMetaConfig>,
}

/// HTTP server for content pages.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let client = GraphQlClient::from_config(&config.content);
        if client.is_none() {
            tracing::warn!("No content endpoint configured; every page will answer 404");
        }

        let state = PageState {
            router: Arc::new(PageRouter::new(PathResolver::from_source(client))),
            site: Arc::new(config.site.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: PageState) -> Router {
        Router::new()
            .route("/{*postpath}", get(page_handler))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.listener.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

async fn page_handler(
    State(state): State<PageState>,
    Path(postpath): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ctx = RequestContext::from_parts(&postpath, &headers);
    respond(&state, &ctx).await
}

async fn root_handler(State(state): State<PageState>, headers: HeaderMap) -> Response {
    let ctx = RequestContext::from_parts("", &headers);
    respond(&state, &ctx).await
}

async fn respond(state: &PageState, ctx: &RequestContext) -> Response {
    match state.router.route(ctx).await {
        RoutingDecision::ServeContent(item) => {
            let canonical = lookup_key(ctx.path_segments.as_slice())
                .ok()
                .and_then(|key| ctx.canonical_url(&key));
            let meta = SeoMeta::from_item(&item, &state.site, canonical);
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, "no-cache")],
                Html(render_article(&item, &meta)),
            )
                .into_response()
        }
        RoutingDecision::NotFound => {
            (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
        }
    }
}
