//! postpath server binary.
//!
//! ```text
//!   GET /{*postpath}
//!        │
//!        ▼
//!   ┌──────────┐   ┌─────────────┐   ┌──────────────┐
//!   │   http   │──▶│   routing   │──▶│   content    │──▶ GraphQL endpoint
//!   │  server  │   │  decision   │   │   resolver   │    (GRAPHQL_ENDPOINT)
//!   └────┬─────┘   └─────────────┘   └──────────────┘
//!        ▼
//!   render (200 article | 404)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use postpath::config::load_config;
use postpath::observability::init_logging;
use postpath::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "postpath")]
#[command(about = "Serve headless-CMS content pages", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(config.observability.log_format);
    tracing::info!("postpath v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        endpoint_configured = config.content.endpoint.is_some(),
        request_timeout_secs = config.content.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
