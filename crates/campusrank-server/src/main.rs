//! CampusRank HTTP Server
//!
//! Serves college rankings over a REST API.

use anyhow::Result;
use campusrank_server::{api, config::ServerConfig, engine};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    info!(
        "Loaded configuration: host={}, port={}, ranking_types={}",
        config.host,
        config.port,
        config.ranking_types_path.display()
    );

    // Initialize ranking engine
    let engine = engine::init_engine(&config).await?;
    info!("Ranking engine initialized");

    let app = api::create_router(Arc::new(engine));

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Rankings API: POST http://{}/v1/rankings", addr);
    info!("  Ranking types: http://{}/v1/ranking-types", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured log level.
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_directives().into());

    let (json_layer, text_layer) = if config.json_logs {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
