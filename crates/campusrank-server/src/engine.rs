//! Ranking engine initialization
//!
//! Thin wrapper that turns the server configuration into an SDK
//! [`RankingEngineBuilder`].

use crate::config::ServerConfig;
use anyhow::Result;
use campusrank_sdk::{RankingEngine, RankingEngineBuilder};
use tracing::{info, warn};

/// Initialize the ranking engine
pub async fn init_engine(config: &ServerConfig) -> Result<RankingEngine> {
    if !config.ranking_types_path.exists() {
        warn!(
            "Ranking types file {} not found, serving the built-in defaults until ranking types are saved",
            config.ranking_types_path.display()
        );
    }

    let engine = RankingEngineBuilder::new()
        .with_config(config.engine_config())
        .build()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build ranking engine: {}", e))?;

    info!(
        "Ranking engine ready with {} ranking types",
        engine.ranking_types().await.len()
    );
    Ok(engine)
}
