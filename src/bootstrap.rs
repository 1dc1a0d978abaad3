//! Wiring for the standalone service binary

use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::serve_api;
use crate::config::EtherstatsConfig;
use crate::ledger::MemoryLedger;
use crate::source::RpcEthSource;
use crate::stats::StatsAggregator;
use crate::store::MemoryStore;

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = EtherstatsConfig::from_env()?;

    let listener = TcpListener::bind(&config.listen_addr).await?;

    let source = Arc::new(RpcEthSource::new(config.rpc_url.clone()));
    let store = Arc::new(MemoryStore::new(config.cache_ttl));
    let ledger = Arc::new(MemoryLedger::new());

    let aggregator = StatsAggregator::new(source, store, ledger);

    info!(rpc_url = %config.rpc_url, cache_ttl = ?config.cache_ttl, "etherstats configured");

    serve_api(listener, aggregator).await
}
