//! Stats aggregation pipeline
//!
//! [`StatsAggregator`] answers a single question per request: current gas
//! price, latest block number, and the ETH balance of one address. Two
//! consistency policies are in play:
//!
//! - Gas price and block number are **cache-aside**: read the fast store
//!   first, fall back to the authoritative source on a miss, then refill
//!   the store best-effort.
//! - The balance is **always fetched** from the source, then recorded to
//!   the durable ledger best-effort.
//!
//! A source failure on any of the three items fails the whole request;
//! store and ledger failures never do. The three resolutions run
//! sequentially in a fixed order (gas price, block number, balance) so that
//! partial side effects are deterministic. They have no data dependency on
//! each other, so there is no cross-request state and no locking here; the
//! store and ledger are externally synchronized.
//!
//! There is no stampede suppression: concurrent misses for the same metric
//! each ask the source independently. The cache TTL bounds how often that
//! can happen.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{error, warn};

use crate::errors::SourceError;
use crate::ledger::BalanceLedger;
use crate::source::EthSource;
use crate::store::FastStore;
use crate::types::{wei_to_eth_string, BalanceRecord, EthStats, MetricKey};

/// Aggregates gas price, block number, and one address balance into a
/// single [`EthStats`] answer.
///
/// All collaborators are injected as capability traits, so tests can
/// substitute doubles for the chain source, the fast store, and the
/// ledger.
#[derive(Clone)]
pub struct StatsAggregator {
    source: Arc<dyn EthSource>,
    store: Arc<dyn FastStore>,
    ledger: Arc<dyn BalanceLedger>,
}

impl StatsAggregator {
    /// Creates an aggregator over the given collaborators.
    pub fn new(
        source: Arc<dyn EthSource>,
        store: Arc<dyn FastStore>,
        ledger: Arc<dyn BalanceLedger>,
    ) -> Self {
        Self {
            source,
            store,
            ledger,
        }
    }

    /// Resolves all three items for `address` and stamps the result with
    /// the current server time (RFC 3339).
    ///
    /// The first failing resolution short-circuits: partial results are
    /// discarded and the aggregate fails with that resolver's error. Side
    /// effects of resolutions that completed before the failure (cache
    /// refills, ledger rows) are not rolled back.
    pub async fn get(&self, address: &str) -> Result<EthStats, SourceError> {
        let gas_price = self.resolve_gas_price().await.inspect_err(|e| {
            error!(error = %e, "failed to resolve gas price");
        })?;

        let block_number = self.resolve_block_number().await.inspect_err(|e| {
            error!(error = %e, "failed to resolve block number");
        })?;

        let balance = self.resolve_balance(address).await.inspect_err(|e| {
            error!(error = %e, address, "failed to resolve balance");
        })?;

        Ok(EthStats {
            gas_price,
            block_number,
            balance,
            server_time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Cache-aside resolution of the gas price.
    ///
    /// A present, non-empty cached value short-circuits without touching
    /// the source. Otherwise the source is asked exactly once and the
    /// result is written back best-effort.
    async fn resolve_gas_price(&self) -> Result<String, SourceError> {
        if let Some(cached) = self.store.get(MetricKey::GasPrice).await {
            if !cached.is_empty() {
                return Ok(cached);
            }
        }

        let price = self.source.gas_price().await?;

        if let Err(e) = self
            .store
            .set(MetricKey::GasPrice, price.clone())
            .await
        {
            warn!(error = %e, "failed to cache gas price");
        }

        Ok(price)
    }

    /// Cache-aside resolution of the latest block number.
    ///
    /// An unparseable or zero cached value takes the fallback path, same
    /// as a miss. Treating zero as a miss means block 0 can never be
    /// served from cache; accepted, since a live chain tip is never at
    /// genesis.
    async fn resolve_block_number(&self) -> Result<u64, SourceError> {
        if let Some(cached) = self.store.get(MetricKey::BlockNumber).await {
            if let Ok(number) = cached.parse::<u64>() {
                if number != 0 {
                    return Ok(number);
                }
            }
        }

        let number = self.source.latest_block_number().await?;

        if let Err(e) = self
            .store
            .set(MetricKey::BlockNumber, number.to_string())
            .await
        {
            warn!(error = %e, "failed to cache block number");
        }

        Ok(number)
    }

    /// Uncached balance resolution with best-effort audit persistence.
    ///
    /// The ledger append is fire-and-forget: its outcome never alters the
    /// record returned to the caller.
    async fn resolve_balance(&self, address: &str) -> Result<BalanceRecord, SourceError> {
        let wei = self.source.balance_of(address).await?;
        let eth = wei_to_eth_string(wei);

        if let Err(e) = self.ledger.append(address, &eth).await {
            warn!(error = %e, address, "failed to record balance audit");
        }

        Ok(BalanceRecord {
            address: address.to_owned(),
            eth,
        })
    }
}
