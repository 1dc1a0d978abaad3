//! Core data types for the stats aggregation pipeline

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod wei;

pub use wei::{wei_to_eth_string, WEI_PER_ETH};

/// Logical name of a cacheable network-wide metric.
///
/// These are the only two values the fast store holds. The variants map to
/// fixed store key names so that an external key/value store sees stable
/// keys across deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    /// Current suggested gas price, stored as an ETH decimal string
    GasPrice,
    /// Latest block number, stored as its decimal string form
    BlockNumber,
}

impl MetricKey {
    /// Fixed store key name for this metric
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricKey::GasPrice => "gas_price",
            MetricKey::BlockNumber => "block_number",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Balance of a single address, as reported to the caller.
///
/// The address is an opaque identifier here; validation (if any) happens in
/// the authoritative source implementation that has to dial the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceRecord {
    /// The queried address, echoed back unmodified
    pub address: String,
    /// Balance in ETH as an 18-fractional-digit decimal string
    #[serde(rename = "ethBalance")]
    pub eth: String,
}

/// The composed answer to a single stats request.
///
/// Built once per request and immutable afterwards. Field names on the wire
/// match the service's external JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EthStats {
    /// Current gas price in ETH as a decimal string
    #[serde(rename = "ethGasPrice")]
    pub gas_price: String,
    /// Latest block number
    #[serde(rename = "latestBlockNumber")]
    pub block_number: u64,
    /// Balance of the requested address
    pub balance: BalanceRecord,
    /// Server timestamp in RFC 3339, stamped at composition time
    #[serde(rename = "serverTime")]
    pub server_time: String,
}

/// One durable row recording a balance lookup.
///
/// Appended by the ledger on every successful balance fetch. Append-only:
/// nothing in the service updates or deletes these rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceAudit {
    /// Surrogate identifier generated by the ledger
    pub id: u64,
    /// The queried address
    pub address: String,
    /// Balance in ETH at lookup time
    pub balance: String,
    /// When the ledger accepted the row
    pub created_at: DateTime<Utc>,
}
