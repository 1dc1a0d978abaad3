pub mod api;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod source;
pub mod stats;
pub mod store;
pub mod types;

pub use config::EtherstatsConfig;
pub use errors::{CacheError, ConfigError, EtherstatsError, LedgerError, SourceError};
pub use ledger::{BalanceLedger, MemoryLedger};
pub use source::{EthSource, RpcEthSource};
pub use stats::StatsAggregator;
pub use store::{FastStore, MemoryStore};
pub use types::{wei_to_eth_string, BalanceAudit, BalanceRecord, EthStats, MetricKey};
