//! Durable ledger of balance lookups
//!
//! Every successful balance fetch is recorded as an audit row, independent
//! of cache state. The ledger is append-only: nothing in the service
//! updates or deletes rows. Appends are best-effort from the resolver's
//! point of view - a ledger outage silently drops audit rows but never
//! changes the value returned to the caller.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::LedgerError;
use crate::types::BalanceAudit;

/// Trait for balance ledger backends.
///
/// Implementations must be thread-safe. The returned [`BalanceAudit`]
/// carries the generated surrogate id and creation timestamp.
#[async_trait]
pub trait BalanceLedger: Send + Sync {
    /// Appends one audit row recording a balance lookup.
    async fn append(&self, address: &str, eth: &str) -> Result<BalanceAudit, LedgerError>;
}

/// In-memory append-only ledger.
///
/// Rows get monotonically increasing ids starting at 1, mirroring what a
/// relational store's serial column would hand out.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    rows: RwLock<Vec<BalanceAudit>>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rows in append order.
    pub async fn rows(&self) -> Vec<BalanceAudit> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl BalanceLedger for MemoryLedger {
    async fn append(&self, address: &str, eth: &str) -> Result<BalanceAudit, LedgerError> {
        let mut rows = self.rows.write().await;
        let audit = BalanceAudit {
            id: rows.len() as u64 + 1,
            address: address.to_owned(),
            balance: eth.to_owned(),
            created_at: Utc::now(),
        };
        rows.push(audit.clone());
        Ok(audit)
    }
}
