//! Test doubles for the aggregation pipeline collaborators
//!
//! The mocks here count every call so tests can assert the cache-aside
//! short-circuit and exactly-once fallback properties, and each
//! collaborator has a failing variant for the error-policy tests.

// Each test binary compiles this module independently and uses a subset.
#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::U256;
use async_trait::async_trait;

use etherstats::{
    BalanceLedger, CacheError, EthSource, FastStore, LedgerError, MetricKey, SourceError,
};

fn source_unavailable(operation: &str) -> SourceError {
    SourceError::rpc(operation, io::Error::other("source unreachable"))
}

/// Scripted authoritative source that counts every call.
///
/// Each value is either configured or "unavailable"; an unconfigured value
/// makes the corresponding call fail the way a dead RPC endpoint would.
#[derive(Debug, Default)]
pub struct MockSource {
    gas_price: Option<String>,
    block_number: Option<u64>,
    balance: Option<U256>,
    pub gas_price_calls: AtomicUsize,
    pub block_number_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
}

impl MockSource {
    /// Source where every call fails.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Source answering all three queries with the given values.
    pub fn new(gas_price: &str, block_number: u64, balance: U256) -> Self {
        Self {
            gas_price: Some(gas_price.to_string()),
            block_number: Some(block_number),
            balance: Some(balance),
            ..Self::default()
        }
    }

    /// Makes balance queries fail while the metric queries keep working.
    pub fn with_unreachable_balance(mut self) -> Self {
        self.balance = None;
        self
    }
}

#[async_trait]
impl EthSource for MockSource {
    async fn gas_price(&self) -> Result<String, SourceError> {
        self.gas_price_calls.fetch_add(1, Ordering::SeqCst);
        self.gas_price
            .clone()
            .ok_or_else(|| source_unavailable("gas price fetch"))
    }

    async fn latest_block_number(&self) -> Result<u64, SourceError> {
        self.block_number_calls.fetch_add(1, Ordering::SeqCst);
        self.block_number
            .ok_or_else(|| source_unavailable("block number fetch"))
    }

    async fn balance_of(&self, _address: &str) -> Result<U256, SourceError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.balance
            .ok_or_else(|| source_unavailable("balance fetch"))
    }
}

/// Fast store where reads miss and writes fail.
///
/// A store read error is indistinguishable from a miss by contract, so
/// `get` simply returns `None`; `set` reports the outage.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub set_calls: AtomicUsize,
}

#[async_trait]
impl FastStore for FailingStore {
    async fn get(&self, _key: MetricKey) -> Option<String> {
        None
    }

    async fn set(&self, key: MetricKey, _value: String) -> Result<(), CacheError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::write_failed(
            key,
            io::Error::other("store unreachable"),
        ))
    }
}

/// Ledger where every append fails.
#[derive(Debug, Default)]
pub struct FailingLedger {
    pub append_calls: AtomicUsize,
}

#[async_trait]
impl BalanceLedger for FailingLedger {
    async fn append(
        &self,
        address: &str,
        _eth: &str,
    ) -> Result<etherstats::BalanceAudit, LedgerError> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        Err(LedgerError::append_failed(
            address,
            io::Error::other("ledger unreachable"),
        ))
    }
}
