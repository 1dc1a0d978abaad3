//! Fast store for cacheable network-wide metrics
//!
//! The fast store holds exactly two scalar values (gas price and latest
//! block number) with TTL expiry. The aggregation pipeline reads it before
//! asking the chain, and refills it best-effort after a fallback fetch.
//!
//! # Error Handling
//!
//! Read failures never surface as errors: a store that cannot answer is
//! indistinguishable from a miss, and both take the fallback path. Write
//! failures are reported so callers can log them, but resolvers treat them
//! as non-fatal (caching is best-effort; an unavailable store degrades
//! performance, not correctness).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::CacheError;
use crate::types::MetricKey;

/// Trait for fast metric store backends.
///
/// Implementations must be thread-safe; use interior mutability (`Mutex`,
/// `RwLock`) as needed. Values are stored as strings so that an external
/// key/value store can hold them without a serialization scheme.
#[async_trait]
pub trait FastStore: Send + Sync {
    /// Retrieves the cached value for a metric.
    ///
    /// Returns `None` if:
    /// - The key is not in the store
    /// - The entry has expired
    /// - A read error occurred (logged internally)
    async fn get(&self, key: MetricKey) -> Option<String>;

    /// Writes a metric value with the store's configured TTL.
    ///
    /// Callers should typically log errors and continue; refilling the
    /// store is best-effort.
    async fn set(&self, key: MetricKey, value: String) -> Result<(), CacheError>;
}

/// In-memory fast store with TTL expiry.
///
/// Entries expire `ttl` after they were written; expiry is checked on read.
/// Stale entries are not swept eagerly - there are only two keys and each
/// refill overwrites in place.
#[derive(Debug)]
pub struct MemoryStore {
    ttl: Duration,
    entries: RwLock<HashMap<MetricKey, StoreEntry>>,
}

#[derive(Debug, Clone)]
struct StoreEntry {
    value: String,
    written_at: Instant,
}

impl MemoryStore {
    /// Creates a store whose entries expire `ttl` after each write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl FastStore for MemoryStore {
    async fn get(&self, key: MetricKey) -> Option<String> {
        let entries = self.entries.read().await;
        let entry = entries.get(&key)?;
        if entry.written_at.elapsed() >= self.ttl {
            debug!(%key, "cached metric expired");
            return None;
        }
        Some(entry.value.clone())
    }

    async fn set(&self, key: MetricKey, value: String) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            StoreEntry {
                value,
                written_at: Instant::now(),
            },
        );
        Ok(())
    }
}
