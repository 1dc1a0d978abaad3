//! Error types for the best-effort store collaborators.
//!
//! Both error types here are non-fatal by policy: the resolvers log them
//! and keep the freshly fetched value. Neither converts into
//! [`EtherstatsError`](super::EtherstatsError), which keeps them off the
//! primary result path by construction.

use crate::types::MetricKey;

/// Errors that can occur writing to the fast metric store.
///
/// Read-side failures never surface as errors at all: the store contract
/// folds them into a cache miss.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Writing a metric value back to the store failed.
    #[error("Cache write failed for key {key}")]
    WriteFailed {
        /// The metric whose write failed
        key: MetricKey,
        /// The underlying store error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CacheError {
    /// Helper to create a `WriteFailed` error from any store error type.
    pub fn write_failed(
        key: MetricKey,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CacheError::WriteFailed {
            key,
            source: Box::new(source),
        }
    }
}

/// Errors that can occur appending to the durable balance ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Appending an audit row failed.
    #[error("Ledger append failed for {address}")]
    AppendFailed {
        /// The address whose audit row was dropped
        address: String,
        /// The underlying ledger error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LedgerError {
    /// Helper to create an `AppendFailed` error from any ledger error type.
    pub fn append_failed(
        address: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LedgerError::AppendFailed {
            address: address.into(),
            source: Box::new(source),
        }
    }
}
