//! Error types for authoritative source operations.
//!
//! A source failure is the only fatal condition in the service: it aborts
//! the enclosing resolution and the whole aggregate request. The service
//! does not interpret upstream error sub-types; everything the provider
//! reports is carried here with operation context for debugging.

/// Errors that can occur while querying the authoritative chain source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The RPC call to the chain provider failed.
    ///
    /// This covers network errors, timeouts, rate limiting, and
    /// provider-side failures. The operation string names what was being
    /// fetched (e.g. "gas price fetch").
    #[error("Chain connection failed during {operation}")]
    Rpc {
        /// Description of the operation that failed
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The address could not be understood by the source implementation.
    ///
    /// Addresses are opaque to the aggregation pipeline; only the concrete
    /// source that has to dial the chain parses them.
    #[error("Invalid address: {address}")]
    InvalidAddress {
        /// The address string that failed to parse
        address: String,
    },
}

impl SourceError {
    /// Helper to create an `Rpc` error from any provider error type.
    pub fn rpc(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SourceError::Rpc {
            operation: operation.into(),
            source: Box::new(source),
        }
    }
}
