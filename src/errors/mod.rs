//! Error types for the etherstats service.
//!
//! Each collaborator has its own error type, and the fatality policy is
//! encoded in the conversions rather than in call-site discipline:
//!
//! - [`SourceError`] - the authoritative source failed; fatal, aborts the
//!   whole aggregate request
//! - [`CacheError`] - a fast-store write failed; non-fatal, logged and
//!   discarded by the resolver
//! - [`LedgerError`] - a durable audit append failed; non-fatal, logged and
//!   discarded by the resolver
//! - [`ConfigError`] - configuration loading failed at startup
//!
//! Only the fatal conditions convert into the unified [`EtherstatsError`];
//! the best-effort ones deliberately have no `From` impl into it, so they
//! cannot leak onto the primary result path via `?`.

mod config;
mod source;
mod store;

pub use config::ConfigError;
pub use source::SourceError;
pub use store::{CacheError, LedgerError};

/// Unified error type for etherstats operations.
///
/// This is what the request boundary and the binary see. It wraps the
/// fatal error sources; `?` converts them naturally via `From`.
#[derive(Debug, thiserror::Error)]
pub enum EtherstatsError {
    /// The authoritative source could not answer.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Service configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
