//! Error types for configuration loading.

/// Errors that can occur while reading service configuration from the
/// environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("env variable {name} is not defined")]
    MissingVar {
        /// Name of the missing variable
        name: &'static str,
    },

    /// An environment variable is present but could not be parsed.
    #[error("invalid value for {name}: {details}")]
    InvalidVar {
        /// Name of the offending variable
        name: &'static str,
        /// Why the value was rejected
        details: String,
    },
}
