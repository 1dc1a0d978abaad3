//! Service configuration
//!
//! Configuration comes from the environment (an `.env` file is honored via
//! `dotenvy` in the bootstrap path):
//!
//! - `ETH_RPC_URL` - JSON-RPC endpoint of the authoritative source (required)
//! - `CACHE_TTL_SECS` - fast store TTL in seconds (default 60)
//! - `HTTP_ADDR` - listen address for the API server (default `0.0.0.0:3000`)

use std::time::Duration;

use url::Url;

use crate::errors::ConfigError;

/// Default TTL for cached metrics.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Default API listen address.
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration for the etherstats service.
#[derive(Debug, Clone)]
pub struct EtherstatsConfig {
    /// JSON-RPC endpoint of the chain source
    pub rpc_url: Url,
    /// How long cached metrics stay fresh
    pub cache_ttl: Duration,
    /// Listen address for the API server
    pub listen_addr: String,
}

impl EtherstatsConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url = dotenvy::var("ETH_RPC_URL")
            .map_err(|_| ConfigError::MissingVar { name: "ETH_RPC_URL" })?;
        let rpc_url: Url = rpc_url.parse().map_err(|e| ConfigError::InvalidVar {
            name: "ETH_RPC_URL",
            details: format!("{e}"),
        })?;

        let cache_ttl = match dotenvy::var("CACHE_TTL_SECS") {
            Ok(secs) => {
                let secs: u64 = secs.parse().map_err(|e| ConfigError::InvalidVar {
                    name: "CACHE_TTL_SECS",
                    details: format!("{e}"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_CACHE_TTL,
        };

        let listen_addr =
            dotenvy::var("HTTP_ADDR").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string());

        Ok(Self {
            rpc_url,
            cache_ttl,
            listen_addr,
        })
    }
}

impl Default for EtherstatsConfig {
    /// Local-node defaults, mainly useful in tests and examples.
    fn default() -> Self {
        Self {
            rpc_url: Url::parse("http://localhost:8545").expect("static URL is valid"),
            cache_ttl: DEFAULT_CACHE_TTL,
            listen_addr: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_a_local_node() {
        let config = EtherstatsConfig::default();
        assert_eq!(config.rpc_url.as_str(), "http://localhost:8545/");
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config.listen_addr, DEFAULT_HTTP_ADDR);
    }
}
