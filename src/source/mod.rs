//! Authoritative chain source
//!
//! The source is the system of record for all three queried values. It is
//! consulted whenever the fast store cannot answer, and always for
//! balances. The aggregation pipeline only sees the [`EthSource`] trait;
//! the shipped implementation dials an Ethereum JSON-RPC endpoint through
//! Alloy.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;
use async_trait::async_trait;
use url::Url;

use crate::errors::SourceError;
use crate::types::wei_to_eth_string;

/// Trait for the authoritative data source.
///
/// All three calls may fail due to upstream unavailability; callers treat
/// every failure the same way and do not interpret sub-types. Retries, if
/// any, belong behind this trait, not in front of it.
#[async_trait]
pub trait EthSource: Send + Sync {
    /// Current suggested gas price as an ETH decimal string.
    async fn gas_price(&self) -> Result<String, SourceError>;

    /// Latest block number.
    async fn latest_block_number(&self) -> Result<u64, SourceError>;

    /// Balance of an address in wei, at the latest block.
    async fn balance_of(&self, address: &str) -> Result<U256, SourceError>;
}

/// [`EthSource`] backed by an Ethereum JSON-RPC provider over HTTP.
#[derive(Clone)]
pub struct RpcEthSource {
    provider: RootProvider<Ethereum>,
}

impl RpcEthSource {
    /// Creates a source dialing the given RPC endpoint.
    pub fn new(rpc_url: Url) -> Self {
        let client = ClientBuilder::default().http(rpc_url);
        // Recommended fillers are for transaction building; this source
        // only reads, so a bare RootProvider is all we need.
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_client(client);

        Self { provider }
    }
}

#[async_trait]
impl EthSource for RpcEthSource {
    async fn gas_price(&self) -> Result<String, SourceError> {
        let wei = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| SourceError::rpc("gas price fetch", e))?;

        // Reported in ETH for human readability, matching the balance format.
        Ok(wei_to_eth_string(U256::from(wei)))
    }

    async fn latest_block_number(&self) -> Result<u64, SourceError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| SourceError::rpc("block number fetch", e))
    }

    async fn balance_of(&self, address: &str) -> Result<U256, SourceError> {
        let address: Address = address.parse().map_err(|_| SourceError::InvalidAddress {
            address: address.to_owned(),
        })?;

        self.provider
            .get_balance(address)
            .await
            .map_err(|e| SourceError::rpc("balance fetch", e))
    }
}
