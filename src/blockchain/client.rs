//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state (balance, gas price, nonce, chain id)
//! - Broadcast locally signed transactions
//! - Optionally bound each RPC call with a timeout

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use alloy::consensus::TxEnvelope;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainConfig, BlockchainError, BlockchainResult};

/// The chain operations the sweep path depends on.
///
/// Implemented by [`RpcChainClient`] in production and by in-memory fakes in
/// tests.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Balance of `address` in wei.
    async fn get_balance(&self, address: Address) -> BlockchainResult<U256>;

    /// Current network gas price in wei.
    async fn get_gas_price(&self) -> BlockchainResult<u128>;

    /// Chain id reported by the node.
    async fn get_chain_id(&self) -> BlockchainResult<u64>;

    /// Pending transaction count (next nonce) for `address`.
    async fn get_transaction_count(&self, address: Address) -> BlockchainResult<u64>;

    /// Broadcast a signed transaction and return its hash.
    async fn send_transaction(&self, envelope: TxEnvelope) -> BlockchainResult<TxHash>;
}

/// JSON-RPC client backed by an alloy HTTP provider.
#[derive(Clone)]
pub struct RpcChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    config: BlockchainConfig,
    /// `None` means calls wait as long as the node takes.
    timeout_duration: Option<Duration>,
}

impl RpcChainClient {
    /// Create a new client for the configured endpoint.
    ///
    /// Connecting is lazy; an unreachable node only surfaces on first use.
    pub fn new(config: BlockchainConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        // Only the HTTP transport is wired up.
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BlockchainError::Rpc(format!(
                "Unsupported RPC URL scheme '{}' in '{}'",
                url.scheme(),
                config.rpc_url
            )));
        }
        let provider = Arc::new(ProviderBuilder::new().connect_http(url))
            as Arc<dyn Provider + Send + Sync>;

        Ok(Self {
            provider,
            timeout_duration: config.rpc_timeout_secs.map(Duration::from_secs),
            config,
        })
    }

    /// Compare the node's chain id with the configured one, if any.
    ///
    /// A mismatch or an unreachable node is logged but not fatal. The check
    /// gives up after `limit` even when RPC calls are otherwise unbounded.
    pub async fn verify_chain_id(&self, limit: Duration) {
        let Some(expected) = self.config.chain_id else {
            return;
        };

        match timeout(limit, self.get_chain_id()).await {
            Ok(Ok(actual)) if actual == expected => {
                tracing::info!(rpc_url = %self.config.rpc_url, chain_id = actual, "Chain id verified");
            }
            Ok(Ok(actual)) => {
                tracing::warn!(expected, actual, "Connected node reports a different chain id");
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Could not verify chain id");
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = limit.as_secs(),
                    "Chain id check timed out, continuing startup"
                );
            }
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BlockchainConfig {
        &self.config
    }

    async fn call<T, E, F>(&self, op: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let result = match self.timeout_duration {
            Some(limit) => timeout(limit, fut).await.map_err(|_| {
                tracing::warn!(op, timeout_secs = limit.as_secs(), "RPC timeout");
                BlockchainError::Timeout(limit.as_secs())
            })?,
            None => fut.await,
        };

        result.map_err(|e| {
            tracing::warn!(op, error = %e, "RPC error");
            BlockchainError::Rpc(e.to_string())
        })
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        self.call("eth_getBalance", self.provider.get_balance(address))
            .await
    }

    async fn get_gas_price(&self) -> BlockchainResult<u128> {
        self.call("eth_gasPrice", self.provider.get_gas_price()).await
    }

    async fn get_chain_id(&self) -> BlockchainResult<u64> {
        self.call("eth_chainId", self.provider.get_chain_id()).await
    }

    async fn get_transaction_count(&self, address: Address) -> BlockchainResult<u64> {
        self.call(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address).pending(),
        )
        .await
    }

    async fn send_transaction(&self, envelope: TxEnvelope) -> BlockchainResult<TxHash> {
        let pending = self
            .call(
                "eth_sendRawTransaction",
                self.provider.send_tx_envelope(envelope),
            )
            .await?;
        Ok(*pending.tx_hash())
    }
}

impl std::fmt::Debug for RpcChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
