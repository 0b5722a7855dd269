//! Treasury wallet and transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::consensus::TxEnvelope;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Address;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use secrecy::{ExposeSecret, SecretString};

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "TREASURY_PRIVATE_KEY";

/// Address reported when no signing key was supplied.
pub const UNCONFIGURED_WALLET_ADDRESS: &str = "not-configured";

/// Signing wallet holding the treasury key.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &SecretString) -> BlockchainResult<Self> {
        let raw = private_key_hex.expose_secret().trim();
        let key_hex = raw.strip_prefix("0x").unwrap_or(raw);

        // The parse error text never includes the key itself.
        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::info!(address = %signer.address(), "Treasury wallet initialized");

        Ok(Self { signer })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a fully populated transaction request into a broadcastable envelope.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> BlockchainResult<TxEnvelope> {
        let wallet = EthereumWallet::from(self.signer.clone());
        tx.build(&wallet)
            .await
            .map_err(|e| BlockchainError::Signing(e.to_string()))
    }
}

/// The treasury as seen by the sweep path: either a usable wallet or nothing.
#[derive(Debug, Clone)]
pub enum Treasury {
    Configured(Wallet),
    Unconfigured,
}

impl Treasury {
    /// Build the treasury from an optional key.
    ///
    /// `None` yields [`Treasury::Unconfigured`]; a malformed key is an error.
    pub fn from_key(private_key: Option<SecretString>) -> BlockchainResult<Self> {
        match private_key {
            Some(key) if !key.expose_secret().trim().is_empty() => {
                Wallet::from_private_key(&key).map(Treasury::Configured)
            }
            _ => {
                tracing::warn!(
                    env_var = PRIVATE_KEY_ENV_VAR,
                    "No treasury key supplied, sweeping is disabled"
                );
                Ok(Treasury::Unconfigured)
            }
        }
    }

    /// Load the treasury from `TREASURY_PRIVATE_KEY`.
    pub fn from_env() -> BlockchainResult<Self> {
        Self::from_key(std::env::var(PRIVATE_KEY_ENV_VAR).ok().map(SecretString::new))
    }

    /// The wallet, if a key was supplied.
    pub fn wallet(&self) -> Option<&Wallet> {
        match self {
            Treasury::Configured(wallet) => Some(wallet),
            Treasury::Unconfigured => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Treasury::Configured(_))
    }

    /// Checksummed wallet address, or the placeholder when unconfigured.
    pub fn display_address(&self) -> String {
        match self {
            Treasury::Configured(wallet) => wallet.address().to_checksum(None),
            Treasury::Unconfigured => UNCONFIGURED_WALLET_ADDRESS.to_string(),
        }
    }
}
