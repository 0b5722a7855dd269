//! Sweep request, outcome and error types.

use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::blockchain::types::BlockchainError;

/// Body of `POST /api/sweep/eth`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SweepRequest {
    /// Overrides the configured destination when non-empty.
    #[serde(default)]
    pub destination: Option<String>,
}

/// Result of a sweep that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SweepOutcome {
    /// Nothing was sent; the balance does not exceed the fee.
    Skipped {
        message: String,
        #[serde(serialize_with = "wei_decimal")]
        balance: U256,
        #[serde(rename = "gasCost", serialize_with = "wei_decimal")]
        gas_cost: U256,
    },
    /// A transfer was broadcast.
    Submitted {
        message: String,
        #[serde(rename = "transactionHash")]
        transaction_hash: TxHash,
        #[serde(rename = "amountSent", serialize_with = "wei_decimal")]
        amount_sent: U256,
        destination: Address,
        #[serde(rename = "networkLink")]
        network_link: String,
    },
}

/// Wei amounts go over the wire as exact decimal strings.
fn wei_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Errors surfaced by the sweep path.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Destination missing or not a well-formed address.
    #[error("Invalid destination address: {0}")]
    InvalidAddress(String),

    /// Request body could not be decoded.
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    /// No treasury key was supplied at startup.
    #[error("Sweep is not configured: treasury private key missing")]
    NotConfigured,

    /// Provider, network or signing failure.
    #[error("Sweep execution failed")]
    ExecutionFailed(#[from] BlockchainError),
}
