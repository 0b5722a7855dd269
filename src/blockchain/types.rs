//! Chain-specific types and error definitions.

use std::str::FromStr;

use alloy::primitives::{utils::format_ether, Address, U256};
use thiserror::Error;

// Re-export BlockchainConfig from config module to avoid duplication
pub use crate::config::schema::BlockchainConfig;

/// Gas consumed by a plain native-token transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Transaction could not be assembled or signed locally.
    #[error("Signing error: {0}")]
    Signing(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Parse a user-supplied address string.
///
/// Accepts an optional `0x` prefix. All-lowercase and all-uppercase hex are
/// taken as-is; mixed case must be a valid EIP-55 checksum.
pub fn parse_address(input: &str) -> Option<Address> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(format!("0x{hex}"), None).ok()
    } else {
        Address::from_str(hex).ok()
    }
}

/// Render a wei amount as ETH for log lines and messages.
pub fn display_eth(wei: U256) -> String {
    format!("{} ETH", format_ether(wei))
}
