//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key, RPC URL)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC reads and broadcast)
//!     → transaction.rs (transfer request construction)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::{ChainClient, RpcChainClient};
pub use types::{parse_address, BlockchainConfig, BlockchainError, BlockchainResult};
pub use wallet::{Treasury, Wallet};
