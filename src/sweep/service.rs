//! Sweep orchestration.
//!
//! # Flow
//! ```text
//! SweepRequest
//!     → resolve + validate destination
//!     → require a configured treasury
//!     → read balance and gas price
//!     → calculator.rs decides
//!     → build, sign, broadcast (only when sweepable)
//! ```
//!
//! There is no lock around this path. Two concurrent sweeps may both read the
//! same balance and both try to send; the node rejects the loser.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};

use crate::blockchain::transaction::build_transfer;
use crate::blockchain::types::{display_eth, parse_address};
use crate::blockchain::{ChainClient, Treasury};
use crate::sweep::calculator::{calculate_sweep, SweepDecision};
use crate::sweep::types::{SweepError, SweepOutcome, SweepRequest};

/// Moves the treasury balance, minus the transfer fee, to a destination.
pub struct SweepService {
    client: Arc<dyn ChainClient>,
    treasury: Treasury,
    default_destination: Option<Address>,
    explorer_url: String,
}

impl SweepService {
    pub fn new(
        client: Arc<dyn ChainClient>,
        treasury: Treasury,
        default_destination: Option<Address>,
        explorer_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            treasury,
            default_destination,
            explorer_url: explorer_url.into(),
        }
    }

    pub fn treasury(&self) -> &Treasury {
        &self.treasury
    }

    /// Run one sweep.
    pub async fn sweep(&self, request: SweepRequest) -> Result<SweepOutcome, SweepError> {
        let destination = self.resolve_destination(request.destination.as_deref())?;

        let Some(wallet) = self.treasury.wallet() else {
            tracing::warn!("Sweep requested but no treasury key is configured");
            return Err(SweepError::NotConfigured);
        };
        let from = wallet.address();

        let (balance, gas_price) = tokio::try_join!(
            self.client.get_balance(from),
            self.client.get_gas_price()
        )?;

        let quote = calculate_sweep(balance, gas_price);
        tracing::info!(
            wallet = %from,
            destination = %destination,
            balance = %quote.balance,
            gas_price = quote.gas_price,
            gas_cost = %quote.gas_cost,
            decision = ?quote.decision,
            "Sweep quote computed"
        );

        let amount = match quote.decision {
            SweepDecision::Sweepable(amount) => amount,
            SweepDecision::InsufficientBalance => {
                return Ok(SweepOutcome::Skipped {
                    message: format!(
                        "Balance too low to cover gas. Balance: {}, gas cost: {}",
                        display_eth(quote.balance),
                        display_eth(quote.gas_cost)
                    ),
                    balance: quote.balance,
                    gas_cost: quote.gas_cost,
                });
            }
            SweepDecision::ZeroAmount => {
                return Ok(SweepOutcome::Skipped {
                    message: format!(
                        "Nothing to sweep: balance exactly covers gas cost of {}",
                        display_eth(quote.gas_cost)
                    ),
                    balance: quote.balance,
                    gas_cost: quote.gas_cost,
                });
            }
        };

        let (nonce, chain_id) = tokio::try_join!(
            self.client.get_transaction_count(from),
            self.client.get_chain_id()
        )?;

        let tx = build_transfer(destination, amount, nonce, gas_price, chain_id);
        let envelope = wallet.sign_transaction(tx).await?;
        let tx_hash = self.client.send_transaction(envelope).await.map_err(|e| {
            tracing::error!(wallet = %from, destination = %destination, error = %e, "Sweep broadcast failed");
            e
        })?;

        tracing::info!(
            tx_hash = %tx_hash,
            amount = %amount,
            destination = %destination,
            nonce,
            chain_id,
            "Sweep transaction submitted"
        );

        Ok(SweepOutcome::Submitted {
            message: format!("Swept {} to {}", display_eth(amount), destination),
            transaction_hash: tx_hash,
            amount_sent: amount,
            destination,
            network_link: self.explorer_link(tx_hash),
        })
    }

    /// Pick the request override (if non-empty) or the configured default.
    fn resolve_destination(&self, requested: Option<&str>) -> Result<Address, SweepError> {
        match requested.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_address(raw).ok_or_else(|| {
                tracing::warn!(destination = raw, "Rejected sweep destination");
                SweepError::InvalidAddress(raw.to_string())
            }),
            None => self.default_destination.ok_or_else(|| {
                SweepError::InvalidAddress("no destination supplied and none configured".to_string())
            }),
        }
    }

    fn explorer_link(&self, tx_hash: TxHash) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }
}

impl std::fmt::Debug for SweepService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepService")
            .field("treasury", &self.treasury.display_address())
            .field("default_destination", &self.default_destination)
            .field("explorer_url", &self.explorer_url)
            .finish()
    }
}
