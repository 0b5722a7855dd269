//! Sweep amount calculation.
//!
//! Pure integer arithmetic on wei: no I/O, no floating point.

use alloy::primitives::U256;

use crate::blockchain::types::TRANSFER_GAS_LIMIT;

/// What to do with the treasury balance at the quoted gas price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDecision {
    /// Balance does not cover the transfer fee.
    InsufficientBalance,
    /// Balance covers the fee exactly, leaving nothing to send.
    ZeroAmount,
    /// Send this many wei.
    Sweepable(U256),
}

/// Inputs and result of one sweep calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepQuote {
    pub balance: U256,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub gas_cost: U256,
    pub decision: SweepDecision,
}

impl SweepQuote {
    /// Amount that would be sent, zero unless sweepable.
    pub fn amount(&self) -> U256 {
        match self.decision {
            SweepDecision::Sweepable(amount) => amount,
            _ => U256::ZERO,
        }
    }
}

/// Compute the transferable amount for `balance` at `gas_price`.
pub fn calculate_sweep(balance: U256, gas_price: u128) -> SweepQuote {
    // u128 * 21000 is far below 2^256, no overflow possible.
    let gas_cost = U256::from(gas_price) * U256::from(TRANSFER_GAS_LIMIT);

    let decision = match balance.checked_sub(gas_cost) {
        None => SweepDecision::InsufficientBalance,
        Some(amount) if amount.is_zero() => SweepDecision::ZeroAmount,
        Some(amount) => SweepDecision::Sweepable(amount),
    };

    SweepQuote {
        balance,
        gas_price,
        gas_limit: TRANSFER_GAS_LIMIT,
        gas_cost,
        decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ETH: u128 = 1_000_000_000_000_000_000;
    const TWENTY_GWEI: u128 = 20_000_000_000;

    #[test]
    fn test_one_eth_at_twenty_gwei() {
        let quote = calculate_sweep(U256::from(ONE_ETH), TWENTY_GWEI);
        assert_eq!(quote.gas_limit, 21_000);
        assert_eq!(quote.gas_cost, U256::from(420_000_000_000_000u128));
        assert_eq!(
            quote.decision,
            SweepDecision::Sweepable(U256::from(999_580_000_000_000_000u128))
        );
        assert_eq!(quote.amount() + quote.gas_cost, quote.balance);
    }

    #[test]
    fn test_insufficient_balance() {
        let quote = calculate_sweep(U256::from(400_000_000_000_000u128), TWENTY_GWEI);
        assert_eq!(quote.decision, SweepDecision::InsufficientBalance);
        assert_eq!(quote.amount(), U256::ZERO);
    }

    #[test]
    fn test_exact_fee_is_zero_amount() {
        let quote = calculate_sweep(U256::from(TWENTY_GWEI * 21_000), TWENTY_GWEI);
        assert_eq!(quote.decision, SweepDecision::ZeroAmount);
    }

    #[test]
    fn test_one_wei_over_fee() {
        let quote = calculate_sweep(U256::from(TWENTY_GWEI * 21_000 + 1), TWENTY_GWEI);
        assert_eq!(quote.decision, SweepDecision::Sweepable(U256::from(1u64)));
    }

    #[test]
    fn test_empty_wallet() {
        assert_eq!(
            calculate_sweep(U256::ZERO, 1).decision,
            SweepDecision::InsufficientBalance
        );
        // Free gas still leaves nothing to move out of an empty wallet.
        assert_eq!(calculate_sweep(U256::ZERO, 0).decision, SweepDecision::ZeroAmount);
    }

    #[test]
    fn test_no_precision_loss_on_large_values() {
        let balance = U256::MAX;
        let gas_price = u128::MAX;
        let quote = calculate_sweep(balance, gas_price);
        assert_eq!(quote.gas_cost, U256::from(u128::MAX) * U256::from(21_000u64));
        assert_eq!(quote.amount() + quote.gas_cost, balance);
    }

    #[test]
    fn test_boundaries_across_prices() {
        for gas_price in [1u128, 7, 1_000_000_000, TWENTY_GWEI, 500_000_000_000] {
            let fee = U256::from(gas_price) * U256::from(21_000u64);
            assert_eq!(
                calculate_sweep(fee - U256::from(1u64), gas_price).decision,
                SweepDecision::InsufficientBalance
            );
            assert_eq!(calculate_sweep(fee, gas_price).decision, SweepDecision::ZeroAmount);
            let quote = calculate_sweep(fee + U256::from(123u64), gas_price);
            assert_eq!(quote.decision, SweepDecision::Sweepable(U256::from(123u64)));
            assert_eq!(quote.amount() + quote.gas_cost, quote.balance);
        }
    }
}
