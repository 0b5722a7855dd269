//! Transaction building for native-token transfers.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::types::TRANSFER_GAS_LIMIT;

/// Build a legacy value transfer with every field the signer needs.
///
/// # Arguments
/// * `to` - Destination address
/// * `value` - Amount of native token to send, in wei
/// * `nonce` - Sender's next nonce
/// * `gas_price` - Gas price in wei, as quoted by the node
/// * `chain_id` - Chain id for EIP-155 replay protection
pub fn build_transfer(
    to: Address,
    value: U256,
    nonce: u64,
    gas_price: u128,
    chain_id: u64,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(to)
        .with_value(value)
        .with_nonce(nonce)
        .with_gas_price(gas_price)
        .with_chain_id(chain_id)
        .with_gas_limit(TRANSFER_GAS_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::TxKind;

    #[test]
    fn test_build_transfer_fields() {
        let to = Address::repeat_byte(0x11);
        let tx = build_transfer(to, U256::from(5u64), 7, 3, 1);

        assert_eq!(tx.to, Some(TxKind::Call(to)));
        assert_eq!(tx.value, Some(U256::from(5u64)));
        assert_eq!(tx.nonce, Some(7));
        assert_eq!(tx.gas_price, Some(3));
        assert_eq!(tx.chain_id, Some(1));
        assert_eq!(tx.gas, Some(21_000));
        assert!(tx.max_fee_per_gas.is_none());
    }
}
