use alloy::{
    consensus::{SignableTransaction, TxEip1559, TxEnvelope},
    eips::eip2718::Encodable2718,
    network::TxSignerSync,
    primitives::TxKind,
};

use crate::prelude::*;

/// EIP-1559, the only transaction type ever sent.
pub const TRANSACTION_TYPE: u8 = 0x2;

/// Unsigned contract call, built right before signing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct TransactionDescriptor {
    #[getset(get = "pub")]
    from: Address,

    #[getset(get = "pub")]
    to: Address,

    #[getset(get = "pub")]
    input: Bytes,

    #[getset(get = "pub")]
    settings: TransactionSettings,

    #[getset(get = "pub")]
    chain_id: u64,

    #[getset(get = "pub")]
    gas_limit: u64,
}

/// A signed EIP-2718 envelope, ready for `eth_sendRawTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SignedTransaction {
    #[getset(get = "pub")]
    hash: TxHash,

    #[getset(get = "pub")]
    raw: Bytes,
}

impl TransactionDescriptor {
    fn to_eip1559(&self) -> TxEip1559 {
        TxEip1559 {
            chain_id: self.chain_id,
            nonce: self.settings.nonce(),
            gas_limit: self.gas_limit,
            max_fee_per_gas: self.settings.max_fee_per_gas(),
            max_priority_fee_per_gas: self.settings.max_priority_fee_per_gas(),
            to: TxKind::Call(self.to),
            value: U256::ZERO,
            access_list: Default::default(),
            input: self.input.clone(),
        }
    }

    pub fn sign(&self, account: &Account) -> Result<SignedTransaction> {
        debug_assert_eq!(&self.from, account.address());
        let mut tx = self.to_eip1559();
        let signature = account
            .signer()
            .sign_transaction_sync(&mut tx)
            .map_err(|e| Error::Sign {
                address: *account.address(),
                underlying: e.to_string(),
            })?;
        let signed = tx.into_signed(signature);
        let hash = *signed.hash();
        let raw = TxEnvelope::from(signed).encoded_2718();
        Ok(SignedTransaction {
            hash,
            raw: raw.into(),
        })
    }
}
