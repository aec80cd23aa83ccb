use crate::prelude::*;

pub type Nonce = u64;

/// Nonce and fee fields of a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, Builder)]
pub struct TransactionSettings {
    #[getset(get_copy = "pub")]
    nonce: Nonce,

    #[getset(get_copy = "pub")]
    max_priority_fee_per_gas: u128,

    #[getset(get_copy = "pub")]
    max_fee_per_gas: u128,
}
