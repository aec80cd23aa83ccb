use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder, derive_more::Display)]
#[display("Receipt {{ hash: {transaction_hash}, success: {success} }}")]
pub struct Receipt {
    #[getset(get = "pub")]
    transaction_hash: TxHash,

    /// `None` only if the node returned a receipt without inclusion data.
    #[getset(get = "pub")]
    block_number: Option<u64>,

    #[getset(get = "pub")]
    #[builder(default)]
    gas_used: u64,

    #[getset(get = "pub")]
    success: bool,
}
