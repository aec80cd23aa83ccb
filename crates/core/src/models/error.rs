use std::path::PathBuf;

use crate::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load keys from {}: {underlying}", .path.display())]
    LoadKeys { path: PathBuf, underlying: String },

    /// Never carries the key itself.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Invalid pause bounds, min {min_ms} ms is greater than max {max_ms} ms")]
    InvalidPauseBounds { min_ms: u64, max_ms: u64 },

    #[error("Bootstrap error {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("Failed to fetch nonce for {address}: {underlying}")]
    GetNonce { address: Address, underlying: String },

    #[error("Failed to sign transaction from {address}: {underlying}")]
    Sign { address: Address, underlying: String },

    #[error("Failed to broadcast transaction: {underlying}")]
    Broadcast { underlying: String },

    #[error("Failed to fetch receipt for {transaction_hash}: {underlying}")]
    Receipt {
        transaction_hash: TxHash,
        underlying: String,
    },

    #[error("Transaction {transaction_hash} reverted")]
    TransactionReverted { transaction_hash: TxHash },
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to query chain id: {underlying}")]
    ChainIdFetchFailed { underlying: String },

    #[error("Chain id mismatch, expected {expected} but node reports {actual}")]
    ChainIdMismatch { expected: u64, actual: u64 },
}
