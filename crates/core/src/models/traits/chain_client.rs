use crate::prelude::*;

/// The JSON-RPC calls a run depends on.
///
/// Implementations must not retry, cache nonces, or apply timeouts of their
/// own. Every error is surfaced to the caller as-is.
#[async_trait::async_trait]
pub trait ChainClient: Send + Sync {
    /// `eth_chainId`
    async fn chain_id(&self) -> Result<u64>;

    /// `eth_getTransactionCount` at the latest block.
    async fn get_transaction_count(&self, address: Address) -> Result<Nonce>;

    /// `eth_sendRawTransaction`, then waits until the transaction is mined.
    async fn send_raw_transaction(&self, raw_transaction: Bytes) -> Result<Receipt>;
}
