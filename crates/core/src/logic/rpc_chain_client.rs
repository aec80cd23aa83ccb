use alloy::{
    eips::BlockId,
    network::ReceiptResponse,
    providers::{DynProvider, Provider, ProviderBuilder},
};

use crate::prelude::*;

/// [`ChainClient`] over an alloy HTTP provider.
///
/// No fillers are installed, nonce and fees are always set by the caller.
#[derive(Clone, derive_more::Debug)]
#[debug("RpcChainClient({node_url})")]
pub struct RpcChainClient {
    node_url: Url,
    provider: DynProvider,
}

impl RpcChainClient {
    pub fn connect(node_url: Url) -> Self {
        debug!("Connecting to {node_url}");
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(node_url.clone())
            .erased();
        Self { node_url, provider }
    }
}

#[async_trait::async_trait]
impl ChainClient for RpcChainClient {
    async fn chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.map_err(|e| {
            BootstrapError::ChainIdFetchFailed {
                underlying: e.to_string(),
            }
            .into()
        })
    }

    async fn get_transaction_count(&self, address: Address) -> Result<Nonce> {
        self.provider
            .get_transaction_count(address)
            .block_id(BlockId::latest())
            .await
            .map_err(|e| Error::GetNonce {
                address,
                underlying: e.to_string(),
            })
    }

    async fn send_raw_transaction(&self, raw_transaction: Bytes) -> Result<Receipt> {
        let pending = self
            .provider
            .send_raw_transaction(&raw_transaction)
            .await
            .map_err(|e| Error::Broadcast {
                underlying: e.to_string(),
            })?;
        let transaction_hash = *pending.tx_hash();
        debug!("Broadcast {transaction_hash}, awaiting receipt");

        let receipt = pending.get_receipt().await.map_err(|e| Error::Receipt {
            transaction_hash,
            underlying: e.to_string(),
        })?;

        Ok(Receipt::builder()
            .transaction_hash(receipt.transaction_hash)
            .maybe_block_number(receipt.block_number)
            .gas_used(receipt.gas_used)
            .success(ReceiptResponse::status(&receipt))
            .build())
    }
}
