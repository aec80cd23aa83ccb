use std::collections::HashMap;
use std::sync::Mutex;

use alloy::{
    consensus::{Transaction, TxEnvelope},
    eips::eip2718::Decodable2718,
    primitives::keccak256,
};

use crate::prelude::*;

pub(crate) fn test_settings() -> Settings {
    Settings::builder()
        .node_url(Url::parse("http://localhost:8545").unwrap())
        .pause(PauseBounds::new(1_000, 2_000).unwrap())
        .build()
}

#[derive(Debug, Clone)]
pub(crate) struct SubmittedTransaction {
    pub(crate) hash: TxHash,
    pub(crate) envelope: TxEnvelope,
}

#[derive(Debug, Default)]
struct MockState {
    nonces: HashMap<Address, Nonce>,
    nonce_requests: Vec<Address>,
    send_attempts: usize,
    submitted: Vec<SubmittedTransaction>,
}

/// In memory chain that records every raw transaction it is handed.
///
/// Nonces advance per sender on every accepted transaction; a transaction
/// whose nonce does not match is rejected the way a node would.
#[derive(Debug)]
pub(crate) struct MockChainClient {
    chain_id: u64,
    fail_on_send: Option<usize>,
    revert_on_send: Option<usize>,
    state: Mutex<MockState>,
}

impl Default for MockChainClient {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            fail_on_send: None,
            revert_on_send: None,
            state: Mutex::default(),
        }
    }
}

impl MockChainClient {
    pub(crate) fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub(crate) fn with_nonce(self, address: Address, nonce: Nonce) -> Self {
        self.state.lock().unwrap().nonces.insert(address, nonce);
        self
    }

    /// 1-based index of the send attempt that fails to broadcast.
    pub(crate) fn failing_on_send(mut self, attempt: usize) -> Self {
        self.fail_on_send = Some(attempt);
        self
    }

    /// 1-based index of the send attempt that is mined but reverts.
    pub(crate) fn reverting_on_send(mut self, attempt: usize) -> Self {
        self.revert_on_send = Some(attempt);
        self
    }

    pub(crate) fn submitted(&self) -> Vec<SubmittedTransaction> {
        self.state.lock().unwrap().submitted.clone()
    }

    pub(crate) fn submitted_nonces(&self) -> Vec<Nonce> {
        self.submitted()
            .iter()
            .map(|tx| tx.envelope.nonce())
            .collect()
    }

    pub(crate) fn nonce_requests(&self) -> Vec<Address> {
        self.state.lock().unwrap().nonce_requests.clone()
    }

    pub(crate) fn send_attempts(&self) -> usize {
        self.state.lock().unwrap().send_attempts
    }
}

#[async_trait::async_trait]
impl ChainClient for MockChainClient {
    async fn chain_id(&self) -> Result<u64> {
        Ok(self.chain_id)
    }

    async fn get_transaction_count(&self, address: Address) -> Result<Nonce> {
        let mut state = self.state.lock().unwrap();
        state.nonce_requests.push(address);
        Ok(state.nonces.get(&address).copied().unwrap_or_default())
    }

    async fn send_raw_transaction(&self, raw_transaction: Bytes) -> Result<Receipt> {
        let mut state = self.state.lock().unwrap();
        state.send_attempts += 1;
        let attempt = state.send_attempts;

        if self.fail_on_send == Some(attempt) {
            return Err(Error::Broadcast {
                underlying: "insufficient funds for gas * price + value".to_owned(),
            });
        }

        let envelope = TxEnvelope::decode_2718(&mut raw_transaction.as_ref()).map_err(|e| {
            Error::Broadcast {
                underlying: e.to_string(),
            }
        })?;

        // The sender is always the account whose nonce was just requested.
        let sender = *state
            .nonce_requests
            .last()
            .expect("nonce is fetched before every send");
        let expected_nonce = state.nonces.get(&sender).copied().unwrap_or_default();
        if envelope.nonce() != expected_nonce {
            return Err(Error::Broadcast {
                underlying: format!("nonce too low: next nonce {expected_nonce}"),
            });
        }
        state.nonces.insert(sender, expected_nonce + 1);

        let hash = keccak256(&raw_transaction);
        state.submitted.push(SubmittedTransaction { hash, envelope });

        Ok(Receipt::builder()
            .transaction_hash(hash)
            .block_number(attempt as u64)
            .gas_used(21_000)
            .success(self.revert_on_send != Some(attempt))
            .build())
    }
}
