use std::path::PathBuf;

use alloy::primitives::address;

use crate::prelude::*;

pub const DEFAULT_NODE_URL: &str = "https://opbnb.rpc.thirdweb.com";
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("9465fe0e8cdf4e425e0c59b7caeccc1777dc6695");
pub const DEFAULT_KEYS_PATH: &str = "./keys.txt";
pub const DEFAULT_ITERATIONS: usize = 5;
pub const DEFAULT_PAUSE_MIN_MS: u64 = 25_000;
pub const DEFAULT_PAUSE_MAX_MS: u64 = 73_000;

/// opBNB mainnet.
pub const DEFAULT_CHAIN_ID: u64 = 204;

/// 0.00001 gwei
pub const DEFAULT_MAX_PRIORITY_FEE_PER_GAS: u128 = 10_000;

/// 0.000010024 gwei
pub const DEFAULT_MAX_FEE_PER_GAS: u128 = 10_024;

pub const DEFAULT_GAS_LIMIT: u64 = 100_000;
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://opbnbscan.com/tx/";

/// Everything a run needs, fixed at startup.
///
/// The fee values are sent as-is, they are never estimated from the network.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct Settings {
    #[getset(get = "pub")]
    node_url: Url,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_CONTRACT_ADDRESS)]
    contract_address: Address,

    #[getset(get = "pub")]
    #[builder(into, default = PathBuf::from(DEFAULT_KEYS_PATH))]
    keys_path: PathBuf,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_ITERATIONS)]
    iterations: usize,

    #[getset(get = "pub")]
    #[builder(default)]
    pause: PauseBounds,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_CHAIN_ID)]
    chain_id: u64,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_MAX_PRIORITY_FEE_PER_GAS)]
    max_priority_fee_per_gas: u128,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_MAX_FEE_PER_GAS)]
    max_fee_per_gas: u128,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_GAS_LIMIT)]
    gas_limit: u64,

    #[getset(get = "pub")]
    #[builder(into, default = DEFAULT_EXPLORER_TX_URL.to_owned())]
    explorer_tx_url: String,
}

impl Settings {
    pub fn explorer_link(&self, transaction_hash: &TxHash) -> String {
        explorer_link(&self.explorer_tx_url, transaction_hash)
    }
}

pub(crate) fn explorer_link(explorer_tx_url: &str, transaction_hash: &TxHash) -> String {
    format!("{explorer_tx_url}{transaction_hash}")
}
