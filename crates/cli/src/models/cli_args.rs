use std::path::PathBuf;

use crate::prelude::*;
use clap::Parser;
use log::LevelFilter;

pub const BINARY_NAME: &str = "skygate-signin";

/// Repeatedly calls `signin(1)` on the SkyGate contract from every key in a
/// key file.
///
/// Each iteration shuffles the keys and sends one EIP-1559 transaction per
/// key, one at a time, pausing a random number of milliseconds between
/// sends. The first failure stops the run.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON-RPC endpoint transactions are sent through.
    #[arg(long, default_value_t = DEFAULT_NODE_URL.to_owned())]
    node_url: String,

    /// Contract `signin` is called on.
    #[arg(long, default_value_t = DEFAULT_CONTRACT_ADDRESS.to_string())]
    contract_address: String,

    /// File with one private key per line, blank lines are ignored.
    #[arg(long, default_value = DEFAULT_KEYS_PATH)]
    keys_path: PathBuf,

    /// Number of passes over the whole key list.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Lower bound of the pause between two sends, inclusive.
    #[arg(long, default_value_t = DEFAULT_PAUSE_MIN_MS)]
    pause_min_ms: u64,

    /// Upper bound of the pause between two sends, inclusive.
    #[arg(long, default_value_t = DEFAULT_PAUSE_MAX_MS)]
    pause_max_ms: u64,

    #[arg(long, default_value_t = DEFAULT_CHAIN_ID)]
    chain_id: u64,

    /// In wei, sent as-is without consulting the fee market.
    #[arg(long, default_value_t = DEFAULT_MAX_PRIORITY_FEE_PER_GAS)]
    max_priority_fee_per_gas: u128,

    /// In wei, sent as-is without consulting the fee market.
    #[arg(long, default_value_t = DEFAULT_MAX_FEE_PER_GAS)]
    max_fee_per_gas: u128,

    #[arg(long, default_value_t = DEFAULT_GAS_LIMIT)]
    gas_limit: u64,

    /// Prefix the transaction hash is appended to when logging a sent transaction.
    #[arg(long, default_value_t = DEFAULT_EXPLORER_TX_URL.to_owned())]
    explorer_tx_url: String,

    #[arg(long, env = "RUST_LOG", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl TryFrom<CliArgs> for Settings {
    type Error = InvalidCliArgs;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let Ok(node_url) = Url::parse(&args.node_url) else {
            return Err(InvalidCliArgs::NodeUrlInvalid {
                bad_value: args.node_url.clone(),
            });
        };
        let Ok(contract_address) = args.contract_address.parse::<Address>() else {
            return Err(InvalidCliArgs::ContractAddressInvalid {
                bad_value: args.contract_address.clone(),
            });
        };
        let pause = PauseBounds::new(args.pause_min_ms, args.pause_max_ms).map_err(|_| {
            InvalidCliArgs::PauseBoundsInverted {
                min_ms: args.pause_min_ms,
                max_ms: args.pause_max_ms,
            }
        })?;

        Ok(Settings::builder()
            .node_url(node_url)
            .contract_address(contract_address)
            .keys_path(args.keys_path)
            .iterations(args.iterations)
            .pause(pause)
            .chain_id(args.chain_id)
            .max_priority_fee_per_gas(args.max_priority_fee_per_gas)
            .max_fee_per_gas(args.max_fee_per_gas)
            .gas_limit(args.gas_limit)
            .explorer_tx_url(args.explorer_tx_url)
            .build())
    }
}
