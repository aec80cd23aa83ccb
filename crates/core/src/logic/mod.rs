mod load_keys;
mod pause;
mod rpc_chain_client;
mod runner;
mod send_transaction;
mod shuffle;

#[cfg(test)]
mod mock_chain_client;

pub use load_keys::*;
pub use pause::*;
pub use rpc_chain_client::*;
pub use shuffle::*;

#[cfg(test)]
pub(crate) use mock_chain_client::*;
