mod chain_client;

pub use chain_client::*;
