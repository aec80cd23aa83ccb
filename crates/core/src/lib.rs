mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Alloy
    pub use alloy::primitives::{Address, Bytes, TxHash, U256};
    pub use alloy::signers::local::PrivateKeySigner;

    // Third Party Crates
    pub use bon::Builder;
    pub use derive_more::{AsRef, Deref, From};
    pub use getset::{CopyGetters, Getters};
    pub use log::{debug, error, info, warn};
    pub use url::Url;
}
