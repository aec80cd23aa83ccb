use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Node url invalid {bad_value}")]
    NodeUrlInvalid { bad_value: String },

    #[error("Contract address invalid {bad_value}")]
    ContractAddressInvalid { bad_value: String },

    #[error("Pause min {min_ms} ms must not exceed pause max {max_ms} ms")]
    PauseBoundsInverted { min_ms: u64, max_ms: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Core error: {0}")]
    CoreError(#[from] Error),

    #[error("Failed to initialize logging: {underlying}")]
    LoggingInit { underlying: String },
}
