mod cli_args;
mod cli_error;

pub use cli_args::*;
pub use cli_error::*;
