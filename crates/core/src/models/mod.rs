mod account;
mod contract;
mod error;
mod key_list;
mod pause_bounds;
mod receipt;
mod run_report;
mod runner;
mod settings;
mod traits;
mod transaction_descriptor;
mod transaction_sender;
mod transaction_settings;

pub use account::*;
pub use contract::*;
pub use error::*;
pub use key_list::*;
pub use pause_bounds::*;
pub use receipt::*;
pub use run_report::*;
pub use runner::*;
pub use settings::*;
pub use traits::*;
pub use transaction_descriptor::*;
pub use transaction_sender::*;
pub use transaction_settings::*;
