use getset::MutGetters;

use crate::prelude::*;

#[derive(Debug, Getters, MutGetters, Builder)]
pub struct SigninRunner<C> {
    #[getset(get = "pub")]
    sender: TransactionSender<C>,

    #[getset(get = "pub", get_mut = "pub")]
    keys: KeyList,

    #[getset(get = "pub")]
    iterations: usize,

    #[getset(get = "pub")]
    pause: PauseBounds,

    #[getset(get = "pub")]
    #[builder(into, default = DEFAULT_EXPLORER_TX_URL.to_owned())]
    explorer_tx_url: String,
}
