use crate::prelude::*;

/// Builds, signs and broadcasts `signin` transactions through a
/// [`ChainClient`].
#[derive(Debug, Getters, Builder)]
pub struct TransactionSender<C> {
    #[getset(get = "pub")]
    client: C,

    #[getset(get = "pub")]
    contract: SigninContract,

    #[getset(get = "pub")]
    chain_id: u64,

    #[getset(get = "pub")]
    gas_limit: u64,

    #[getset(get = "pub")]
    max_priority_fee_per_gas: u128,

    #[getset(get = "pub")]
    max_fee_per_gas: u128,
}

impl<C> TransactionSender<C> {
    pub fn new(client: C, settings: &Settings) -> Self {
        Self::builder()
            .client(client)
            .contract(SigninContract::new(*settings.contract_address()))
            .chain_id(*settings.chain_id())
            .gas_limit(*settings.gas_limit())
            .max_priority_fee_per_gas(*settings.max_priority_fee_per_gas())
            .max_fee_per_gas(*settings.max_fee_per_gas())
            .build()
    }
}
