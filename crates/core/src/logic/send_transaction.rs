use crate::prelude::*;

impl<C: ChainClient> TransactionSender<C> {
    /// Fresh nonce from the chain, fixed fees from the settings.
    pub async fn get_transaction_settings(
        &self,
        address: Address,
    ) -> Result<TransactionSettings> {
        let nonce = self.client().get_transaction_count(address).await?;
        debug!("Fetched nonce {nonce} for {address}");
        Ok(TransactionSettings::builder()
            .nonce(nonce)
            .max_priority_fee_per_gas(*self.max_priority_fee_per_gas())
            .max_fee_per_gas(*self.max_fee_per_gas())
            .build())
    }

    /// Signs `input` as a call to the contract and submits it, returning once
    /// the receipt is available. A reverted receipt is an error.
    pub async fn sign_and_send_transaction(
        &self,
        account: &Account,
        input: Bytes,
    ) -> Result<Receipt> {
        let settings = self.get_transaction_settings(*account.address()).await?;
        let descriptor = TransactionDescriptor::builder()
            .from(*account.address())
            .to(*self.contract().address())
            .input(input)
            .settings(settings)
            .chain_id(*self.chain_id())
            .gas_limit(*self.gas_limit())
            .build();

        let signed = descriptor.sign(account)?;
        debug!("Signed {} with nonce {}", signed.hash(), settings.nonce());

        let receipt = self
            .client()
            .send_raw_transaction(signed.raw().clone())
            .await?;
        if !receipt.success() {
            return Err(Error::TransactionReverted {
                transaction_hash: *receipt.transaction_hash(),
            });
        }
        Ok(receipt)
    }

    pub async fn send_signin(&self, account: &Account) -> Result<Receipt> {
        let input = self.contract().encode_signin_call();
        self.sign_and_send_transaction(account, input).await
    }
}
