use colored::Colorize;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::prelude::*;

impl<C: ChainClient> SigninRunner<C> {
    pub async fn run(&mut self) -> Result<RunReport> {
        let mut rng = StdRng::from_entropy();
        self.run_with_rng(&mut rng).await
    }

    /// Sends one `signin` per key per iteration, strictly one after another.
    /// The key order is reshuffled before every iteration and the first
    /// failure ends the run.
    pub async fn run_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RunReport> {
        let iterations = *self.iterations();
        let mut report = RunReport::default();

        for iteration in 1..=iterations {
            info!(
                "{}",
                format!("Iteration {iteration} of {iterations}").bold()
            );
            self.keys_mut().shuffle(rng);

            for key in self.keys().iter() {
                let receipt = self.sign_in(key).await?;
                report.push(receipt);

                let duration = random_pause_duration(*self.pause(), rng);
                pause(duration).await;
            }
        }

        Ok(report)
    }

    async fn sign_in(&self, private_key: &str) -> Result<Receipt> {
        let account = Account::from_private_key(private_key)?;
        let receipt = self.sender().send_signin(&account).await?;
        let link = explorer_link(self.explorer_tx_url(), receipt.transaction_hash());
        info!(
            "Transaction from {} sent. Tx Hash: {}",
            account.address(),
            link.bold().green()
        );
        Ok(receipt)
    }
}
