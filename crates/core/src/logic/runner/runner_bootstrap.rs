use crate::prelude::*;

impl SigninRunner<RpcChainClient> {
    pub async fn bootstrap(settings: &Settings) -> Result<Self> {
        let client = RpcChainClient::connect(settings.node_url().clone());
        Self::bootstrap_with_client(settings, client).await
    }
}

impl<C: ChainClient> SigninRunner<C> {
    /// Checks that the node serves the configured chain and loads the keys.
    pub async fn bootstrap_with_client(settings: &Settings, client: C) -> Result<Self> {
        let expected = *settings.chain_id();
        let actual = client.chain_id().await?;
        if actual != expected {
            return Err(BootstrapError::ChainIdMismatch { expected, actual }.into());
        }
        info!("Connected to chain {actual}");

        let keys = load_keys(settings.keys_path())?;

        Ok(Self::builder()
            .sender(TransactionSender::new(client, settings))
            .keys(keys)
            .iterations(*settings.iterations())
            .pause(*settings.pause())
            .explorer_tx_url(settings.explorer_tx_url().clone())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_with_keys(contents: &str) -> (Settings, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        let settings = Settings::builder()
            .node_url(Url::parse("http://localhost:8545").unwrap())
            .keys_path(file.path())
            .iterations(3)
            .build();
        (settings, file)
    }

    #[tokio::test]
    async fn loads_keys_and_copies_settings() {
        let (settings, _file) = settings_with_keys("0x01\n0x02\n");
        let runner = SigninRunner::bootstrap_with_client(&settings, MockChainClient::default())
            .await
            .unwrap();

        assert_eq!(runner.keys().len(), 2);
        assert_eq!(*runner.iterations(), 3);
        assert_eq!(*runner.pause(), PauseBounds::default());
        assert_eq!(*runner.sender().chain_id(), 204);
    }

    #[tokio::test]
    async fn rejects_wrong_chain() {
        let (settings, _file) = settings_with_keys("0x01\n");
        let err = SigninRunner::bootstrap_with_client(
            &settings,
            MockChainClient::default().with_chain_id(56),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Bootstrap(BootstrapError::ChainIdMismatch {
                expected: 204,
                actual: 56
            })
        ));
    }

    #[tokio::test]
    async fn missing_key_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::builder()
            .node_url(Url::parse("http://localhost:8545").unwrap())
            .keys_path(dir.path().join("missing.txt"))
            .build();

        let err = SigninRunner::bootstrap_with_client(&settings, MockChainClient::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::LoadKeys { .. }));
    }
}
