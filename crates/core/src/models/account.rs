use crate::prelude::*;

/// A signing account derived from a private key. Lives for a single
/// transaction.
#[derive(Clone, derive_more::Debug, Getters)]
#[debug("Account({})", address)]
pub struct Account {
    #[getset(get = "pub")]
    address: Address,

    #[getset(get = "pub(crate)")]
    signer: PrivateKeySigner,
}

impl From<PrivateKeySigner> for Account {
    fn from(signer: PrivateKeySigner) -> Self {
        Self {
            address: signer.address(),
            signer,
        }
    }
}

impl Account {
    /// Accepts the key with or without `0x` prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        private_key
            .trim()
            .parse::<PrivateKeySigner>()
            .map(Self::from)
            .map_err(|_| Error::InvalidPrivateKey)
    }
}

impl std::str::FromStr for Account {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_private_key(s)
    }
}
