use alloy::sol_types::SolCall;

use crate::prelude::*;

alloy::sol! {
    #[allow(missing_docs)]
    function signin(uint256 amount) external;
}

/// Argument passed to every `signin` call.
pub const SIGNIN_AMOUNT: u64 = 1;

/// Typed handle to the check-in contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SigninContract {
    #[getset(get = "pub")]
    address: Address,
}

impl SigninContract {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// ABI encoded `signin(1)`.
    pub fn encode_signin_call(&self) -> Bytes {
        signinCall {
            amount: U256::from(SIGNIN_AMOUNT),
        }
        .abi_encode()
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::keccak256;

    #[test]
    fn signin_call_is_selector_then_one() {
        let data = SigninContract::new(DEFAULT_CONTRACT_ADDRESS).encode_signin_call();
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &keccak256("signin(uint256)")[..4]);
        assert_eq!(&data[..4], &signinCall::SELECTOR[..]);
        assert_eq!(&data[4..], &U256::from(1).to_be_bytes::<32>()[..]);
    }
}
