use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConnectionError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Mnemonic must not be empty")]
    EmptyMnemonic {},

    #[error("Transaction must contain at least one message")]
    EmptyTx {},

    #[error("Chain state is borrowed elsewhere; release the app guard first")]
    AppBorrowed {},

    #[error("Message sender {actual} does not match signing key address {expected}")]
    SignerMismatch { expected: String, actual: String },
}
