pub mod connection;
pub mod credentials;
#[cfg(feature = "multitest")]
mod error;
pub mod execute;
pub mod msg;
#[cfg(feature = "multitest")]
pub mod multitest;
pub mod query;

pub use crate::connection::{
    ContractQuerier, CreateTxOptions, MsgExecuteContract, SigningConnection, TxBroadcastResult,
    Wallet,
};
pub use crate::credentials::{MnemonicKeyOptions, UserCredentials};
#[cfg(feature = "multitest")]
pub use crate::error::ConnectionError;
pub use crate::execute::{IdentityserviceClient, IdentityserviceInterface};
pub use crate::query::{IdentityserviceQueryClient, IdentityserviceReadOnly};
