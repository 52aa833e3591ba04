use cosmwasm_std::{Addr, StdError};
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Missing reply data")]
    MissingReplyData {},

    #[error("Error parsing instantiate reply: {0}")]
    ParseInstantiateReplyError(#[from] ParseReplyError),

    #[error("Name must not be empty")]
    EmptyName {},

    #[error("Name {name} is already taken")]
    NameTaken { name: String },

    #[error("{owner} already has an identity")]
    AlreadyRegistered { owner: Addr },

    #[error("A DAO needs at least one voter")]
    NoVoters {},

    #[error("Invalid threshold: {reason}")]
    InvalidThreshold { reason: String },

    #[error("Another DAO creation is already pending. Please wait.")]
    DaoCreationPending {},
}
