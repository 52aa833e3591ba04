use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

pub use cosmwasm_std::Decimal;
pub use cw_utils::{Duration, Threshold};

/// Instantiate message for the Identityservice contract.
#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Code ID of the DAO contract instantiated on `RegisterDao`
    pub dao_code_id: u64,
}

/// Execute messages for the Identityservice contract.
#[cw_serde]
pub enum ExecuteMsg {
    /// Register the sender under a display name.
    RegisterUser { name: String },
    /// Create a DAO and register it under `dao_name`.
    RegisterDao(DaoInstantiateMsg),
}

/// Everything needed to create a DAO. Also the instantiate message of the DAO contract.
#[cw_serde]
pub struct DaoInstantiateMsg {
    pub dao_name: String,
    pub max_voting_period: Duration,
    pub threshold: Threshold,
    pub voters: Vec<Voter>,
}

#[cw_serde]
pub struct Voter {
    pub addr: String,
    pub weight: u64,
}

/// Sort direction for paginated queries.
#[cw_serde]
#[derive(Copy)]
pub enum Ordering {
    Ascending,
    Descending,
}

/// Identityservice Query Messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(GetIdentityByOwnerResponse)]
    GetIdentityByOwner { owner: String },
    #[returns(GetIdentityByNameResponse)]
    GetIdentityByName { name: String },
    /// List registered DAOs. Unset fields are left out of the payload.
    #[returns(DaosResponse)]
    Daos {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        order: Option<Ordering>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<u64>,
    },
}

#[cw_serde]
#[derive(Copy)]
pub enum IdType {
    User,
    Dao,
}

#[cw_serde]
pub struct Identity {
    pub owner: Addr,
    pub name: String,
    pub id_type: IdType,
}

#[cw_serde]
pub struct GetIdentityByOwnerResponse {
    pub identity: Option<Identity>,
}

#[cw_serde]
pub struct GetIdentityByNameResponse {
    pub identity: Option<Identity>,
}

#[cw_serde]
pub struct DaosResponse {
    /// `(dao id, dao contract address)`
    pub daos: Vec<(u64, Addr)>,
}
