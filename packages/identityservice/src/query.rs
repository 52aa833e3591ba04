use crate::connection::ContractQuerier;
use crate::msg::{
    DaosResponse, GetIdentityByNameResponse, GetIdentityByOwnerResponse, Ordering, QueryMsg,
};

/// Read-only operations of the Identityservice contract.
pub trait IdentityserviceReadOnly {
    type Error;

    fn contract_address(&self) -> &str;

    fn get_identity_by_owner(
        &self,
        owner: impl Into<String>,
    ) -> Result<GetIdentityByOwnerResponse, Self::Error>;

    fn get_identity_by_name(
        &self,
        name: impl Into<String>,
    ) -> Result<GetIdentityByNameResponse, Self::Error>;

    fn daos(
        &self,
        limit: Option<u32>,
        order: Option<Ordering>,
        start_after: Option<u64>,
    ) -> Result<DaosResponse, Self::Error>;
}

/// Query client over any [`ContractQuerier`]: a node connection, or `deps.querier`
/// inside another contract.
#[derive(Debug)]
pub struct IdentityserviceQueryClient<'a, C> {
    connection: &'a C,
    contract_address: String,
}

impl<C> Clone for IdentityserviceQueryClient<'_, C> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection,
            contract_address: self.contract_address.clone(),
        }
    }
}

impl<'a, C: ContractQuerier> IdentityserviceQueryClient<'a, C> {
    pub fn new(connection: &'a C, contract_address: impl Into<String>) -> Self {
        Self {
            connection,
            contract_address: contract_address.into(),
        }
    }

    pub fn connection(&self) -> &'a C {
        self.connection
    }

    fn query<T: serde::de::DeserializeOwned>(&self, msg: QueryMsg) -> Result<T, C::Error> {
        tracing::debug!(contract = %self.contract_address, query = ?msg, "contract query");
        self.connection.query_wasm_smart(&self.contract_address, &msg)
    }
}

impl<C: ContractQuerier> IdentityserviceReadOnly for IdentityserviceQueryClient<'_, C> {
    type Error = C::Error;

    fn contract_address(&self) -> &str {
        &self.contract_address
    }

    fn get_identity_by_owner(
        &self,
        owner: impl Into<String>,
    ) -> Result<GetIdentityByOwnerResponse, C::Error> {
        self.query(QueryMsg::GetIdentityByOwner {
            owner: owner.into(),
        })
    }

    fn get_identity_by_name(
        &self,
        name: impl Into<String>,
    ) -> Result<GetIdentityByNameResponse, C::Error> {
        self.query(QueryMsg::GetIdentityByName { name: name.into() })
    }

    fn daos(
        &self,
        limit: Option<u32>,
        order: Option<Ordering>,
        start_after: Option<u64>,
    ) -> Result<DaosResponse, C::Error> {
        self.query(QueryMsg::Daos {
            limit,
            order,
            start_after,
        })
    }
}
