use cosmwasm_std::Coin;

use crate::connection::{
    CreateTxOptions, MsgExecuteContract, SigningConnection, TxBroadcastResult, Wallet,
};
use crate::credentials::UserCredentials;
use crate::msg::{
    DaoInstantiateMsg, DaosResponse, Duration, ExecuteMsg, GetIdentityByNameResponse,
    GetIdentityByOwnerResponse, Ordering, Threshold, Voter,
};
use crate::query::{IdentityserviceQueryClient, IdentityserviceReadOnly};

/// Read-write operations of the Identityservice contract.
pub trait IdentityserviceInterface: IdentityserviceReadOnly {
    fn register_user(
        &self,
        name: impl Into<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<TxBroadcastResult, Self::Error>;

    fn register_dao(
        &self,
        dao_name: impl Into<String>,
        max_voting_period: Duration,
        threshold: Threshold,
        voters: Vec<Voter>,
        funds: Option<Vec<Coin>>,
    ) -> Result<TxBroadcastResult, Self::Error>;
}

/// Signing client. Queries go through the embedded [`IdentityserviceQueryClient`];
/// transactions are signed with the key derived from `user`.
pub struct IdentityserviceClient<'a, C> {
    querier: IdentityserviceQueryClient<'a, C>,
    user: UserCredentials,
}

impl<'a, C: SigningConnection> IdentityserviceClient<'a, C> {
    pub fn new(
        connection: &'a C,
        user: UserCredentials,
        contract_address: impl Into<String>,
    ) -> Self {
        Self {
            querier: IdentityserviceQueryClient::new(connection, contract_address),
            user,
        }
    }

    pub fn querier(&self) -> &IdentityserviceQueryClient<'a, C> {
        &self.querier
    }

    pub fn user(&self) -> &UserCredentials {
        &self.user
    }

    /// Derive, sign, broadcast. One message per transaction, one attempt.
    fn execute(
        &self,
        msg: ExecuteMsg,
        funds: Option<Vec<Coin>>,
    ) -> Result<TxBroadcastResult, C::Error> {
        let connection = self.querier.connection();
        let key = connection.derive_key(&self.user.mnemonic_key_options)?;
        let wallet = connection.wallet(key);

        tracing::debug!(
            contract = %self.querier.contract_address(),
            sender = %self.user.address,
            msg = ?msg,
            "signing contract execution"
        );
        let exec_msg = MsgExecuteContract::new(
            self.user.address.clone(),
            self.querier.contract_address(),
            msg,
            funds,
        );
        let tx = wallet.create_and_sign_tx(CreateTxOptions::new(vec![exec_msg]))?;
        let result = connection.broadcast(tx)?;

        tracing::info!(
            txhash = %result.txhash,
            height = result.height,
            code = result.code,
            "transaction broadcast"
        );
        Ok(result)
    }
}

impl<C: SigningConnection> IdentityserviceReadOnly for IdentityserviceClient<'_, C> {
    type Error = C::Error;

    fn contract_address(&self) -> &str {
        self.querier.contract_address()
    }

    fn get_identity_by_owner(
        &self,
        owner: impl Into<String>,
    ) -> Result<GetIdentityByOwnerResponse, C::Error> {
        self.querier.get_identity_by_owner(owner)
    }

    fn get_identity_by_name(
        &self,
        name: impl Into<String>,
    ) -> Result<GetIdentityByNameResponse, C::Error> {
        self.querier.get_identity_by_name(name)
    }

    fn daos(
        &self,
        limit: Option<u32>,
        order: Option<Ordering>,
        start_after: Option<u64>,
    ) -> Result<DaosResponse, C::Error> {
        self.querier.daos(limit, order, start_after)
    }
}

impl<C: SigningConnection> IdentityserviceInterface for IdentityserviceClient<'_, C> {
    fn register_user(
        &self,
        name: impl Into<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<TxBroadcastResult, C::Error> {
        self.execute(ExecuteMsg::RegisterUser { name: name.into() }, funds)
    }

    fn register_dao(
        &self,
        dao_name: impl Into<String>,
        max_voting_period: Duration,
        threshold: Threshold,
        voters: Vec<Voter>,
        funds: Option<Vec<Coin>>,
    ) -> Result<TxBroadcastResult, C::Error> {
        let msg = ExecuteMsg::RegisterDao(DaoInstantiateMsg {
            dao_name: dao_name.into(),
            max_voting_period,
            threshold,
            voters,
        });
        self.execute(msg, funds)
    }
}
