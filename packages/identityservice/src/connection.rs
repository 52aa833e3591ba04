use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Coin, CustomQuery, Event, QuerierWrapper, StdError, StdResult, WasmMsg,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::MnemonicKeyOptions;

/// Read access to contract state on some chain.
pub trait ContractQuerier {
    type Error;

    /// Run a smart query against `contract_addr` and decode the response.
    fn query_wasm_smart<T: DeserializeOwned>(
        &self,
        contract_addr: &str,
        msg: &impl Serialize,
    ) -> Result<T, Self::Error>;
}

/// Lets the query client run inside a contract, against `deps.querier`.
impl<C: CustomQuery> ContractQuerier for QuerierWrapper<'_, C> {
    type Error = StdError;

    fn query_wasm_smart<T: DeserializeOwned>(
        &self,
        contract_addr: &str,
        msg: &impl Serialize,
    ) -> StdResult<T> {
        QuerierWrapper::query_wasm_smart(self, contract_addr, msg)
    }
}

/// A signing handle bound to one key.
pub trait Wallet {
    type Tx;
    type Error;

    fn create_and_sign_tx<M: Serialize>(
        &self,
        options: CreateTxOptions<M>,
    ) -> Result<Self::Tx, Self::Error>;
}

/// A connection that can also derive keys, sign and broadcast.
pub trait SigningConnection: ContractQuerier {
    type Key;
    type Tx;
    type Wallet<'a>: Wallet<Tx = Self::Tx, Error = Self::Error>
    where
        Self: 'a;

    fn derive_key(&self, options: &MnemonicKeyOptions) -> Result<Self::Key, Self::Error>;

    fn wallet(&self, key: Self::Key) -> Self::Wallet<'_>;

    /// Submit a signed transaction. Rejections by the chain or the contract
    /// are reported through the result's `code`, not as `Err`.
    fn broadcast(&self, tx: Self::Tx) -> Result<TxBroadcastResult, Self::Error>;
}

/// One contract call inside a transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgExecuteContract<M> {
    pub sender: String,
    pub contract: String,
    pub msg: M,
    pub funds: Option<Vec<Coin>>,
}

impl<M: Serialize> MsgExecuteContract<M> {
    pub fn new(
        sender: impl Into<String>,
        contract: impl Into<String>,
        msg: M,
        funds: Option<Vec<Coin>>,
    ) -> Self {
        Self {
            sender: sender.into(),
            contract: contract.into(),
            msg,
            funds,
        }
    }

    /// The equivalent `WasmMsg::Execute`. The sender is implied by the signer.
    pub fn to_wasm_msg(&self) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.contract.clone(),
            msg: to_json_binary(&self.msg)?,
            funds: self.funds.clone().unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateTxOptions<M> {
    pub msgs: Vec<MsgExecuteContract<M>>,
    pub memo: Option<String>,
}

impl<M> CreateTxOptions<M> {
    pub fn new(msgs: Vec<MsgExecuteContract<M>>) -> Self {
        Self { msgs, memo: None }
    }
}

/// Outcome of a broadcast transaction as reported by the chain.
#[cw_serde]
pub struct TxBroadcastResult {
    pub txhash: String,
    pub height: u64,
    /// 0 on success
    pub code: u32,
    pub codespace: Option<String>,
    pub raw_log: String,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub events: Vec<Event>,
}

impl TxBroadcastResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Value of the first `key` attribute on an event of type `event_type`.
    pub fn attribute(&self, event_type: &str, key: &str) -> Option<&str> {
        self.events
            .iter()
            .filter(|e| e.ty == event_type)
            .flat_map(|e| e.attributes.iter())
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}
