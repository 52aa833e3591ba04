//! [`SigningConnection`] backed by an in-process `cw-multi-test` chain.
//!
//! Accounts are derived from the mnemonic and HD path with `MockApi::addr_make`,
//! so the same credentials always map to the same address. Transactions run
//! through `App::execute_multi` and are atomic. A contract error does not fail
//! the broadcast; it comes back as a result with code [`EXECUTE_FAILED_CODE`].

use std::cell::{Cell, Ref, RefCell, RefMut};

use cosmwasm_std::{Addr, CosmosMsg};
use cw_multi_test::{next_block, App};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::connection::{
    ContractQuerier, CreateTxOptions, SigningConnection, TxBroadcastResult, Wallet,
};
use crate::credentials::MnemonicKeyOptions;
use crate::error::ConnectionError;

/// wasmd's code for a failed contract execution
pub const EXECUTE_FAILED_CODE: u32 = 5;
pub const WASM_CODESPACE: &str = "wasm";

pub struct MultitestConnection {
    app: RefCell<App>,
    tx_count: Cell<u64>,
}

impl Default for MultitestConnection {
    fn default() -> Self {
        Self::new(App::default())
    }
}

impl MultitestConnection {
    pub fn new(app: App) -> Self {
        Self {
            app: RefCell::new(app),
            tx_count: Cell::new(0),
        }
    }

    pub fn app(&self) -> Ref<'_, App> {
        self.app.borrow()
    }

    /// Direct access for setup (storing code, minting, instantiating).
    /// Calls made through the connection while a guard is held fail with
    /// [`ConnectionError::AppBorrowed`].
    pub fn app_mut(&self) -> RefMut<'_, App> {
        self.app.borrow_mut()
    }

    pub fn into_app(self) -> App {
        self.app.into_inner()
    }

    /// Address the key derived from `options` signs as.
    pub fn account_address(&self, options: &MnemonicKeyOptions) -> Result<Addr, ConnectionError> {
        if options.mnemonic.trim().is_empty() {
            return Err(ConnectionError::EmptyMnemonic {});
        }
        let seed = format!("{}@{}", options.mnemonic, options.hd_path());
        let app = self
            .app
            .try_borrow()
            .map_err(|_| ConnectionError::AppBorrowed {})?;
        let address = app.api().addr_make(&seed);
        Ok(address)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MultitestKey {
    address: Addr,
}

impl MultitestKey {
    pub fn address(&self) -> &Addr {
        &self.address
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignedTx {
    pub signer: Addr,
    pub msgs: Vec<CosmosMsg>,
    pub memo: Option<String>,
}

pub struct MultitestWallet {
    key: MultitestKey,
}

impl Wallet for MultitestWallet {
    type Tx = SignedTx;
    type Error = ConnectionError;

    fn create_and_sign_tx<M: Serialize>(
        &self,
        options: CreateTxOptions<M>,
    ) -> Result<SignedTx, ConnectionError> {
        if options.msgs.is_empty() {
            return Err(ConnectionError::EmptyTx {});
        }
        let msgs = options
            .msgs
            .iter()
            .map(|m| {
                if m.sender != self.key.address.as_str() {
                    return Err(ConnectionError::SignerMismatch {
                        expected: self.key.address.to_string(),
                        actual: m.sender.clone(),
                    });
                }
                Ok(CosmosMsg::Wasm(m.to_wasm_msg()?))
            })
            .collect::<Result<Vec<_>, ConnectionError>>()?;

        Ok(SignedTx {
            signer: self.key.address.clone(),
            msgs,
            memo: options.memo,
        })
    }
}

impl ContractQuerier for MultitestConnection {
    type Error = ConnectionError;

    fn query_wasm_smart<T: DeserializeOwned>(
        &self,
        contract_addr: &str,
        msg: &impl Serialize,
    ) -> Result<T, ConnectionError> {
        let app = self
            .app
            .try_borrow()
            .map_err(|_| ConnectionError::AppBorrowed {})?;
        let response = app.wrap().query_wasm_smart(contract_addr, msg)?;
        Ok(response)
    }
}

impl SigningConnection for MultitestConnection {
    type Key = MultitestKey;
    type Tx = SignedTx;
    type Wallet<'a> = MultitestWallet;

    fn derive_key(&self, options: &MnemonicKeyOptions) -> Result<MultitestKey, ConnectionError> {
        Ok(MultitestKey {
            address: self.account_address(options)?,
        })
    }

    fn wallet(&self, key: MultitestKey) -> MultitestWallet {
        MultitestWallet { key }
    }

    fn broadcast(&self, tx: SignedTx) -> Result<TxBroadcastResult, ConnectionError> {
        let mut app = self
            .app
            .try_borrow_mut()
            .map_err(|_| ConnectionError::AppBorrowed {})?;
        let seq = self.tx_count.get() + 1;
        self.tx_count.set(seq);
        let height = app.block_info().height;
        let txhash = format!("{seq:064X}");

        let result = match app.execute_multi(tx.signer, tx.msgs) {
            Ok(responses) => TxBroadcastResult {
                txhash,
                height,
                code: 0,
                codespace: None,
                raw_log: String::new(),
                gas_wanted: 0,
                gas_used: 0,
                events: responses.into_iter().flat_map(|r| r.events).collect(),
            },
            Err(err) => TxBroadcastResult {
                txhash,
                height,
                code: EXECUTE_FAILED_CODE,
                codespace: Some(WASM_CODESPACE.to_string()),
                raw_log: format!("{err:#}"),
                gas_wanted: 0,
                gas_used: 0,
                events: vec![],
            },
        };
        app.update_block(next_block);
        Ok(result)
    }
}
