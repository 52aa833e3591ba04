use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COIN_TYPE: u32 = 330;
pub const DEFAULT_ACCOUNT: u32 = 0;
pub const DEFAULT_INDEX: u32 = 0;

/// Key-derivation material for a mnemonic-backed signing key.
///
/// Unset `account`, `index` and `coin_type` fall back to the defaults above,
/// but only when an HD path is rendered. They are kept as given otherwise.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MnemonicKeyOptions {
    pub mnemonic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_type: Option<u32>,
}

impl MnemonicKeyOptions {
    pub fn new(mnemonic: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            account: None,
            index: None,
            coin_type: None,
        }
    }

    pub fn with_account(mut self, account: u32) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_coin_type(mut self, coin_type: u32) -> Self {
        self.coin_type = Some(coin_type);
        self
    }

    /// BIP-44 path, e.g. `m/44'/330'/0'/0/0`.
    pub fn hd_path(&self) -> String {
        format!(
            "m/44'/{}'/{}'/0/{}",
            self.coin_type.unwrap_or(DEFAULT_COIN_TYPE),
            self.account.unwrap_or(DEFAULT_ACCOUNT),
            self.index.unwrap_or(DEFAULT_INDEX)
        )
    }
}

impl fmt::Debug for MnemonicKeyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicKeyOptions")
            .field("mnemonic", &"<redacted>")
            .field("account", &self.account)
            .field("index", &self.index)
            .field("coin_type", &self.coin_type)
            .finish()
    }
}

/// Signer context held by [`crate::IdentityserviceClient`].
///
/// `address` is used as the sender of every execute message. Whether it
/// matches the key derived from `mnemonic_key_options` is checked by the
/// connection, not here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub mnemonic_key_options: MnemonicKeyOptions,
    pub address: String,
}

impl UserCredentials {
    pub fn new(mnemonic_key_options: MnemonicKeyOptions, address: impl Into<String>) -> Self {
        Self {
            mnemonic_key_options,
            address: address.into(),
        }
    }
}
