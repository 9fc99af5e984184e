//! Chain addresses in their strkey text form (`G…` accounts, `C…` contracts).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stellar_strkey::{ed25519, Contract, Strkey};

use crate::error::BootstrapError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChainAddress {
    Account([u8; 32]),
    Contract([u8; 32]),
}

impl ChainAddress {
    /// The raw 32-byte key or contract id.
    pub fn raw(&self) -> &[u8; 32] {
        match self {
            Self::Account(bytes) | Self::Contract(bytes) => bytes,
        }
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, Self::Contract(_))
    }
}

impl FromStr for ChainAddress {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Strkey::from_string(s.trim()) {
            Ok(Strkey::PublicKeyEd25519(key)) => Ok(Self::Account(key.0)),
            Ok(Strkey::Contract(contract)) => Ok(Self::Contract(contract.0)),
            _ => Err(BootstrapError::InvalidAddress(s.to_string())),
        }
    }
}

impl TryFrom<String> for ChainAddress {
    type Error = BootstrapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChainAddress> for String {
    fn from(address: ChainAddress) -> Self {
        address.to_string()
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Account(bytes) => ed25519::PublicKey(*bytes).to_string(),
            Self::Contract(bytes) => Contract(*bytes).to_string(),
        };
        f.write_str(&text)
    }
}
