//! "Is there already code at this address?"

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::address::ChainAddress;
use crate::error::{BootstrapError, Result};
use crate::xdr;

pub trait DeploymentRegistry {
    fn is_deployed(&self, address: &ChainAddress) -> Result<bool>;
}

/// Answers from a Soroban RPC node via `getLedgerEntries`.
pub struct RpcRegistry {
    client: Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<LedgerEntries>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct LedgerEntries {
    #[serde(default)]
    entries: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

impl RpcRegistry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl DeploymentRegistry for RpcRegistry {
    fn is_deployed(&self, address: &ChainAddress) -> Result<bool> {
        // Accounts never hold contract code.
        if !address.is_contract() {
            return Ok(false);
        }

        let key = STANDARD.encode(xdr::contract_instance_key(address));
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getLedgerEntries",
            "params": { "keys": [key] },
        });

        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        if let Some(error) = response.error {
            return Err(BootstrapError::RpcResponse {
                code: error.code,
                message: error.message,
            });
        }

        let found = response
            .result
            .and_then(|result| result.entries)
            .is_some_and(|entries| !entries.is_empty());
        debug!(%address, found, "queried contract instance");
        Ok(found)
    }
}
