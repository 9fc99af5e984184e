use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::address::ChainAddress;

#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No deployment records (or no known passphrase) for this network.
    #[error("unsupported network `{network}`")]
    UnsupportedNetwork { network: String },

    #[error("network `{network}` has no default RPC endpoint; pass --rpc-url")]
    MissingRpcUrl { network: String },

    #[error("no {contract} record for `{network}` under {path}")]
    MissingRecord {
        contract: &'static str,
        network: String,
        path: PathBuf,
    },

    #[error("malformed deployment record {path}")]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid address `{0}`")]
    InvalidAddress(String),

    #[error("invalid 32-byte hex value `{0}`")]
    InvalidHash(String),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("RPC request failed")]
    Rpc(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    RpcResponse { code: i64, message: String },

    #[error("deployment failed: {0}")]
    Deploy(String),

    /// The signing account is not the factory the address was derived for.
    #[error("source signs as {signer}, but the address was derived for factory {factory}")]
    FactoryMismatch {
        factory: ChainAddress,
        signer: ChainAddress,
    },

    #[error("deployed at {actual}, expected deterministic address {expected}")]
    AddressMismatch {
        expected: ChainAddress,
        actual: ChainAddress,
    },
}

pub type Result<T, E = BootstrapError> = std::result::Result<T, E>;
