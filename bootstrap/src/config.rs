//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::address::ChainAddress;
use crate::deploy::{decode_hash, DeploymentPlan};
use crate::deriver::{args_hash, sha256, DeterministicDeployment};
use crate::error::Result;
use crate::network::Network;
use crate::records::Collaborators;

pub const DEFAULT_SALT: &str = "OmnichainDeployer";

/// Deploy the omnichain deployer contract at its deterministic address,
/// unless it is already there.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Network to deploy to (local, futurenet, testnet, mainnet).
    #[arg(long, env = "STELLAR_NETWORK", default_value = "testnet")]
    pub network: String,

    /// Root of the deployment records.
    #[arg(long, env = "DEPLOYMENTS_PATH", default_value = "deployments")]
    pub deployments: PathBuf,

    /// Overrides the network's default RPC endpoint.
    #[arg(long, env = "STELLAR_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Hash of the uploaded orchestrator wasm, hex.
    #[arg(long, env = "OMNICHAIN_WASM_HASH")]
    pub wasm_hash: String,

    /// Deployment salt; the text is hashed to 32 bytes.
    #[arg(long, env = "OMNICHAIN_SALT", default_value = DEFAULT_SALT)]
    pub salt: String,

    /// Identity the deploy is signed with, as understood by the stellar CLI.
    #[arg(long, env = "STELLAR_ACCOUNT")]
    pub source: String,

    /// Address of the deploying account (the `G…` key behind `--source`).
    #[arg(long, env = "OMNICHAIN_FACTORY")]
    pub factory: ChainAddress,

    /// Stellar CLI binary.
    #[arg(long, default_value = "stellar")]
    pub stellar_bin: String,

    /// Derive and check only; never deploy.
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn salt_bytes(&self) -> [u8; 32] {
        sha256(&[self.salt.as_bytes()])
    }

    /// Resolves the network, reads the records and assembles the plan.
    pub fn plan(&self) -> Result<DeploymentPlan> {
        let network = Network::by_name(&self.network)?;
        let rpc_url = network.rpc_url(self.rpc_url.as_deref())?;
        let collaborators = Collaborators::load(&self.deployments, network.name)?;
        let wasm_hash = decode_hash(&self.wasm_hash)?;

        let deployment = DeterministicDeployment {
            salt: self.salt_bytes(),
            code_hash: wasm_hash,
            args_hash: args_hash(&collaborators.constructor_args()),
            factory: self.factory,
        };

        Ok(DeploymentPlan {
            network,
            rpc_url,
            wasm_hash,
            deployment,
            collaborators,
            source: self.source.clone(),
        })
    }
}
