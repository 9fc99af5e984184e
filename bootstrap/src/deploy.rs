//! Putting the orchestrator on chain.

use std::process::Command;

use hex::FromHex;
use tracing::{debug, info};

use crate::address::ChainAddress;
use crate::deriver::DeterministicDeployment;
use crate::error::{BootstrapError, Result};
use crate::network::Network;
use crate::records::Collaborators;

/// Everything needed to deploy the orchestrator once.
#[derive(Clone, Debug)]
pub struct DeploymentPlan {
    pub network: &'static Network,
    pub rpc_url: String,
    pub wasm_hash: [u8; 32],
    pub deployment: DeterministicDeployment,
    pub collaborators: Collaborators,
    /// Identity or secret the deploy is signed with.
    pub source: String,
}

pub trait Deployer {
    /// Address of the account `plan.source` signs as. A deploy lands under
    /// this account, so it must be the plan's factory.
    fn signer(&self, plan: &DeploymentPlan) -> Result<ChainAddress>;

    /// Deploys per `plan` and returns the address the chain reports.
    fn deploy(&self, plan: &DeploymentPlan) -> Result<ChainAddress>;
}

/// Deploys by shelling out to the `stellar` CLI.
#[derive(Clone, Debug)]
pub struct StellarCli {
    program: String,
}

impl StellarCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args(plan: &DeploymentPlan) -> Vec<String> {
        let c = &plan.collaborators;
        vec![
            "contract".into(),
            "deploy".into(),
            "--wasm-hash".into(),
            hex::encode(plan.wasm_hash),
            "--salt".into(),
            hex::encode(plan.deployment.deploy_salt()),
            "--source-account".into(),
            plan.source.clone(),
            "--rpc-url".into(),
            plan.rpc_url.clone(),
            "--network-passphrase".into(),
            plan.network.passphrase.into(),
            "--".into(),
            "--controller".into(),
            c.controller.to_string(),
            "--projects".into(),
            c.projects.to_string(),
            "--permissions".into(),
            c.permissions.to_string(),
            "--hook_deployer".into(),
            c.hook_deployer.to_string(),
            "--sucker_registry".into(),
            c.sucker_registry.to_string(),
        ]
    }

    /// Runs the CLI and returns its stdout.
    fn run(&self, args: &[String]) -> Result<String> {
        debug!(program = %self.program, ?args, "spawning stellar cli");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| BootstrapError::Deploy(format!("failed to spawn {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BootstrapError::Deploy(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Deployer for StellarCli {
    fn signer(&self, plan: &DeploymentPlan) -> Result<ChainAddress> {
        let args = ["keys".to_string(), "address".to_string(), plan.source.clone()];
        last_line(&self.run(&args)?)?.parse()
    }

    fn deploy(&self, plan: &DeploymentPlan) -> Result<ChainAddress> {
        info!(network = plan.network.name, "deploying orchestrator");
        parse_deployed_address(&self.run(&Self::args(plan))?)
    }
}

fn last_line(stdout: &str) -> Result<&str> {
    stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .ok_or_else(|| BootstrapError::Deploy("stellar cli printed nothing".into()))
}

/// The CLI prints the new contract id as the last non-empty stdout line.
pub fn parse_deployed_address(stdout: &str) -> Result<ChainAddress> {
    last_line(stdout)?.parse()
}

/// Parses exactly 32 bytes of hex, with or without a `0x` prefix.
pub fn decode_hash(text: &str) -> Result<[u8; 32]> {
    let digits = text.trim();
    let digits = digits.strip_prefix("0x").unwrap_or(digits);
    <[u8; 32]>::from_hex(digits).map_err(|_| BootstrapError::InvalidHash(text.to_string()))
}
