//! Client interfaces for the external contracts the deployer drives.
//!
//! Only the calls this contract makes are declared. Each trait generates a
//! typed client; a failing call aborts the whole invocation, so collaborator
//! errors reach the caller unchanged.

use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};

use crate::types::{
    DeployTiersHookConfig, LaunchProjectConfig, RulesetConfig, SuckerDeployerConfig,
    TerminalConfig,
};

/// Project ledger/controller: mints projects and owns ruleset accounting.
#[contractclient(name = "ControllerClient")]
pub trait Controller {
    /// Mint a project to `owner` and configure its rulesets and terminals.
    fn launch_project_for(
        env: Env,
        owner: Address,
        project_uri: String,
        rulesets: Vec<RulesetConfig>,
        terminals: Vec<TerminalConfig>,
        memo: String,
    ) -> u64;

    fn launch_rulesets_for(
        env: Env,
        project_id: u64,
        rulesets: Vec<RulesetConfig>,
        terminals: Vec<TerminalConfig>,
        memo: String,
    ) -> u64;

    fn queue_rulesets_of(
        env: Env,
        project_id: u64,
        rulesets: Vec<RulesetConfig>,
        memo: String,
    ) -> u64;
}

/// Project registry token: one owner per project id.
#[contractclient(name = "ProjectsClient")]
pub trait Projects {
    fn owner_of(env: Env, project_id: u64) -> Address;
    fn transfer_from(env: Env, from: Address, to: Address, project_id: u64);
}

/// Permission store. Grants are read, never written, by this contract.
#[contractclient(name = "PermissionsClient")]
pub trait Permissions {
    fn has_permission(
        env: Env,
        operator: Address,
        account: Address,
        project_id: u64,
        permission_id: u32,
        include_root: bool,
        include_wildcard_project: bool,
    ) -> bool;
}

/// Tiered-hook deployer: mints the project and attaches an NFT hook in one call.
/// Returns `(project_id, hook)`.
#[contractclient(name = "HookDeployerClient")]
pub trait HookDeployer {
    fn launch_project_for(
        env: Env,
        owner: Address,
        hook_config: DeployTiersHookConfig,
        launch_config: LaunchProjectConfig,
        controller: Address,
        salt: BytesN<32>,
    ) -> (u64, Address);
}

/// Cross-chain sucker registry. Persists the project → suckers association.
#[contractclient(name = "SuckerRegistryClient")]
pub trait SuckerRegistry {
    fn deploy_suckers_for(
        env: Env,
        project_id: u64,
        salt: BytesN<32>,
        configurations: Vec<SuckerDeployerConfig>,
    ) -> Vec<Address>;
}
