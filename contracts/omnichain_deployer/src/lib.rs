//! # Omnichain Deployer Contract
//!
//! Launches projects and pairs them with cross-chain peer contracts
//! ("suckers") in a single invocation. It exposes the Soroban contract
//! `OmnichainDeployer` whose entry points are:
//!
//! | Phase            | Entry Point(s)                                   |
//! |------------------|--------------------------------------------------|
//! | Construction     | `__constructor` (collaborator addresses)         |
//! | Launch           | [`OmnichainDeployer::launch_project_for`], [`OmnichainDeployer::launch_project_with_hook_for`] |
//! | Existing project | `deploy_suckers_for`, `launch_rulesets_for`, `queue_rulesets_of` |
//! | Queries          | `collaborators`, `sucker_salt_of`                |
//!
//! ## Architecture
//!
//! Launch sequencing lives in [`launch`], peer pairing in [`suckers`] and
//! authorization for existing projects in [`permissions`]. Collaborator
//! contracts are reached through the clients in [`interfaces`]. This file
//! contains the public entry points and event emissions only.
//!
//! Every entry point is all-or-nothing: a failure in any collaborator call
//! aborts the invocation and discards all of its effects.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String, Vec};

pub mod events;
pub mod interfaces;
pub mod launch;
pub mod permissions;
mod storage;
pub mod suckers;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod mocks;

use interfaces::{ControllerClient, HookDeployerClient, ProjectsClient};
use launch::Launch;
use storage::{load_collaborators, save_collaborators};
pub use types::{
    Collaborators, DeployTiersHookConfig, LaunchProjectConfig, LaunchedProject,
    LaunchedProjectWithHook, RulesetConfig, SuckerDeployerConfig, SuckerDeploymentConfig,
    TerminalConfig, TierConfig, TokenMapping,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotAuthorized = 1,
    OwnershipNotTransferred = 2,
    InvalidLaunchStage = 3,
}

#[contract]
pub struct OmnichainDeployer;

#[contractimpl]
impl OmnichainDeployer {
    // ─────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────

    /// Record the collaborator contracts. Runs once, as part of deployment.
    pub fn __constructor(
        env: Env,
        controller: Address,
        projects: Address,
        permissions: Address,
        hook_deployer: Address,
        sucker_registry: Address,
    ) {
        save_collaborators(
            &env,
            &Collaborators {
                controller,
                projects,
                permissions,
                hook_deployer,
                sucker_registry,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Launch
    // ─────────────────────────────────────────────────────────

    /// Launch a project for `owner`, optionally paired with suckers.
    ///
    /// - The project is minted to this contract, configured, paired, then
    ///   transferred to `owner`.
    /// - Anyone may launch for any owner; `caller` must authorize because the
    ///   sucker salt is bound to it.
    pub fn launch_project_for(
        env: Env,
        caller: Address,
        owner: Address,
        launch_config: LaunchProjectConfig,
        sucker_config: SuckerDeploymentConfig,
    ) -> LaunchedProject {
        caller.require_auth();
        let collaborators = load_collaborators(&env);
        let mut launch = Launch::new(caller.clone(), owner.clone());

        let controller = ControllerClient::new(&env, &collaborators.controller);
        let project_id = controller.launch_project_for(
            &env.current_contract_address(),
            &launch_config.project_uri,
            &launch_config.rulesets,
            &launch_config.terminals,
            &launch_config.memo,
        );
        launch.configured(&env, project_id);
        launch.pair_suckers(&env, &sucker_config);
        launch.transfer_ownership(&env);
        let (project_id, suckers) = launch.finish(&env);

        events::emit_project_launched(&env, project_id, owner, caller, None);

        LaunchedProject {
            project_id,
            suckers,
        }
    }

    /// Launch a project with a tiered NFT hook attached, optionally paired
    /// with suckers.
    ///
    /// Minting, configuration and hook deployment happen in one call to the
    /// hook deployer. A non-zero `hook_salt` is bound to `caller` the same way
    /// the sucker salt is.
    pub fn launch_project_with_hook_for(
        env: Env,
        caller: Address,
        owner: Address,
        hook_config: DeployTiersHookConfig,
        launch_config: LaunchProjectConfig,
        sucker_config: SuckerDeploymentConfig,
        hook_salt: BytesN<32>,
    ) -> LaunchedProjectWithHook {
        caller.require_auth();
        let collaborators = load_collaborators(&env);
        let mut launch = Launch::new(caller.clone(), owner.clone());

        let hook_deployer = HookDeployerClient::new(&env, &collaborators.hook_deployer);
        let (project_id, hook) = hook_deployer.launch_project_for(
            &env.current_contract_address(),
            &hook_config,
            &launch_config,
            &collaborators.controller,
            &suckers::bind_optional_salt(&env, &hook_salt, &caller),
        );
        launch.configured(&env, project_id);
        launch.pair_suckers(&env, &sucker_config);
        launch.transfer_ownership(&env);
        let (project_id, suckers) = launch.finish(&env);

        events::emit_project_launched(&env, project_id, owner, caller, Some(hook.clone()));

        LaunchedProjectWithHook {
            project_id,
            hook,
            suckers,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Existing projects
    // ─────────────────────────────────────────────────────────

    /// Deploy suckers for an existing project.
    ///
    /// - `caller` must be the project owner or hold `DEPLOY_SUCKERS` from them.
    /// - No minting and no ownership change.
    pub fn deploy_suckers_for(
        env: Env,
        caller: Address,
        project_id: u64,
        sucker_config: SuckerDeploymentConfig,
    ) -> Vec<Address> {
        caller.require_auth();
        let owner = Self::owner_of(&env, project_id);
        permissions::require_permission_from(
            &env,
            &caller,
            &owner,
            project_id,
            permissions::DEPLOY_SUCKERS,
        );

        suckers::deploy_suckers_for(&env, project_id, &caller, &sucker_config)
    }

    /// Launch the first rulesets of an existing project that has none yet,
    /// setting its terminals at the same time.
    ///
    /// - `caller` needs `QUEUE_RULESETS` and `SET_TERMINALS` from the owner.
    pub fn launch_rulesets_for(
        env: Env,
        caller: Address,
        project_id: u64,
        rulesets: Vec<RulesetConfig>,
        terminals: Vec<TerminalConfig>,
        memo: String,
    ) -> u64 {
        caller.require_auth();
        let owner = Self::owner_of(&env, project_id);
        permissions::require_permission_from(
            &env,
            &caller,
            &owner,
            project_id,
            permissions::QUEUE_RULESETS,
        );
        permissions::require_permission_from(
            &env,
            &caller,
            &owner,
            project_id,
            permissions::SET_TERMINALS,
        );

        let controller = ControllerClient::new(&env, &load_collaborators(&env).controller);
        let ruleset_id = controller.launch_rulesets_for(&project_id, &rulesets, &terminals, &memo);

        events::emit_rulesets_queued(&env, project_id, caller, ruleset_id);
        ruleset_id
    }

    /// Queue rulesets for an existing project.
    ///
    /// - `caller` needs `QUEUE_RULESETS` from the owner.
    pub fn queue_rulesets_of(
        env: Env,
        caller: Address,
        project_id: u64,
        rulesets: Vec<RulesetConfig>,
        memo: String,
    ) -> u64 {
        caller.require_auth();
        let owner = Self::owner_of(&env, project_id);
        permissions::require_permission_from(
            &env,
            &caller,
            &owner,
            project_id,
            permissions::QUEUE_RULESETS,
        );

        let controller = ControllerClient::new(&env, &load_collaborators(&env).controller);
        let ruleset_id = controller.queue_rulesets_of(&project_id, &rulesets, &memo);

        events::emit_rulesets_queued(&env, project_id, caller, ruleset_id);
        ruleset_id
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn collaborators(env: Env) -> Collaborators {
        load_collaborators(&env)
    }

    /// The salt the sucker registry receives when `requester` submits `salt`.
    /// Lets off-chain tooling predict peer addresses.
    pub fn sucker_salt_of(env: Env, requester: Address, salt: BytesN<32>) -> BytesN<32> {
        suckers::effective_salt(&env, &salt, &requester)
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn owner_of(env: &Env, project_id: u64) -> Address {
        ProjectsClient::new(env, &load_collaborators(env).projects).owner_of(&project_id)
    }
}
