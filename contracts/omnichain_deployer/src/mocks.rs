//! In-test stand-ins for the external collaborators.
//!
//! `MockCore` plays controller, project registry and permission store at once;
//! the deployer only needs an address for each role.

#![allow(dead_code)]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, testutils::Address as _,
    xdr::ToXdr, Address, Bytes, BytesN, Env, String, Vec,
};

use crate::types::{
    DeployTiersHookConfig, LaunchProjectConfig, RulesetConfig, SuckerDeployerConfig,
    TerminalConfig,
};
use crate::{OmnichainDeployer, OmnichainDeployerClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    UnknownProject = 100,
    NotProjectOwner = 101,
    UnsupportedDeployer = 102,
    HookDeploymentFailed = 103,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum MockKey {
    Count,
    Owner(u64),
    Uri(u64),
    RulesetCount(u64),
    Grant(Address, Address, u64, u32),
    Thief,
    FailHook,
    LastSalt,
    Supported,
    Calls,
    Suckers(u64),
}

// ─────────────────────────────────────────────────────────
// Controller + project registry + permission store
// ─────────────────────────────────────────────────────────

#[contract]
pub struct MockCore;

#[contractimpl]
impl MockCore {
    pub fn launch_project_for(
        env: Env,
        owner: Address,
        project_uri: String,
        rulesets: Vec<RulesetConfig>,
        _terminals: Vec<TerminalConfig>,
        _memo: String,
    ) -> u64 {
        let id: u64 = env.storage().instance().get(&MockKey::Count).unwrap_or(0) + 1;
        env.storage().instance().set(&MockKey::Count, &id);
        env.storage().instance().set(&MockKey::Owner(id), &owner);
        env.storage().instance().set(&MockKey::Uri(id), &project_uri);
        env.storage()
            .instance()
            .set(&MockKey::RulesetCount(id), &(rulesets.len() as u64));
        id
    }

    pub fn launch_rulesets_for(
        env: Env,
        project_id: u64,
        rulesets: Vec<RulesetConfig>,
        _terminals: Vec<TerminalConfig>,
        _memo: String,
    ) -> u64 {
        Self::push_rulesets(&env, project_id, rulesets.len() as u64)
    }

    pub fn queue_rulesets_of(
        env: Env,
        project_id: u64,
        rulesets: Vec<RulesetConfig>,
        _memo: String,
    ) -> u64 {
        Self::push_rulesets(&env, project_id, rulesets.len() as u64)
    }

    pub fn owner_of(env: Env, project_id: u64) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Owner(project_id))
            .unwrap_or_else(|| panic_with_error!(&env, MockError::UnknownProject))
    }

    pub fn transfer_from(env: Env, from: Address, to: Address, project_id: u64) {
        from.require_auth();
        if Self::owner_of(env.clone(), project_id) != from {
            panic_with_error!(&env, MockError::NotProjectOwner);
        }
        let recipient: Address = env.storage().instance().get(&MockKey::Thief).unwrap_or(to);
        env.storage()
            .instance()
            .set(&MockKey::Owner(project_id), &recipient);
    }

    pub fn has_permission(
        env: Env,
        operator: Address,
        account: Address,
        project_id: u64,
        permission_id: u32,
        _include_root: bool,
        include_wildcard_project: bool,
    ) -> bool {
        let storage = env.storage().instance();
        storage.has(&MockKey::Grant(
            operator.clone(),
            account.clone(),
            project_id,
            permission_id,
        )) || (include_wildcard_project
            && storage.has(&MockKey::Grant(operator, account, 0, permission_id)))
    }

    pub fn set_permission(
        env: Env,
        operator: Address,
        account: Address,
        project_id: u64,
        permission_id: u32,
    ) {
        env.storage().instance().set(
            &MockKey::Grant(operator, account, project_id, permission_id),
            &true,
        );
    }

    /// Make every later transfer land on `thief` instead of the recipient.
    pub fn set_thief(env: Env, thief: Address) {
        env.storage().instance().set(&MockKey::Thief, &thief);
    }

    /// Mint directly, bypassing the deployer.
    pub fn mint(env: Env, owner: Address) -> u64 {
        Self::launch_project_for(
            env.clone(),
            owner,
            String::from_str(&env, ""),
            Vec::new(&env),
            Vec::new(&env),
            String::from_str(&env, ""),
        )
    }

    pub fn project_count(env: Env) -> u64 {
        env.storage().instance().get(&MockKey::Count).unwrap_or(0)
    }

    pub fn uri_of(env: Env, project_id: u64) -> Option<String> {
        env.storage().instance().get(&MockKey::Uri(project_id))
    }

    pub fn ruleset_count(env: Env, project_id: u64) -> u64 {
        env.storage()
            .instance()
            .get(&MockKey::RulesetCount(project_id))
            .unwrap_or(0)
    }

    fn push_rulesets(env: &Env, project_id: u64, count: u64) -> u64 {
        let total = Self::ruleset_count(env.clone(), project_id) + count;
        env.storage()
            .instance()
            .set(&MockKey::RulesetCount(project_id), &total);
        total
    }
}

// ─────────────────────────────────────────────────────────
// Tiered-hook deployer
// ─────────────────────────────────────────────────────────

mod hook_deployer {
    use super::*;

    #[contract]
    pub struct MockHookDeployer;

    #[contractimpl]
    impl MockHookDeployer {
        /// `fail` makes the deployer abort after the project has been minted.
        pub fn __constructor(env: Env, fail: bool) {
            env.storage().instance().set(&MockKey::FailHook, &fail);
        }

        pub fn launch_project_for(
            env: Env,
            owner: Address,
            _hook_config: DeployTiersHookConfig,
            launch_config: LaunchProjectConfig,
            controller: Address,
            salt: BytesN<32>,
        ) -> (u64, Address) {
            let project_id = MockCoreClient::new(&env, &controller).launch_project_for(
                &owner,
                &launch_config.project_uri,
                &launch_config.rulesets,
                &launch_config.terminals,
                &launch_config.memo,
            );

            if env
                .storage()
                .instance()
                .get(&MockKey::FailHook)
                .unwrap_or(false)
            {
                panic_with_error!(&env, MockError::HookDeploymentFailed);
            }

            env.storage().instance().set(&MockKey::LastSalt, &salt);
            let hook = env.deployer().with_current_contract(salt).deployed_address();
            (project_id, hook)
        }

        pub fn last_salt(env: Env) -> Option<BytesN<32>> {
            env.storage().instance().get(&MockKey::LastSalt)
        }
    }
}
pub use hook_deployer::*;

// ─────────────────────────────────────────────────────────
// Sucker registry
// ─────────────────────────────────────────────────────────

mod sucker_registry {
    use super::*;

    #[contract]
    pub struct MockSuckerRegistry;

    #[contractimpl]
    impl MockSuckerRegistry {
        /// `supported` lists the sucker deployers (bridges) this registry accepts.
        pub fn __constructor(env: Env, supported: Vec<Address>) {
            env.storage().instance().set(&MockKey::Supported, &supported);
        }

        pub fn deploy_suckers_for(
            env: Env,
            project_id: u64,
            salt: BytesN<32>,
            configurations: Vec<SuckerDeployerConfig>,
        ) -> Vec<Address> {
            let supported: Vec<Address> = env
                .storage()
                .instance()
                .get(&MockKey::Supported)
                .unwrap_or(Vec::new(&env));

            let mut deployed = Self::suckers_of(env.clone(), project_id);
            let mut suckers = Vec::new(&env);
            for configuration in configurations.iter() {
                if !supported.contains(&configuration.deployer) {
                    panic_with_error!(&env, MockError::UnsupportedDeployer);
                }
                let mut preimage = Bytes::from_array(&env, &salt.to_array());
                preimage.append(&configuration.deployer.clone().to_xdr(&env));
                let peer_salt = env.crypto().sha256(&preimage).to_bytes();
                let sucker = env
                    .deployer()
                    .with_current_contract(peer_salt)
                    .deployed_address();
                suckers.push_back(sucker.clone());
                deployed.push_back(sucker);
            }

            let calls: u32 = env.storage().instance().get(&MockKey::Calls).unwrap_or(0);
            env.storage().instance().set(&MockKey::Calls, &(calls + 1));
            env.storage().instance().set(&MockKey::LastSalt, &salt);
            env.storage()
                .instance()
                .set(&MockKey::Suckers(project_id), &deployed);
            suckers
        }

        pub fn suckers_of(env: Env, project_id: u64) -> Vec<Address> {
            env.storage()
                .instance()
                .get(&MockKey::Suckers(project_id))
                .unwrap_or(Vec::new(&env))
        }

        pub fn call_count(env: Env) -> u32 {
            env.storage().instance().get(&MockKey::Calls).unwrap_or(0)
        }

        pub fn last_salt(env: Env) -> Option<BytesN<32>> {
            env.storage().instance().get(&MockKey::LastSalt)
        }
    }
}
pub use sucker_registry::*;

// ─────────────────────────────────────────────────────────
// Fixture
// ─────────────────────────────────────────────────────────

/// A deployer wired to fresh mocks.
pub struct Fixture {
    pub env: Env,
    pub deployer: OmnichainDeployerClient<'static>,
    pub core: MockCoreClient<'static>,
    pub hook_deployer: MockHookDeployerClient<'static>,
    pub registry: MockSuckerRegistryClient<'static>,
    /// A sucker deployer the registry accepts.
    pub bridge: Address,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_failing_hook(false)
    }

    pub fn with_failing_hook(fail: bool) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let bridge = Address::generate(&env);
        let core_id = env.register(MockCore, ());
        let hook_id = env.register(MockHookDeployer, (fail,));
        let registry_id = env.register(
            MockSuckerRegistry,
            (Vec::from_array(&env, [bridge.clone()]),),
        );
        let deployer_id = env.register(
            OmnichainDeployer,
            (
                core_id.clone(),
                core_id.clone(),
                core_id.clone(),
                hook_id.clone(),
                registry_id.clone(),
            ),
        );

        Self {
            deployer: OmnichainDeployerClient::new(&env, &deployer_id),
            core: MockCoreClient::new(&env, &core_id),
            hook_deployer: MockHookDeployerClient::new(&env, &hook_id),
            registry: MockSuckerRegistryClient::new(&env, &registry_id),
            bridge,
            env,
        }
    }
}
