//! # Types
//!
//! Shared data structures used across all modules of the omnichain deployer.
//!
//! ## Pass-through configuration
//!
//! [`RulesetConfig`], [`TerminalConfig`] and [`DeployTiersHookConfig`] are owned
//! by the controller and the hook deployer. This contract never interprets them;
//! it only forwards them inside a single invocation.
//!
//! ## Sucker configuration
//!
//! A [`SuckerDeploymentConfig`] with an all-zero `salt` means "no cross-chain
//! pairing". A non-zero salt is never used as-is: it is bound to the requesting
//! account first (see [`crate::suckers::effective_salt`]).

use soroban_sdk::{contracttype, Address, BytesN, Env, String, Vec};

/// One ruleset to queue on the controller. Accounting semantics belong to the
/// controller; the fields are carried verbatim.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RulesetConfig {
    pub must_start_at_or_after: u64,
    pub duration: u64,
    pub weight: i128,
    pub weight_cut_percent: u32,
    pub approval_hook: Option<Address>,
    pub metadata: u64,
}

/// A payment terminal and the tokens it should account for.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TerminalConfig {
    pub terminal: Address,
    pub accepted_tokens: Vec<Address>,
}

/// Everything the controller needs to mint and configure a new project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchProjectConfig {
    /// Metadata URI stored alongside the project.
    pub project_uri: String,
    pub rulesets: Vec<RulesetConfig>,
    pub terminals: Vec<TerminalConfig>,
    pub memo: String,
}

/// A single NFT tier. Pricing logic lives in the hook.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierConfig {
    pub price: i128,
    pub initial_supply: u32,
    pub reserve_frequency: u32,
    pub encoded_ipfs_uri: BytesN<32>,
}

/// Configuration forwarded to the tiered-hook deployer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeployTiersHookConfig {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub contract_uri: String,
    pub tiers: Vec<TierConfig>,
}

/// How a local token maps onto its remote counterpart for one bridge.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMapping {
    pub local_token: Address,
    /// Remote token identifier; 32 bytes fits every supported chain family.
    pub remote_token: BytesN<32>,
    pub min_gas: u32,
    pub min_bridge_amount: i128,
}

/// One peer to deploy: the bridge-specific sucker deployer (which fixes the
/// target chain) and its construction parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuckerDeployerConfig {
    pub deployer: Address,
    pub mappings: Vec<TokenMapping>,
}

/// Cross-chain pairing request attached to a launch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuckerDeploymentConfig {
    /// All-zero disables pairing.
    pub salt: BytesN<32>,
    pub deployer_configs: Vec<SuckerDeployerConfig>,
}

impl SuckerDeploymentConfig {
    /// A configuration that requests no pairing.
    pub fn none(env: &Env) -> Self {
        Self {
            salt: BytesN::from_array(env, &[0u8; 32]),
            deployer_configs: Vec::new(env),
        }
    }

    pub fn is_disabled(&self) -> bool {
        is_zero(&self.salt)
    }
}

/// Result of a plain launch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchedProject {
    pub project_id: u64,
    pub suckers: Vec<Address>,
}

/// Result of a hook-attached launch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchedProjectWithHook {
    pub project_id: u64,
    pub hook: Address,
    pub suckers: Vec<Address>,
}

/// Addresses of the external contracts this deployer orchestrates.
/// Fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collaborators {
    pub controller: Address,
    pub projects: Address,
    pub permissions: Address,
    pub hook_deployer: Address,
    pub sucker_registry: Address,
}

/// `true` when every byte of `salt` is zero.
pub fn is_zero(salt: &BytesN<32>) -> bool {
    salt.to_array() == [0u8; 32]
}
