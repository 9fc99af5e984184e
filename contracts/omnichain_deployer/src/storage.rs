//! # Storage
//!
//! The deployer keeps almost no state of its own. Projects live in the
//! controller and project registry; sucker sets live in the sucker registry.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type            | Description                          |
//! |-----------------|-----------------|--------------------------------------|
//! | `Collaborators` | `Collaborators` | External contract addresses, set once |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.

use soroban_sdk::{contracttype, Env};

use crate::types::Collaborators;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Collaborator contract addresses (Instance).
    Collaborators,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Written once by the constructor.
pub fn save_collaborators(env: &Env, collaborators: &Collaborators) {
    env.storage()
        .instance()
        .set(&DataKey::Collaborators, collaborators);
    bump_instance(env);
}

/// Read the collaborator set. The constructor guarantees it is present.
pub fn load_collaborators(env: &Env) -> Collaborators {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Collaborators)
        .expect("collaborators set at construction")
}
