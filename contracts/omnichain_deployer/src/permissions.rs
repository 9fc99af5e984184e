//! # Permission gate
//!
//! Guards every entry point that acts on an *existing* project. A caller may
//! act on `account`'s project when:
//!
//! ```text
//! caller == account
//!     └── or the permission store holds a grant
//!         (caller, account, project_id, permission_id)
//!         including root grants and wildcard-project grants
//! ```
//!
//! Grants are owned by the external permission store and are only read here.
//! Launching a brand-new project is not gated: anyone may launch on behalf of
//! any owner.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::interfaces::PermissionsClient;
use crate::storage::load_collaborators;
use crate::Error;

// ─────────────────────────────────────────────────────────
// Permission ids understood by the permission store
// ─────────────────────────────────────────────────────────

/// Queue new rulesets for a project.
pub const QUEUE_RULESETS: u32 = 2;
/// Replace a project's terminals.
pub const SET_TERMINALS: u32 = 15;
/// Deploy and register suckers for a project.
pub const DEPLOY_SUCKERS: u32 = 28;

/// Returns `true` if `caller` may act for `account` on `project_id`.
pub fn has_permission_from(
    env: &Env,
    caller: &Address,
    account: &Address,
    project_id: u64,
    permission_id: u32,
) -> bool {
    if caller == account {
        return true;
    }

    let permissions = PermissionsClient::new(env, &load_collaborators(env).permissions);
    permissions.has_permission(caller, account, &project_id, &permission_id, &true, &true)
}

/// Assert that `caller` may act for `account` on `project_id`.
/// Panics with `Error::NotAuthorized` on failure.
pub fn require_permission_from(
    env: &Env,
    caller: &Address,
    account: &Address,
    project_id: u64,
    permission_id: u32,
) {
    if !has_permission_from(env, caller, account, project_id, permission_id) {
        panic_with_error!(env, Error::NotAuthorized);
    }
}
