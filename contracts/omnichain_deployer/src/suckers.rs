//! # Sucker coordination
//!
//! Deploys and registers cross-chain peer contracts ("suckers") for a project.
//!
//! The raw salt supplied by a caller is never handed to the registry. It is
//! first bound to the requester:
//!
//! ```text
//! effective_salt = sha256(raw_salt ‖ xdr(requester))
//! ```
//!
//! Two accounts submitting the same raw salt therefore land on different
//! deterministic peer addresses, and nobody can occupy another account's
//! address by racing it with the same raw salt.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use crate::events;
use crate::interfaces::SuckerRegistryClient;
use crate::storage::load_collaborators;
use crate::types::{is_zero, SuckerDeploymentConfig};

/// Bind `raw_salt` to `requester`.
pub fn effective_salt(env: &Env, raw_salt: &BytesN<32>, requester: &Address) -> BytesN<32> {
    let mut preimage = Bytes::from_array(env, &raw_salt.to_array());
    preimage.append(&requester.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Like [`effective_salt`], but a zero salt stays zero so that collaborators
/// can still recognise "no salt requested".
pub fn bind_optional_salt(env: &Env, raw_salt: &BytesN<32>, requester: &Address) -> BytesN<32> {
    if is_zero(raw_salt) {
        raw_salt.clone()
    } else {
        effective_salt(env, raw_salt, requester)
    }
}

/// Deploy the configured suckers for `project_id`.
///
/// - Zero salt: returns an empty vector without touching the registry.
/// - Otherwise the registry receives the requester-bound salt and the peer
///   configurations in order; its result is returned in the same order.
///
/// Registry failures are not caught.
pub fn deploy_suckers_for(
    env: &Env,
    project_id: u64,
    requester: &Address,
    config: &SuckerDeploymentConfig,
) -> Vec<Address> {
    if config.is_disabled() {
        return Vec::new(env);
    }

    let salt = effective_salt(env, &config.salt, requester);
    let registry = SuckerRegistryClient::new(env, &load_collaborators(env).sucker_registry);
    let suckers = registry.deploy_suckers_for(&project_id, &salt, &config.deployer_configs);

    events::emit_suckers_deployed(env, project_id, requester.clone(), salt, suckers.clone());
    suckers
}
