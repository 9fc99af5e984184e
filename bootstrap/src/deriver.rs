//! Deterministic address derivation.
//!
//! A [`DeterministicDeployment`] names the inputs of a salted deployment; an
//! [`AddressDeriver`] turns them into the address the deployment will land on.
//! The rule differs per chain family, so it sits behind a trait.

use sha2::{Digest, Sha256};

use crate::address::ChainAddress;
use crate::xdr;

/// SHA-256 over the concatenation of `parts`.
pub fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Hash of constructor arguments, taken over their raw ids in order.
pub fn args_hash(args: &[ChainAddress]) -> [u8; 32] {
    let raw: Vec<&[u8]> = args.iter().map(|arg| arg.raw().as_slice()).collect();
    sha256(&raw)
}

/// (salt, code hash, constructor-args hash) deployed through `factory`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeterministicDeployment {
    pub salt: [u8; 32],
    pub code_hash: [u8; 32],
    pub args_hash: [u8; 32],
    pub factory: ChainAddress,
}

impl DeterministicDeployment {
    /// The salt actually handed to the factory. Folding the code and
    /// arguments in makes the address depend on the whole triple.
    pub fn deploy_salt(&self) -> [u8; 32] {
        sha256(&[&self.salt, &self.code_hash, &self.args_hash])
    }
}

pub trait AddressDeriver {
    fn derive(&self, deployment: &DeterministicDeployment) -> ChainAddress;
}

/// Soroban contract-id derivation for one network.
#[derive(Clone, Debug)]
pub struct SorobanDeriver {
    network_id: [u8; 32],
}

impl SorobanDeriver {
    pub fn new(network_passphrase: &str) -> Self {
        Self {
            network_id: sha256(&[network_passphrase.as_bytes()]),
        }
    }

    pub fn network_id(&self) -> &[u8; 32] {
        &self.network_id
    }
}

impl AddressDeriver for SorobanDeriver {
    fn derive(&self, deployment: &DeterministicDeployment) -> ChainAddress {
        let preimage = xdr::contract_id_preimage(
            &self.network_id,
            &deployment.factory,
            &deployment.deploy_salt(),
        );
        ChainAddress::Contract(sha256(&[&preimage]))
    }
}
