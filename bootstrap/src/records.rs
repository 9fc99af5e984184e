//! Deployment records of the collaborator contracts.
//!
//! Records live at `<root>/<package>/<network>/<Contract>.json`. Only the
//! `address` field is read; anything else in the file is ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::address::ChainAddress;
use crate::error::{BootstrapError, Result};

#[derive(Debug, Deserialize)]
struct Record {
    address: ChainAddress,
}

/// The five contracts the orchestrator is constructed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collaborators {
    pub controller: ChainAddress,
    pub projects: ChainAddress,
    pub permissions: ChainAddress,
    pub hook_deployer: ChainAddress,
    pub sucker_registry: ChainAddress,
}

impl Collaborators {
    pub fn load(root: &Path, network: &str) -> Result<Self> {
        // A network nobody has deployed the core to is not one we can target.
        if !root.join("core").join(network).is_dir() {
            return Err(BootstrapError::UnsupportedNetwork {
                network: network.to_string(),
            });
        }

        let collaborators = Self {
            controller: read_address(root, "core", network, "Controller")?,
            projects: read_address(root, "core", network, "Projects")?,
            permissions: read_address(root, "core", network, "Permissions")?,
            hook_deployer: read_address(root, "nft-hook", network, "HookDeployer")?,
            sucker_registry: read_address(root, "suckers", network, "SuckerRegistry")?,
        };
        debug!(?collaborators, network, "loaded deployment records");
        Ok(collaborators)
    }

    /// Constructor order of the orchestrator.
    pub fn constructor_args(&self) -> [ChainAddress; 5] {
        [
            self.controller,
            self.projects,
            self.permissions,
            self.hook_deployer,
            self.sucker_registry,
        ]
    }
}

fn record_path(root: &Path, package: &str, network: &str, contract: &str) -> PathBuf {
    root.join(package)
        .join(network)
        .join(format!("{contract}.json"))
}

fn read_address(
    root: &Path,
    package: &str,
    network: &str,
    contract: &'static str,
) -> Result<ChainAddress> {
    let path = record_path(root, package, network, contract);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(BootstrapError::MissingRecord {
                contract,
                network: network.to_string(),
                path,
            })
        }
        Err(source) => return Err(BootstrapError::Io { path, source }),
    };

    let record: Record = serde_json::from_str(&raw)
        .map_err(|source| BootstrapError::InvalidRecord { path, source })?;
    Ok(record.address)
}
