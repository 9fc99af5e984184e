//! # Launch sequencing
//!
//! A launch moves through a strictly forward state machine:
//!
//! ```text
//! Requested ──► Configured ──► Suckered ──► Owned
//! ```
//!
//! - `Requested → Configured`: the controller (or the hook deployer) mints the
//!   project to this contract and applies its configuration in one call.
//! - `Configured → Suckered`: suckers are paired, or pairing is skipped for a
//!   zero salt.
//! - `Suckered → Owned`: the project is transferred to the requested owner and
//!   the transfer is verified.
//!
//! Nothing here is persisted. The whole machine runs inside one contract
//! invocation, which is the transactional boundary: if any step fails, every
//! write made by this contract and by the collaborators it called is discarded.
//! A project can therefore never remain owned by the deployer.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::interfaces::ProjectsClient;
use crate::storage::load_collaborators;
use crate::suckers;
use crate::types::SuckerDeploymentConfig;
use crate::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LaunchStage {
    Requested,
    Configured { project_id: u64 },
    Suckered { project_id: u64, suckers: Vec<Address> },
    Owned { project_id: u64, suckers: Vec<Address> },
}

/// One in-flight launch.
pub struct Launch {
    caller: Address,
    owner: Address,
    stage: LaunchStage,
}

impl Launch {
    pub fn new(caller: Address, owner: Address) -> Self {
        Self {
            caller,
            owner,
            stage: LaunchStage::Requested,
        }
    }

    pub fn stage(&self) -> &LaunchStage {
        &self.stage
    }

    /// Record that `project_id` was minted to this contract and configured.
    pub fn configured(&mut self, env: &Env, project_id: u64) {
        match self.stage {
            LaunchStage::Requested => self.stage = LaunchStage::Configured { project_id },
            _ => panic_with_error!(env, Error::InvalidLaunchStage),
        }
    }

    /// Pair the project with its suckers, bound to the launching caller.
    pub fn pair_suckers(&mut self, env: &Env, config: &SuckerDeploymentConfig) {
        let project_id = match self.stage {
            LaunchStage::Configured { project_id } => project_id,
            _ => panic_with_error!(env, Error::InvalidLaunchStage),
        };
        let suckers = suckers::deploy_suckers_for(env, project_id, &self.caller, config);
        self.stage = LaunchStage::Suckered {
            project_id,
            suckers,
        };
    }

    /// Hand the project to its requested owner and confirm the registry agrees.
    pub fn transfer_ownership(&mut self, env: &Env) {
        let (project_id, suckers) = match &self.stage {
            LaunchStage::Suckered {
                project_id,
                suckers,
            } => (*project_id, suckers.clone()),
            _ => panic_with_error!(env, Error::InvalidLaunchStage),
        };

        let projects = ProjectsClient::new(env, &load_collaborators(env).projects);
        projects.transfer_from(&env.current_contract_address(), &self.owner, &project_id);

        if projects.owner_of(&project_id) != self.owner {
            panic_with_error!(env, Error::OwnershipNotTransferred);
        }

        self.stage = LaunchStage::Owned {
            project_id,
            suckers,
        };
    }

    /// Consume a finished launch. Only valid in `Owned`.
    pub fn finish(self, env: &Env) -> (u64, Vec<Address>) {
        match self.stage {
            LaunchStage::Owned {
                project_id,
                suckers,
            } => (project_id, suckers),
            _ => panic_with_error!(env, Error::InvalidLaunchStage),
        }
    }
}
