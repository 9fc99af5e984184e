//! Idempotent deployment of the orchestrator.
//!
//! The target address is derived before anything touches the chain. If code
//! already lives there the run is a no-op. Otherwise the signing account is
//! checked against the factory the address was derived for, and only then is
//! the deployer invoked. It must land exactly on the derived address.

use tracing::{info, warn};

use crate::address::ChainAddress;
use crate::deploy::{Deployer, DeploymentPlan};
use crate::deriver::AddressDeriver;
use crate::error::{BootstrapError, Result};
use crate::registry::DeploymentRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    AlreadyDeployed(ChainAddress),
    Deployed(ChainAddress),
    /// Dry run: nothing at the derived address and nothing was deployed.
    WouldDeploy(ChainAddress),
}

impl Outcome {
    pub fn address(&self) -> ChainAddress {
        match self {
            Self::AlreadyDeployed(address) | Self::Deployed(address) | Self::WouldDeploy(address) => {
                *address
            }
        }
    }
}

pub struct Bootstrap<A, R, D> {
    deriver: A,
    registry: R,
    deployer: D,
    dry_run: bool,
}

impl<A, R, D> Bootstrap<A, R, D>
where
    A: AddressDeriver,
    R: DeploymentRegistry,
    D: Deployer,
{
    pub fn new(deriver: A, registry: R, deployer: D) -> Self {
        Self {
            deriver,
            registry,
            deployer,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, plan: &DeploymentPlan) -> Result<Outcome> {
        let expected = self.deriver.derive(&plan.deployment);
        info!(%expected, network = plan.network.name, "derived orchestrator address");

        if self.registry.is_deployed(&expected)? {
            info!(%expected, "orchestrator already deployed");
            return Ok(Outcome::AlreadyDeployed(expected));
        }

        let factory = plan.deployment.factory;
        let signer = self.deployer.signer(plan)?;
        if signer != factory {
            warn!(%factory, %signer, "source account is not the factory");
            return Err(BootstrapError::FactoryMismatch { factory, signer });
        }

        if self.dry_run {
            info!(%expected, "dry run, skipping deploy");
            return Ok(Outcome::WouldDeploy(expected));
        }

        let actual = self.deployer.deploy(plan)?;
        if actual != expected {
            warn!(%expected, %actual, "deployed address does not match derivation");
            return Err(BootstrapError::AddressMismatch { expected, actual });
        }

        info!(address = %actual, "orchestrator deployed");
        Ok(Outcome::Deployed(actual))
    }
}
