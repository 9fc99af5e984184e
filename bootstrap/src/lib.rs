//! Deterministic, idempotent deployment of the omnichain deployer contract.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`deriver`] | Address derivation from (salt, code hash, args hash, factory) |
//! | [`registry`] | Whether code already lives at an address |
//! | [`records`] | Collaborator addresses from deployment records |
//! | [`deploy`] | The deploy itself, via the stellar CLI |
//! | [`bootstrap`] | Ties the above into a single idempotent run |

pub mod address;
pub mod bootstrap;
pub mod config;
pub mod deploy;
pub mod deriver;
pub mod error;
pub mod network;
pub mod records;
pub mod registry;
mod xdr;

pub use address::ChainAddress;
pub use bootstrap::{Bootstrap, Outcome};
pub use error::{BootstrapError, Result};
