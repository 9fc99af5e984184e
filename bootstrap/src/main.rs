use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use omnichain_bootstrap::config::Args;
use omnichain_bootstrap::deploy::StellarCli;
use omnichain_bootstrap::deriver::SorobanDeriver;
use omnichain_bootstrap::registry::RpcRegistry;
use omnichain_bootstrap::{Bootstrap, Outcome};

fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    let plan = args.plan().context("failed to assemble deployment plan")?;

    let bootstrap = Bootstrap::new(
        SorobanDeriver::new(plan.network.passphrase),
        RpcRegistry::new(plan.rpc_url.clone()),
        StellarCli::new(args.stellar_bin.clone()),
    )
    .dry_run(args.dry_run);

    match bootstrap.run(&plan)? {
        Outcome::AlreadyDeployed(address) => println!("already deployed at {address}"),
        Outcome::Deployed(address) => println!("deployed at {address}"),
        Outcome::WouldDeploy(address) => println!("would deploy at {address}"),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}
