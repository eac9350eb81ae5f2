//! boundary-deploy is a one-shot CLI that deploys the Boundary contract
//! suite (EventFactory, BoundaryNFT, ClaimVerification) to the Somnia
//! testnet and records the result in a JSON manifest.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use alloy_signer_local::PrivateKeySigner;
use boundary_deploy::{Deployer, ErrorKind, NetworkConfig, RpcBackend};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger.
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    let mut network = NetworkConfig::somnia_testnet();
    if let Some(rpc_url) = cli.rpc_url {
        network.rpc_url = rpc_url;
    }

    let signer: PrivateKeySigner = cli
        .private_key
        .parse()
        .context("Invalid deployer private key")?;
    let backend = RpcBackend::connect(&network, signer)?;

    let deployer = Deployer::new(network.clone(), cli.artifacts, cli.manifest);

    // Single catch point for the whole sequence: classify, hint, exit 1.
    // Contracts deployed before the failure stay live but unrecorded.
    if let Err(err) = deployer.run(&backend).await {
        let kind = ErrorKind::classify(&err);
        tracing::error!(kind = %kind, "Deployment failed: {err:#}");
        if let Some(hint) = kind.hint(&network) {
            tracing::warn!("{hint}");
        }
        std::process::exit(1);
    }

    Ok(())
}
