//! The deployment sequence.

use std::collections::BTreeMap;
use std::path::PathBuf;

use alloy_primitives::{Bytes, U256};
use anyhow::{Context, Result};
use comfy_table::Table;

use crate::artifact::{ContractArtifact, encode_constructor_address};
use crate::backend::{DeployBackend, Deployment};
use crate::manifest::DeploymentManifest;
use crate::network::NetworkConfig;

/// Name of the event management contract, deployed first.
pub const EVENT_FACTORY: &str = "EventFactory";
/// Name of the NFT contract, wired to the EventFactory via its constructor.
pub const BOUNDARY_NFT: &str = "BoundaryNFT";
/// Name of the claim verification contract, standalone.
pub const CLAIM_VERIFICATION: &str = "ClaimVerification";

/// Default path the deployment manifest is written to.
pub const DEFAULT_MANIFEST_PATH: &str = "deployments/somnia-testnet-deployment.json";

/// Balance below which a faucet top-up warning is emitted (0.1 native units).
pub const LOW_BALANCE_THRESHOLD_WEI: U256 = U256::from_limbs([100_000_000_000_000_000, 0, 0, 0]);

/// Orchestrates the fixed deployment sequence for the Boundary contract
/// suite and reports the outcome.
///
/// The sequence is strictly ordered and fail-fast: each contract deployment
/// is awaited to confirmation before the next begins, any failure aborts the
/// remainder, and nothing already deployed is rolled back. At most one
/// attempt is made per contract.
#[derive(Debug, Clone)]
pub struct Deployer {
    /// The network the contracts are deployed to.
    pub network: NetworkConfig,
    /// Directory holding the compiled contract artifacts.
    pub artifacts_dir: PathBuf,
    /// Path the deployment manifest is written to.
    pub manifest_path: PathBuf,
}

impl Deployer {
    pub fn new(network: NetworkConfig, artifacts_dir: PathBuf, manifest_path: PathBuf) -> Self {
        Self {
            network,
            artifacts_dir,
            manifest_path,
        }
    }

    /// Run the full deployment sequence against `backend`.
    ///
    /// Returns the manifest that was written on success. Errors propagate to
    /// the caller unclassified; the CLI maps them to operator hints.
    pub async fn run<B: DeployBackend + ?Sized>(&self, backend: &B) -> Result<DeploymentManifest> {
        tracing::info!("Starting deployment to {}...", self.network.name);
        tracing::info!(
            chain_id = self.network.chain_id,
            rpc_url = %self.network.rpc_url,
            explorer = %self.network.explorer_url,
            currency = %self.network.currency_symbol,
            "Network configuration"
        );

        let deployer_address = backend.deployer_address();
        tracing::info!(deployer = %deployer_address, "Deploying contracts with account");

        let balance = backend.balance().await?;
        tracing::info!(
            "Account balance: {} {}",
            format_native(balance),
            self.network.currency_symbol
        );
        if balance < LOW_BALANCE_THRESHOLD_WEI {
            tracing::warn!(
                "Low balance! You may need more {} for gas fees. Get testnet funds from: {}",
                self.network.currency_symbol,
                self.network.faucet_url
            );
        }

        let mut contracts = BTreeMap::new();

        let event_factory = self
            .deploy_one(backend, EVENT_FACTORY, Bytes::new())
            .await?;
        contracts.insert(EVENT_FACTORY.to_string(), event_factory.into());

        // BoundaryNFT takes the confirmed EventFactory address as its sole
        // constructor argument.
        let boundary_nft = self
            .deploy_one(
                backend,
                BOUNDARY_NFT,
                encode_constructor_address(event_factory.address),
            )
            .await?;
        contracts.insert(BOUNDARY_NFT.to_string(), boundary_nft.into());

        let claim_verification = self
            .deploy_one(backend, CLAIM_VERIFICATION, Bytes::new())
            .await?;
        contracts.insert(CLAIM_VERIFICATION.to_string(), claim_verification.into());

        let manifest = DeploymentManifest::new(&self.network, deployer_address, contracts);
        manifest
            .save_to_file(&self.manifest_path)
            .context("Failed to persist deployment manifest")?;

        self.log_summary(&manifest);

        Ok(manifest)
    }

    /// Deploy a single contract and wait for its confirmation.
    async fn deploy_one<B: DeployBackend + ?Sized>(
        &self,
        backend: &B,
        name: &str,
        constructor_args: Bytes,
    ) -> Result<Deployment> {
        tracing::info!("Deploying {name} contract...");

        let artifact = ContractArtifact::load(&self.artifacts_dir, name)?;
        let deployment = backend.deploy_contract(&artifact, constructor_args).await?;

        tracing::info!(
            address = %deployment.address,
            tx_hash = %deployment.transaction_hash,
            block = deployment.block_number,
            "{name} deployed"
        );
        tracing::info!(
            "View on explorer: {}",
            self.network.explorer_address_url(&deployment.address)
        );

        Ok(deployment)
    }

    fn log_summary(&self, manifest: &DeploymentManifest) {
        tracing::info!("Deployment completed successfully!");
        tracing::info!("=== Deployment summary ===");
        tracing::info!(
            "Network: {} (Chain ID: {})",
            manifest.network,
            manifest.chain_id
        );
        tracing::info!("Deployer: {}", manifest.deployer);
        tracing::info!("Time: {}", manifest.deployment_time.to_rfc3339());

        let mut table = Table::new();
        table.set_header(vec!["Contract", "Address", "Explorer"]);
        for (name, record) in &manifest.contracts {
            table.add_row(vec![
                name.clone(),
                record.address.to_string(),
                self.network.explorer_address_url(&record.address),
            ]);
        }
        tracing::info!("Contract addresses:\n{table}");
    }
}

/// Format a wei amount as a decimal native-currency string.
pub fn format_native(wei: U256) -> String {
    const WEI_PER_UNIT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

    let whole = wei / WEI_PER_UNIT;
    let frac = wei % WEI_PER_UNIT;
    if frac.is_zero() {
        return whole.to_string();
    }

    let frac = format!("{:0>18}", frac.to_string());
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_native_whole_units() {
        assert_eq!(format_native(U256::ZERO), "0");
        assert_eq!(
            format_native(U256::from(1_000_000_000_000_000_000u128)),
            "1"
        );
        assert_eq!(
            format_native(U256::from(25_000_000_000_000_000_000u128)),
            "25"
        );
    }

    #[test]
    fn test_format_native_fractional() {
        assert_eq!(format_native(U256::from(100_000_000_000_000_000u128)), "0.1");
        assert_eq!(
            format_native(U256::from(1_500_000_000_000_000_000u128)),
            "1.5"
        );
        assert_eq!(format_native(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn test_low_balance_threshold_is_a_tenth_of_a_unit() {
        assert_eq!(format_native(LOW_BALANCE_THRESHOLD_WEI), "0.1");
        assert!(U256::from(99_999_999_999_999_999u128) < LOW_BALANCE_THRESHOLD_WEI);
        assert!(U256::from(100_000_000_000_000_001u128) >= LOW_BALANCE_THRESHOLD_WEI);
    }
}
