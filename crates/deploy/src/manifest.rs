//! The persisted deployment manifest.
//!
//! One manifest is written per run to a fixed path and overwritten wholesale
//! on the next run; nothing ever merges with or updates a prior manifest.

use std::collections::BTreeMap;
use std::path::Path;

use alloy_primitives::{Address, B256};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::Deployment;
use crate::network::NetworkConfig;

/// Deployment metadata for a single contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    /// Address the contract was deployed to.
    pub address: Address,
    /// Hash of the deployment transaction.
    pub transaction_hash: B256,
    /// Block in which the deployment transaction was included.
    pub block_number: u64,
}

impl From<Deployment> for DeploymentRecord {
    fn from(deployment: Deployment) -> Self {
        Self {
            address: deployment.address,
            transaction_hash: deployment.transaction_hash,
            block_number: deployment.block_number,
        }
    }
}

/// The aggregate record of one deployment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentManifest {
    /// Name of the target network.
    pub network: String,
    /// Chain ID of the target network.
    pub chain_id: u64,
    /// Address of the account that paid for the deployments.
    pub deployer: Address,
    /// When the manifest was assembled (ISO-8601).
    pub deployment_time: DateTime<Utc>,
    /// Per-contract deployment records, keyed by contract name.
    pub contracts: BTreeMap<String, DeploymentRecord>,
}

impl DeploymentManifest {
    /// Assemble a manifest for the current run, stamped with the current time.
    pub fn new(
        network: &NetworkConfig,
        deployer: Address,
        contracts: BTreeMap<String, DeploymentRecord>,
    ) -> Self {
        Self {
            network: network.name.clone(),
            chain_id: network.chain_id,
            deployer,
            deployment_time: Utc::now(),
            contracts,
        }
    }

    /// Write the manifest as formatted JSON, overwriting any prior content.
    ///
    /// The parent directory is created if it does not exist yet.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create manifest directory {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize deployment manifest")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

        tracing::info!(path = %path.display(), "Deployment manifest saved");
        Ok(())
    }

    /// Load a manifest written by a previous run.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }
}
