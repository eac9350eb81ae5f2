//! Transaction submission backends.
//!
//! The deployment sequence talks to the chain through [`DeployBackend`] so
//! tests can substitute a double for the live JSON-RPC provider.

use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::artifact::ContractArtifact;
use crate::network::NetworkConfig;

/// The confirmation triple recorded for one deployed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Address the contract was deployed to.
    pub address: Address,
    /// Hash of the deployment transaction.
    pub transaction_hash: B256,
    /// Block in which the deployment transaction was included.
    pub block_number: u64,
}

/// A backend able to submit deployment transactions for a single signing
/// account.
///
/// `deploy_contract` must only return once the transaction is confirmed; the
/// orchestrator relies on this as its synchronization point between steps.
#[async_trait]
pub trait DeployBackend: Send + Sync {
    /// The address of the signing account paying for the deployments.
    fn deployer_address(&self) -> Address;

    /// Current native-currency balance of the deployer, in wei.
    async fn balance(&self) -> Result<U256>;

    /// Deploy one contract and wait for on-chain confirmation.
    ///
    /// `constructor_args` is the ABI-encoded constructor argument blob,
    /// empty for argument-less constructors.
    async fn deploy_contract(
        &self,
        artifact: &ContractArtifact,
        constructor_args: Bytes,
    ) -> Result<Deployment>;
}

/// Live backend over an alloy wallet-filled HTTP provider.
///
/// Nonce and gas management are left to the provider's recommended fillers;
/// confirmation waiting uses the provider's default receipt polling.
pub struct RpcBackend {
    provider: DynProvider,
    deployer: Address,
}

impl RpcBackend {
    /// Connect to the network's RPC endpoint with the given signing key.
    pub fn connect(network: &NetworkConfig, signer: PrivateKeySigner) -> Result<Self> {
        let deployer = signer.address();
        let wallet = EthereumWallet::from(signer);

        let rpc_url = network
            .rpc_url
            .as_str()
            .parse()
            .with_context(|| format!("Invalid RPC URL: {}", network.rpc_url))?;

        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc_url)
            .erased();

        Ok(Self { provider, deployer })
    }
}

#[async_trait]
impl DeployBackend for RpcBackend {
    fn deployer_address(&self) -> Address {
        self.deployer
    }

    async fn balance(&self) -> Result<U256> {
        self.provider
            .get_balance(self.deployer)
            .await
            .context("Failed to query deployer balance")
    }

    async fn deploy_contract(
        &self,
        artifact: &ContractArtifact,
        constructor_args: Bytes,
    ) -> Result<Deployment> {
        let code = artifact.creation_code(&constructor_args);
        let tx = TransactionRequest::default().with_deploy_code(code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .with_context(|| format!("Failed to submit {} deployment", artifact.contract_name))?;

        tracing::debug!(
            contract = %artifact.contract_name,
            tx_hash = %pending.tx_hash(),
            "Deployment transaction sent, waiting for confirmation..."
        );

        let receipt = pending.get_receipt().await.with_context(|| {
            format!(
                "Failed waiting for {} deployment confirmation",
                artifact.contract_name
            )
        })?;

        let address = receipt.contract_address.with_context(|| {
            format!(
                "{} deployment receipt carries no contract address",
                artifact.contract_name
            )
        })?;
        let block_number = receipt.block_number.with_context(|| {
            format!(
                "{} deployment receipt carries no block number",
                artifact.contract_name
            )
        })?;

        Ok(Deployment {
            address,
            transaction_hash: receipt.transaction_hash,
            block_number,
        })
    }
}
