//! boundary-deploy - Deployment library for the Boundary contract suite.
//!
//! This crate provides the deployment orchestration for the three Boundary
//! contracts (EventFactory, BoundaryNFT, ClaimVerification) on the Somnia
//! testnet: backend abstraction, artifact loading, manifest persistence and
//! the fixed deployment sequence itself.

mod artifact;
pub use artifact::{ContractArtifact, encode_constructor_address};

mod backend;
pub use backend::{DeployBackend, Deployment, RpcBackend};

mod deployer;
pub use deployer::{
    BOUNDARY_NFT, CLAIM_VERIFICATION, DEFAULT_MANIFEST_PATH, Deployer, EVENT_FACTORY,
    LOW_BALANCE_THRESHOLD_WEI, format_native,
};

mod error;
pub use error::ErrorKind;

mod manifest;
pub use manifest::{DeploymentManifest, DeploymentRecord};

mod network;
pub use network::NetworkConfig;
