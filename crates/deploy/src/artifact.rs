//! Compiled contract build artifacts.
//!
//! The contracts themselves are compiled out-of-band; this module only reads
//! the resulting Hardhat-style artifact JSON (`contractName`, `abi`,
//! `bytecode`) and prepares creation code for submission.

use std::path::Path;

use alloy_primitives::{Address, Bytes};
use anyhow::{Context, Result};
use serde::Deserialize;

/// A compiled contract artifact, treated as an opaque factory for deployable
/// creation code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The contract name, as emitted by the compiler.
    pub contract_name: String,
    /// The contract ABI. Carried along for downstream tooling; the deployment
    /// sequence itself only needs the creation bytecode.
    #[serde(default)]
    pub abi: serde_json::Value,
    /// The creation bytecode (hex string in the artifact).
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Load the artifact for `name` from `<artifacts_dir>/<name>.json`.
    ///
    /// Fails if the artifact is missing, malformed, or carries no bytecode
    /// (interfaces and abstract contracts compile to empty bytecode).
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self> {
        let path = artifacts_dir.join(format!("{name}.json"));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read contract artifact {}", path.display()))?;
        let artifact: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse contract artifact {}", path.display()))?;

        if artifact.bytecode.is_empty() {
            anyhow::bail!(
                "Artifact {} has no creation bytecode, cannot deploy it",
                path.display()
            );
        }

        Ok(artifact)
    }

    /// The creation code for this contract with the given ABI-encoded
    /// constructor arguments appended.
    pub fn creation_code(&self, constructor_args: &Bytes) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(constructor_args);
        code.into()
    }
}

/// ABI-encode a single `address` constructor argument.
///
/// An address occupies one 32-byte word, left-padded with zeros.
pub fn encode_constructor_address(address: Address) -> Bytes {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    Bytes::copy_from_slice(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, bytes, hex};
    use tempdir::TempDir;

    fn write_artifact(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(format!("{name}.json")), body).expect("Failed to write artifact");
    }

    #[test]
    fn test_load_artifact() {
        let temp_dir = TempDir::new("boundary-test").expect("Failed to create temp dir");
        write_artifact(
            temp_dir.path(),
            "EventFactory",
            r#"{"contractName":"EventFactory","abi":[],"bytecode":"0x6080604052"}"#,
        );

        let artifact = ContractArtifact::load(temp_dir.path(), "EventFactory")
            .expect("Failed to load artifact");

        assert_eq!(artifact.contract_name, "EventFactory");
        assert_eq!(artifact.bytecode, bytes!("6080604052"));
    }

    #[test]
    fn test_load_missing_artifact() {
        let temp_dir = TempDir::new("boundary-test").expect("Failed to create temp dir");

        let result = ContractArtifact::load(temp_dir.path(), "EventFactory");
        assert!(result.is_err(), "Loading a missing artifact should fail");
    }

    #[test]
    fn test_load_empty_bytecode() {
        let temp_dir = TempDir::new("boundary-test").expect("Failed to create temp dir");
        write_artifact(
            temp_dir.path(),
            "IEventFactory",
            r#"{"contractName":"IEventFactory","abi":[],"bytecode":"0x"}"#,
        );

        let result = ContractArtifact::load(temp_dir.path(), "IEventFactory");
        assert!(
            result.is_err(),
            "An interface artifact without bytecode should be rejected"
        );
    }

    #[test]
    fn test_creation_code_appends_args() {
        let artifact = ContractArtifact {
            contract_name: "BoundaryNFT".to_string(),
            abi: serde_json::Value::Array(vec![]),
            bytecode: bytes!("600a"),
        };
        let args = encode_constructor_address(address!(
            "70997970C51812dc3A010C7d01b50e0d17dc79C8"
        ));

        let code = artifact.creation_code(&args);

        assert_eq!(code.len(), 2 + 32);
        assert_eq!(&code[..2], [0x60, 0x0a]);
        assert_eq!(&code[2..], args.as_ref());
    }

    #[test]
    fn test_encode_constructor_address_padding() {
        let encoded = encode_constructor_address(address!(
            "70997970C51812dc3A010C7d01b50e0d17dc79C8"
        ));

        assert_eq!(encoded.len(), 32);
        assert_eq!(
            hex::encode(&encoded),
            "00000000000000000000000070997970c51812dc3a010c7d01b50e0d17dc79c8"
        );
    }
}
