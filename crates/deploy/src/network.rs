//! Target network description.

use alloy_primitives::Address;
use url::Url;

/// The chain ID of the Somnia testnet.
pub const SOMNIA_TESTNET_CHAIN_ID: u64 = 50312;

/// The default RPC endpoint for the Somnia testnet.
pub const SOMNIA_TESTNET_RPC_URL: &str = "https://dream-rpc.somnia.network";

/// The block explorer for the Somnia testnet.
pub const SOMNIA_TESTNET_EXPLORER_URL: &str = "https://shannon-explorer.somnia.network/";

/// The faucet dispensing testnet STT.
pub const SOMNIA_TESTNET_FAUCET_URL: &str = "https://testnet.somnia.network/";

/// Description of the network the contracts are deployed to.
///
/// The tool targets a single network (Somnia testnet); the RPC endpoint can be
/// overridden to point at a local fork of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Network name as recorded in the deployment manifest.
    pub name: String,
    /// The chain ID.
    pub chain_id: u64,
    /// The JSON-RPC endpoint transactions are submitted to.
    pub rpc_url: Url,
    /// Base URL of the block explorer.
    pub explorer_url: Url,
    /// URL of the testnet faucet, surfaced in low-balance warnings and
    /// insufficient-funds hints.
    pub faucet_url: Url,
    /// Ticker of the native currency.
    pub currency_symbol: String,
}

impl NetworkConfig {
    /// The Somnia testnet with its public endpoints.
    pub fn somnia_testnet() -> Self {
        Self {
            name: "somniaTestnet".to_string(),
            chain_id: SOMNIA_TESTNET_CHAIN_ID,
            rpc_url: Url::parse(SOMNIA_TESTNET_RPC_URL).expect("static URL is valid"),
            explorer_url: Url::parse(SOMNIA_TESTNET_EXPLORER_URL).expect("static URL is valid"),
            faucet_url: Url::parse(SOMNIA_TESTNET_FAUCET_URL).expect("static URL is valid"),
            currency_symbol: "STT".to_string(),
        }
    }

    /// Explorer page for a deployed contract address.
    pub fn explorer_address_url(&self, address: &Address) -> String {
        format!(
            "{}/address/{}",
            self.explorer_url.as_str().trim_end_matches('/'),
            address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_somnia_testnet_defaults() {
        let network = NetworkConfig::somnia_testnet();

        assert_eq!(network.name, "somniaTestnet");
        assert_eq!(network.chain_id, 50312);
        assert_eq!(network.rpc_url.as_str(), "https://dream-rpc.somnia.network/");
        assert_eq!(network.currency_symbol, "STT");
    }

    #[test]
    fn test_explorer_address_url() {
        let network = NetworkConfig::somnia_testnet();
        let addr = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

        assert_eq!(
            network.explorer_address_url(&addr),
            "https://shannon-explorer.somnia.network/address/0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        );
    }
}
