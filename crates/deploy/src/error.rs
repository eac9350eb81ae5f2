//! Classification of deployment failures.
//!
//! The transaction layer surfaces provider errors as opaque `anyhow` chains;
//! this module maps them to a typed kind at the CLI boundary so the operator
//! gets an actionable remediation hint. Matching is a substring heuristic on
//! the rendered error chain, the same signal the node's error messages carry.

use crate::network::NetworkConfig;

/// The kind of a deployment failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// The deployer account cannot cover gas plus value.
    InsufficientFunds,
    /// RPC connectivity or transport failure.
    Network,
    /// Gas pricing or gas limit failure.
    Gas,
    /// Anything else.
    Unknown,
}

impl ErrorKind {
    /// Classify an error by case-insensitive substring search over its full
    /// context chain.
    ///
    /// Funds errors are matched before network errors, and network before
    /// gas: "insufficient funds for gas" must classify as a funds problem.
    pub fn classify(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}").to_lowercase();

        if message.contains("insufficient funds") {
            Self::InsufficientFunds
        } else if message.contains("network")
            || message.contains("connection")
            || message.contains("transport")
            || message.contains("timed out")
        {
            Self::Network
        } else if message.contains("gas") {
            Self::Gas
        } else {
            Self::Unknown
        }
    }

    /// Remediation hint for the operator, if the kind has one.
    pub fn hint(&self, network: &NetworkConfig) -> Option<String> {
        match self {
            Self::InsufficientFunds => Some(format!(
                "Get more {} from the faucet: {}",
                network.currency_symbol, network.faucet_url
            )),
            Self::Network => Some(format!(
                "Check your RPC connection to {} ({})",
                network.name, network.rpc_url
            )),
            Self::Gas => Some("Try increasing the gas limit or gas price".to_string()),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_insufficient_funds() {
        let err = anyhow::anyhow!("insufficient funds for gas * price + value");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::InsufficientFunds);
    }

    #[test]
    fn test_classify_funds_takes_precedence_over_gas() {
        // The node phrases funds errors in terms of gas; they must still
        // classify as a funds problem.
        let err = anyhow::anyhow!("Insufficient Funds for gas");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::InsufficientFunds);
    }

    #[test]
    fn test_classify_network() {
        let err = anyhow::anyhow!("network error: connection refused");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::Network);

        let err = anyhow::anyhow!("request timed out");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::Network);
    }

    #[test]
    fn test_classify_gas() {
        let err = anyhow::anyhow!("intrinsic gas too low");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::Gas);
    }

    #[test]
    fn test_classify_unknown() {
        let err = anyhow::anyhow!("execution reverted");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::Unknown);
    }

    #[test]
    fn test_classify_searches_context_chain() {
        let err = anyhow::Error::msg("insufficient funds for transfer")
            .context("Failed to submit EventFactory deployment");
        assert_eq!(ErrorKind::classify(&err), ErrorKind::InsufficientFunds);
    }

    #[test]
    fn test_hints() {
        let network = NetworkConfig::somnia_testnet();

        let funds_hint = ErrorKind::InsufficientFunds
            .hint(&network)
            .expect("Funds errors should carry a hint");
        assert!(funds_hint.contains("STT"));
        assert!(funds_hint.contains("https://testnet.somnia.network/"));

        assert!(ErrorKind::Network.hint(&network).is_some());
        assert!(ErrorKind::Gas.hint(&network).is_some());
        assert!(ErrorKind::Unknown.hint(&network).is_none());
    }
}
