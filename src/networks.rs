//! Known network registry.
//!
//! Maps human-readable network names to SS58 prefixes and RPC endpoints.
//! This is configuration, not conversion logic: the conversion functions
//! take a bare [`Ss58Prefix`] and never consult this table. The endpoint
//! belongs to the external cross-validation harness; nothing in this
//! crate dials it.

use serde::Serialize;

use crate::types::Ss58Prefix;

/// A network the converter knows by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownNetwork {
    /// Machine identifier (e.g. "polkadot-hub")
    pub identifier: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// SS58 prefix used when encoding for this network
    pub ss58_prefix: Ss58Prefix,
    /// Chain RPC endpoint, for external tooling
    pub rpc_url: &'static str,
}

/// Registry of networks selectable by name.
///
/// The testnet shares Polkadot Hub's prefix — same encoding, different
/// endpoint.
pub const KNOWN_NETWORKS: &[KnownNetwork] = &[
    KnownNetwork {
        identifier: "polkadot-hub",
        display_name: "Polkadot Hub",
        ss58_prefix: Ss58Prefix(0),
        rpc_url: "wss://polkadot-asset-hub-rpc.polkadot.io",
    },
    KnownNetwork {
        identifier: "kusama-hub",
        display_name: "Kusama Hub",
        ss58_prefix: Ss58Prefix(2),
        rpc_url: "wss://kusama-asset-hub-rpc.polkadot.io",
    },
    KnownNetwork {
        identifier: "polkadot-hub-testnet",
        display_name: "Polkadot Hub Testnet",
        ss58_prefix: Ss58Prefix(0),
        rpc_url: "wss://testnet-passet-hub.polkadot.io",
    },
];

/// Look up a network by identifier, case-insensitively.
pub fn find(identifier: &str) -> Option<&'static KnownNetwork> {
    KNOWN_NETWORKS
        .iter()
        .find(|n| n.identifier.eq_ignore_ascii_case(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_prefixes() {
        assert_eq!(find("polkadot-hub").unwrap().ss58_prefix, Ss58Prefix(0));
        assert_eq!(find("kusama-hub").unwrap().ss58_prefix, Ss58Prefix(2));
        assert_eq!(
            find("polkadot-hub-testnet").unwrap().ss58_prefix,
            Ss58Prefix(0)
        );
    }

    #[test]
    fn test_find_case_insensitive() {
        assert!(find("Polkadot-Hub").is_some());
        assert!(find("KUSAMA-HUB").is_some());
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("westend").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_testnet_shares_prefix_distinct_endpoint() {
        let mainnet = find("polkadot-hub").unwrap();
        let testnet = find("polkadot-hub-testnet").unwrap();
        assert_eq!(mainnet.ss58_prefix, testnet.ss58_prefix);
        assert_ne!(mainnet.rpc_url, testnet.rpc_url);
    }
}
