//! Environment-driven configuration.
//!
//! | Variable               | Meaning                          | Default        |
//! |------------------------|----------------------------------|----------------|
//! | `AMM_NETWORK`          | `testnet` or `devnet`            | `testnet`      |
//! | `AMM_RPC_URL`          | full node override               | network URL    |
//! | `AMM_REGISTRY_ID`      | registry object address          | unset          |
//! | `AMM_PACKAGE_ID`       | AMM package address              | `0x0`          |
//! | `AMM_RPC_TIMEOUT_SECS` | per-request timeout              | `30`           |

use crate::rpc::{DEVNET_URL, RpcConfig, TESTNET_URL};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Package address used when none is configured.
pub const PLACEHOLDER_PACKAGE_ID: &str = "0x0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown network '{0}', expected testnet or devnet")]
    UnknownNetwork(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Testnet,
    Devnet,
}

impl Network {
    pub fn fullnode_url(self) -> &'static str {
        match self {
            Self::Testnet => TESTNET_URL,
            Self::Devnet => DEVNET_URL,
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "devnet" => Ok(Self::Devnet),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testnet => write!(f, "testnet"),
            Self::Devnet => write!(f, "devnet"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub network: Network,
    pub rpc_url: String,
    /// Registry object; reads fall back to the bundled pool when unset.
    pub registry_id: Option<String>,
    pub package_id: String,
    pub rpc_timeout_secs: u64,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; empty values count as unset.
    ///
    /// # Errors
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let network = get("AMM_NETWORK")
            .map(|v| v.parse::<Network>())
            .transpose()?
            .unwrap_or_default();

        let rpc_timeout_secs = match get("AMM_RPC_TIMEOUT_SECS") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "AMM_RPC_TIMEOUT_SECS",
                value: v,
            })?,
            None => RpcConfig::default().timeout_secs,
        };

        Ok(Self {
            network,
            rpc_url: get("AMM_RPC_URL").unwrap_or_else(|| network.fullnode_url().to_string()),
            registry_id: get("AMM_REGISTRY_ID"),
            package_id: get("AMM_PACKAGE_ID").unwrap_or_else(|| PLACEHOLDER_PACKAGE_ID.to_string()),
            rpc_timeout_secs,
        })
    }

    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            url: self.rpc_url.clone(),
            timeout_secs: self.rpc_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.rpc_url, TESTNET_URL);
        assert_eq!(config.registry_id, None);
        assert_eq!(config.package_id, PLACEHOLDER_PACKAGE_ID);
        assert_eq!(config.rpc_timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AMM_NETWORK", "Devnet"),
            ("AMM_REGISTRY_ID", "0xreg"),
            ("AMM_PACKAGE_ID", "0xpkg"),
            ("AMM_RPC_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.network, Network::Devnet);
        assert_eq!(config.rpc_url, DEVNET_URL);
        assert_eq!(config.registry_id.as_deref(), Some("0xreg"));
        assert_eq!(config.rpc_config().timeout_secs, 5);
    }

    #[test]
    fn test_empty_registry_counts_as_unset() {
        let config = config_from(&[("AMM_REGISTRY_ID", "  ")]).unwrap();
        assert_eq!(config.registry_id, None);
    }

    #[test]
    fn test_rpc_url_override_wins() {
        let config = config_from(&[("AMM_NETWORK", "devnet"), ("AMM_RPC_URL", "http://localhost:9000")]).unwrap();
        assert_eq!(config.rpc_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("AMM_NETWORK", "mainnet")]),
            Err(ConfigError::UnknownNetwork("mainnet".into()))
        );
        assert!(matches!(
            config_from(&[("AMM_RPC_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
