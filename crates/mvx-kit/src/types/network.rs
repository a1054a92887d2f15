//! Network identification and chain-id mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The network a transaction is bound to.
///
/// Each network maps to a fixed chain id that is embedded in every
/// transaction, so a transaction signed for one network cannot be replayed
/// on another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network.
    #[default]
    Mainnet,
    /// Public test network.
    Testnet,
    /// Development network.
    Devnet,
}

impl Network {
    /// The chain id token for this network.
    pub fn chain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "1",
            Network::Testnet => "T",
            Network::Devnet => "D",
        }
    }

    /// Default public API gateway for this network.
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://api.multiversx.com",
            Network::Testnet => "https://testnet-api.multiversx.com",
            Network::Devnet => "https://devnet-api.multiversx.com",
        }
    }

    /// Returns the network identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    /// Parse a network name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            _ => Err(Error::InvalidNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
