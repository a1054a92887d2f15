//! Network configuration snapshot.

use crate::error::Error;
use crate::types::Network;

/// Default gas price in atomic units.
pub const DEFAULT_GAS_PRICE: u64 = 1_000_000_000;

/// Default transaction version.
pub const DEFAULT_TX_VERSION: u32 = 1;

/// Immutable configuration read by every builder.
///
/// Builders receive a `&Config` explicitly, so a batch of concurrent
/// `prepare` calls always sees one consistent chain id and set of defaults.
///
/// # Example
///
/// ```
/// use mvx_kit::{Config, Network};
///
/// let config = Config::devnet().with_gas_price(2_000_000_000);
/// assert_eq!(config.network, Network::Devnet);
/// assert_eq!(config.api_url, "https://devnet-api.multiversx.com");
/// assert_eq!(config.chain_id(), "D");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Target network; determines the chain id.
    pub network: Network,
    /// Base URL of the REST API.
    pub api_url: String,
    /// Gas price used when a transaction does not override it.
    pub default_gas_price: u64,
    /// Version used when a transaction does not override it.
    pub default_tx_version: u32,
}

impl Config {
    /// Configuration for `network` with its public API and default gas settings.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            api_url: network.default_api_url().to_string(),
            default_gas_price: DEFAULT_GAS_PRICE,
            default_tx_version: DEFAULT_TX_VERSION,
        }
    }

    /// Mainnet configuration.
    pub fn mainnet() -> Self {
        Self::new(Network::Mainnet)
    }

    /// Testnet configuration.
    pub fn testnet() -> Self {
        Self::new(Network::Testnet)
    }

    /// Devnet configuration.
    pub fn devnet() -> Self {
        Self::new(Network::Devnet)
    }

    /// Use a different API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the default gas price.
    pub fn with_gas_price(mut self, gas_price: u64) -> Self {
        self.default_gas_price = gas_price;
        self
    }

    /// Set the default transaction version.
    pub fn with_tx_version(mut self, version: u32) -> Self {
        self.default_tx_version = version;
        self
    }

    /// Chain id of the configured network.
    pub fn chain_id(&self) -> &'static str {
        self.network.chain_id()
    }

    /// Load configuration from environment variables.
    ///
    /// - `MULTIVERSX_NETWORK`: `mainnet` (default), `testnet` or `devnet`,
    ///   case-insensitive.
    /// - `MULTIVERSX_API_URL`: overrides the network's public API.
    /// - `MULTIVERSX_DEFAULT_GAS_PRICE`: defaults to 1000000000.
    /// - `MULTIVERSX_DEFAULT_TX_VERSION`: defaults to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNetwork`] for an unknown network name and
    /// [`Error::Config`] for numbers that do not parse.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let network = match lookup("MULTIVERSX_NETWORK") {
            Some(name) => name.parse()?,
            None => Network::default(),
        };

        let mut config = Self::new(network);

        if let Some(url) = lookup("MULTIVERSX_API_URL") {
            config.api_url = url;
        }
        if let Some(price) = lookup("MULTIVERSX_DEFAULT_GAS_PRICE") {
            config.default_gas_price = price.trim().parse().map_err(|_| {
                Error::Config(format!("MULTIVERSX_DEFAULT_GAS_PRICE is not a number: {}", price))
            })?;
        }
        if let Some(version) = lookup("MULTIVERSX_DEFAULT_TX_VERSION") {
            config.default_tx_version = version.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "MULTIVERSX_DEFAULT_TX_VERSION is not a number: {}",
                    version
                ))
            })?;
        }

        tracing::debug!(
            network = %config.network,
            api_url = %config.api_url,
            "configuration loaded from environment"
        );
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::mainnet()
    }
}
