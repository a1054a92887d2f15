//! Builder for unsigned transactions.
//!
//! # Example
//!
//! ```
//! use mvx_kit::{Config, Egld, TransactionBuilder};
//!
//! let config = Config::devnet();
//! let tx = TransactionBuilder::new(&config)
//!     .sender("erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th")
//!     .receiver("erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx")
//!     .value("1 EGLD")
//!     .nonce(7)
//!     .gas_limit(50_000)
//!     .data("hello")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tx.chain_id, "D");
//! assert_eq!(tx.value, Egld::from_egld(1));
//! assert_eq!(tx.data.as_deref(), Some("aGVsbG8="));
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{Error, ParseAddressError, ParseAmountError};
use crate::types::{Address, Egld, IntoEgld, Transaction};

use super::config::Config;

/// Builder for a single [`Transaction`].
///
/// Setters never fail; conversion errors are reported by
/// [`build`](Self::build) after the required-parameter checks.
pub struct TransactionBuilder<'a> {
    config: &'a Config,
    sender: Option<Result<Address, ParseAddressError>>,
    receiver: Option<Result<Address, ParseAddressError>>,
    value: Option<Result<Egld, ParseAmountError>>,
    nonce: Option<u64>,
    gas_limit: Option<u64>,
    data: Option<String>,
    gas_price: Option<u64>,
    version: Option<u32>,
}

impl<'a> TransactionBuilder<'a> {
    /// Start a transaction using `config` for chain id and defaults.
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            sender: None,
            receiver: None,
            value: None,
            nonce: None,
            gas_limit: None,
            data: None,
            gas_price: None,
            version: None,
        }
    }

    /// Set the sending (and signing) address.
    pub fn sender(mut self, address: impl AsRef<str>) -> Self {
        self.sender = Some(Address::new(address));
        self
    }

    /// Set the receiving address.
    pub fn receiver(mut self, address: impl AsRef<str>) -> Self {
        self.receiver = Some(Address::new(address));
        self
    }

    /// Set the native amount to move.
    pub fn value(mut self, amount: impl IntoEgld) -> Self {
        self.value = Some(amount.into_egld());
        self
    }

    /// Set the sender's account nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Set the gas limit.
    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Set the raw call data. An empty string means no data.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Override the configured gas price.
    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Override the configured transaction version.
    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Validate the parameters and produce the unsigned transaction.
    ///
    /// Required parameters are checked in the order `sender`, `receiver`,
    /// `value`, `nonce`, `gasLimit`; the first one missing is reported as
    /// [`Error::MissingParameter`].
    pub fn build(self) -> Result<Transaction, Error> {
        let sender = self.sender.ok_or(Error::MissingParameter("sender"))??;
        let receiver = self.receiver.ok_or(Error::MissingParameter("receiver"))??;
        let value = self.value.ok_or(Error::MissingParameter("value"))??;
        let nonce = self.nonce.ok_or(Error::MissingParameter("nonce"))?;
        let gas_limit = self.gas_limit.ok_or(Error::MissingParameter("gasLimit"))?;

        let data = self
            .data
            .filter(|d| !d.is_empty())
            .map(|d| STANDARD.encode(d.as_bytes()));

        let tx = Transaction {
            nonce,
            value,
            receiver,
            sender,
            gas_price: self.gas_price.unwrap_or(self.config.default_gas_price),
            gas_limit,
            data,
            chain_id: self.config.chain_id().to_string(),
            version: self.version.unwrap_or(self.config.default_tx_version),
        };

        tracing::debug!(
            chain_id = %tx.chain_id,
            nonce = tx.nonce,
            receiver = %tx.receiver,
            "transaction prepared"
        );
        Ok(tx)
    }
}
