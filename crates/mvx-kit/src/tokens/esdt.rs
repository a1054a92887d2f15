//! Fungible token (ESDT) transfers.

use crate::client::{Config, TransactionBuilder};
use crate::error::{Error, ParseAmountError};
use crate::types::{Egld, IntoTokenAmount, Transaction, U256, magnitude_hex, to_atomic};

/// Builder for a fungible token transfer.
///
/// Produces `data = "ESDTTransfer@<hex(token)>@<hex(amount)>"` with a zero
/// native value.
#[derive(Default)]
pub struct EsdtTransfer {
    sender: Option<String>,
    receiver: Option<String>,
    token: Option<String>,
    amount: Option<Result<U256, ParseAmountError>>,
    nonce: Option<u64>,
    gas_limit: Option<u64>,
}

impl EsdtTransfer {
    /// Start an empty transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sending address.
    pub fn sender(mut self, address: impl AsRef<str>) -> Self {
        self.sender = Some(address.as_ref().to_string());
        self
    }

    /// Set the receiving address.
    pub fn receiver(mut self, address: impl AsRef<str>) -> Self {
        self.receiver = Some(address.as_ref().to_string());
        self
    }

    /// Set the token identifier, e.g. `WEGLD-bd4d79`.
    pub fn token(mut self, identifier: impl Into<String>) -> Self {
        self.token = Some(identifier.into());
        self
    }

    /// Set the amount in atomic units.
    ///
    /// Accepts native integers, [`U256`] or a string of decimal digits.
    pub fn amount(mut self, atomic: impl IntoTokenAmount) -> Self {
        self.amount = Some(atomic.into_token_amount());
        self
    }

    /// Set the amount as a decimal string scaled by the token's decimals.
    pub fn decimal_amount(mut self, amount: &str, decimals: u8) -> Self {
        self.amount = Some(to_atomic(amount, decimals));
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

    /// Validate, encode the transfer and build the unsigned transaction.
    ///
    /// Required parameters, in check order: `sender`, `receiver`,
    /// `tokenIdentifier`, `amount`, `nonce`, `gasLimit`.
    pub fn prepare(self, config: &Config) -> Result<Transaction, Error> {
        let sender = self.sender.ok_or(Error::MissingParameter("sender"))?;
        let receiver = self.receiver.ok_or(Error::MissingParameter("receiver"))?;
        let token = self.token.ok_or(Error::MissingParameter("tokenIdentifier"))?;
        let amount = self.amount.ok_or(Error::MissingParameter("amount"))??;
        let nonce = self.nonce.ok_or(Error::MissingParameter("nonce"))?;
        let gas_limit = self.gas_limit.ok_or(Error::MissingParameter("gasLimit"))?;

        if token.is_empty() {
            return Err(Error::invalid_argument("Token identifier cannot be empty"));
        }

        let data = format!(
            "ESDTTransfer@{}@{}",
            hex::encode(token.as_bytes()),
            magnitude_hex(amount)
        );

        TransactionBuilder::new(config)
            .sender(sender)
            .receiver(receiver)
            .value(Egld::ZERO)
            .nonce(nonce)
            .gas_limit(gas_limit)
            .data(data)
            .build()
    }
}
