//! Non-fungible and semi-fungible token transfers.

use crate::client::{Config, TransactionBuilder};
use crate::error::{Error, ParseAmountError};
use crate::types::{Address, Egld, IntoTokenAmount, Transaction, U256, magnitude_hex};

/// Builder for an NFT/SFT transfer.
///
/// The outer transaction is a self-transfer: its receiver is the sender and
/// the real recipient is carried in `data`:
///
/// `ESDTNFTTransfer@<hex(collection)>@<hex(token nonce)>@<hex(quantity)>@<recipient public key>`
///
/// The token-level nonce identifies the token inside its collection; the
/// transaction nonce is the sender's account nonce. They are set separately.
///
/// # Example
///
/// ```
/// use mvx_kit::{Config, NftTransfer};
///
/// let alice = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
/// let tx = NftTransfer::new()
///     .sender(alice)
///     .receiver("erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx")
///     .collection("NFT-123456")
///     .token_nonce(10)
///     .quantity(1u64)
///     .tx_nonce(42)
///     .gas_limit(1_000_000)
///     .prepare(&Config::devnet())
///     .unwrap();
///
/// assert_eq!(tx.receiver.as_str(), alice);
/// assert_eq!(tx.nonce, 42);
/// ```
#[derive(Default)]
pub struct NftTransfer {
    sender: Option<String>,
    receiver: Option<String>,
    collection: Option<String>,
    token_nonce: Option<u64>,
    quantity: Option<Result<U256, ParseAmountError>>,
    tx_nonce: Option<u64>,
    gas_limit: Option<u64>,
}

impl NftTransfer {
    /// Start an empty transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sending address (also the outer transaction's receiver).
    pub fn sender(mut self, address: impl AsRef<str>) -> Self {
        self.sender = Some(address.as_ref().to_string());
        self
    }

    /// Set the actual recipient of the token.
    pub fn receiver(mut self, address: impl AsRef<str>) -> Self {
        self.receiver = Some(address.as_ref().to_string());
        self
    }

    /// Set the collection identifier, e.g. `NFT-123456`.
    pub fn collection(mut self, identifier: impl Into<String>) -> Self {
        self.collection = Some(identifier.into());
        self
    }

    /// Set the token's nonce within its collection.
    pub fn token_nonce(mut self, nonce: u64) -> Self {
        self.token_nonce = Some(nonce);
        self
    }

    /// Set the quantity; 1 for an NFT.
    pub fn quantity(mut self, quantity: impl IntoTokenAmount) -> Self {
        self.quantity = Some(quantity.into_token_amount());
        self
    }

    /// Set the sender's account nonce.
    pub fn tx_nonce(mut self, nonce: u64) -> Self {
        self.tx_nonce = Some(nonce);
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
    /// `collection`, `nonce` (token-level), `quantity`, `txNonce`, `gasLimit`.
    pub fn prepare(self, config: &Config) -> Result<Transaction, Error> {
        let sender = self.sender.ok_or(Error::MissingParameter("sender"))?;
        let receiver = self.receiver.ok_or(Error::MissingParameter("receiver"))?;
        let collection = self.collection.ok_or(Error::MissingParameter("collection"))?;
        let token_nonce = self.token_nonce.ok_or(Error::MissingParameter("nonce"))?;
        let quantity = self.quantity.ok_or(Error::MissingParameter("quantity"))??;
        let tx_nonce = self.tx_nonce.ok_or(Error::MissingParameter("txNonce"))?;
        let gas_limit = self.gas_limit.ok_or(Error::MissingParameter("gasLimit"))?;

        if collection.is_empty() {
            return Err(Error::invalid_argument(
                "Collection identifier cannot be empty",
            ));
        }
        let recipient = Address::new(&receiver)?;

        let data = format!(
            "ESDTNFTTransfer@{}@{}@{}@{}",
            hex::encode(collection.as_bytes()),
            magnitude_hex(U256::from(token_nonce)),
            magnitude_hex(quantity),
            recipient.to_hex()
        );

        TransactionBuilder::new(config)
            .sender(&sender)
            .receiver(&sender)
            .value(Egld::ZERO)
            .nonce(tx_nonce)
            .gas_limit(gas_limit)
            .data(data)
            .build()
    }
}
