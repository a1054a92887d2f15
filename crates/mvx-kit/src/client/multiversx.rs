//! The main client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::contract::ContractCall;
use crate::error::{Error, TransportError};
use crate::tokens::{EsdtTransfer, NftTransfer};
use crate::types::{
    AccountView, Address, Network, SendTransactionResponse, SignedTransaction, TokenBalance,
    TokenProperties, TransactionStatus,
};

use super::config::Config;
use super::transaction::TransactionBuilder;
use super::transport::{HttpTransport, Transport};

/// Client for a MultiversX-style REST API.
///
/// Holds a [`Config`] snapshot and a shared [`Transport`]. Cloning is cheap.
///
/// # Example
///
/// ```rust,no_run
/// use mvx_kit::*;
///
/// # async fn example() -> Result<(), Error> {
/// let client = Multiversx::new(Config::devnet());
/// let keypair = KeyPair::from_private_key_hex(
///     "1111111111111111111111111111111111111111111111111111111111111111",
/// )?;
///
/// let account = client.account(&keypair.address).await?;
///
/// let signed = client
///     .transaction()
///     .sender(&keypair.address)
///     .receiver("erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx")
///     .value("0.1 EGLD")
///     .nonce(account.nonce)
///     .gas_limit(50_000)
///     .build()?
///     .sign(&keypair.secret_key)?;
///
/// let sent = client.send_transaction(&signed).await?;
/// println!("submitted {}", sent.tx_hash);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Multiversx {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Multiversx {
    /// Create a client that talks HTTP to `config.api_url`.
    pub fn new(config: Config) -> Self {
        let transport = Arc::new(HttpTransport::new(config.api_url.clone()));
        Self { config, transport }
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Create a client configured from environment variables.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    /// The configuration snapshot.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The configured network.
    pub fn network(&self) -> Network {
        self.config.network
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Start a plain transaction against this client's configuration.
    pub fn transaction(&self) -> TransactionBuilder<'_> {
        TransactionBuilder::new(&self.config)
    }

    /// Start a smart contract call. Finish with
    /// [`ContractCall::prepare`] passing [`config`](Self::config).
    pub fn contract_call(&self) -> ContractCall {
        ContractCall::new()
    }

    /// Start a fungible token transfer.
    pub fn esdt_transfer(&self) -> EsdtTransfer {
        EsdtTransfer::new()
    }

    /// Start an NFT/SFT transfer.
    pub fn nft_transfer(&self) -> NftTransfer {
        NftTransfer::new()
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Submit a signed transaction.
    ///
    /// The body posted is exactly [`SignedTransaction::to_json`].
    pub async fn send_transaction(
        &self,
        signed: &SignedTransaction,
    ) -> Result<SendTransactionResponse, Error> {
        tracing::debug!(
            sender = %signed.transaction.sender,
            nonce = signed.transaction.nonce,
            "sending transaction"
        );
        let response = self.transport.post("/transactions", signed.to_json()).await?;
        decode(response)
    }

    /// Fetch a transaction's details and processing status.
    pub async fn transaction_status(&self, tx_hash: &str) -> Result<TransactionStatus, Error> {
        if tx_hash.len() != 64 || !tx_hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_argument(format!(
                "Invalid transaction hash: {}",
                tx_hash
            )));
        }
        self.get(&format!("/transactions/{}", tx_hash), &[]).await
    }

    // ========================================================================
    // Accounts and tokens
    // ========================================================================

    /// Fetch an account's balance and nonce.
    pub async fn account(&self, address: impl AsRef<str>) -> Result<AccountView, Error> {
        let address = Address::new(address)?;
        self.get(&format!("/accounts/{}", address), &[]).await
    }

    /// Fetch a token's properties.
    pub async fn token_properties(&self, identifier: &str) -> Result<TokenProperties, Error> {
        require_identifier(identifier)?;
        self.get(&format!("/tokens/{}", identifier), &[]).await
    }

    /// Fetch an account's balance of one token.
    pub async fn token_balance(
        &self,
        address: impl AsRef<str>,
        identifier: &str,
    ) -> Result<TokenBalance, Error> {
        require_identifier(identifier)?;
        let address = Address::new(address)?;
        self.get(&format!("/accounts/{}/tokens/{}", address, identifier), &[])
            .await
    }

    /// List the tokens an account holds, optionally paginated.
    pub async fn account_tokens(
        &self,
        address: impl AsRef<str>,
        from: Option<u32>,
        size: Option<u32>,
    ) -> Result<Vec<TokenBalance>, Error> {
        let address = Address::new(address)?;

        let mut query = Vec::new();
        if let Some(from) = from {
            query.push(("from".to_string(), from.to_string()));
        }
        if let Some(size) = size {
            query.push(("size".to_string(), size.to_string()));
        }

        self.get(&format!("/accounts/{}/tokens", address), &query)
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, Error> {
        tracing::debug!(path, "GET");
        let response = self.transport.get(path, query).await?;
        decode(response)
    }
}

impl std::fmt::Debug for Multiversx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multiversx")
            .field("config", &self.config)
            .finish()
    }
}

fn require_identifier(identifier: &str) -> Result<(), Error> {
    if identifier.trim().is_empty() {
        return Err(Error::invalid_argument("Token identifier cannot be empty"));
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| {
        TransportError::InvalidResponse(format!("Unexpected response shape: {}", e)).into()
    })
}
