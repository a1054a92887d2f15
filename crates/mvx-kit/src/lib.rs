//! Key derivation, transaction encoding and signing for MultiversX-style ledgers.
//!
//! **mvx-kit** derives secp256k1 key pairs and `erd1…` addresses, builds and
//! canonically serializes transactions, signs their Keccak-256 digest, and
//! submits them to the REST API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mvx_kit::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mvx_kit::Error> {
//!     let client = Multiversx::new(Config::devnet());
//!     let keypair = KeyPair::generate();
//!
//!     let signed = client
//!         .transaction()
//!         .sender(&keypair.address)
//!         .receiver("erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx")
//!         .value("0.5 EGLD")
//!         .nonce(0)
//!         .gas_limit(50_000)
//!         .build()?
//!         .sign(&keypair.secret_key)?;
//!
//!     let response = client.send_transaction(&signed).await?;
//!     println!("tx hash: {}", response.tx_hash);
//!     Ok(())
//! }
//! ```
//!
//! # Design Principles
//!
//! 1. **Pure core**: Address codec, signer, argument encoder and builders do no I/O
//! 2. **Explicit configuration**: Every builder reads a [`Config`] snapshot it is handed
//! 3. **Type-safe but ergonomic**: Accept `"1.5 EGLD"` strings and address strings,
//!    validate once
//!
//! # Core Types
//!
//! - [`Address`] - Checksummed bech32 `erd1…` address
//! - [`KeyPair`], [`SecretKey`], [`PublicKey`], [`Signature`] - secp256k1 key material
//! - [`Egld`] - Native amount in atomic units
//! - [`Arg`] - Typed smart contract argument
//! - [`Transaction`], [`SignedTransaction`] - The canonical transaction record
//!
//! # Transfers
//!
//! - [`TransactionBuilder`] - Plain transfers and arbitrary data
//! - [`ContractCall`] - Smart contract calls
//! - [`EsdtTransfer`] - Fungible token transfers
//! - [`NftTransfer`] - NFT/SFT transfers

pub mod client;
pub mod contract;
pub mod error;
pub mod tokens;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{
    Error, ParseAddressError, ParseAmountError, ParseHashError, ParseKeyError, SignerError,
    TransportError,
};
pub use types::*;

pub use client::{
    Config, DEFAULT_GAS_PRICE, DEFAULT_TX_VERSION, HttpTransport, Multiversx, TransactionBuilder,
    Transport,
};
pub use contract::ContractCall;
pub use tokens::{EsdtTransfer, NftTransfer};
