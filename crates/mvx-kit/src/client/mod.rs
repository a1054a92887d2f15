//! Client module for interacting with a MultiversX-style REST API.
//!
//! - [`Config`] - Immutable network/API/gas configuration snapshot
//! - [`TransactionBuilder`] - Builds unsigned transactions against a `Config`
//! - [`Transport`] / [`HttpTransport`] - The HTTP seam
//! - [`Multiversx`] - The client: submits transactions and reads chain state
//!
//! Building and signing never touch the network; only the `Multiversx`
//! methods that return futures do.

mod config;
mod multiversx;
mod transaction;
mod transport;

pub use config::{Config, DEFAULT_GAS_PRICE, DEFAULT_TX_VERSION};
pub use multiversx::Multiversx;
pub use transaction::TransactionBuilder;
pub use transport::{HttpTransport, Transport};
