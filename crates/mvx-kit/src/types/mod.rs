//! Core types for MultiversX-style ledgers.
//!
//! Addresses, keys, amounts and transactions are plain value types with no
//! I/O; the client module builds on them.

mod address;
mod api;
mod args;
mod hash;
mod key;
mod network;
mod transaction;
mod units;

pub use address::{ADDRESS_HRP, ADDRESS_LEN, Address};
pub use api::{
    AccountView, SendTransactionResponse, TokenBalance, TokenProperties, TransactionStatus,
};
pub use args::{Arg, build_call_data, encode_arg, encode_args};
pub(crate) use args::magnitude_hex;
pub use hash::CryptoHash;
pub use key::{KeyPair, PublicKey, SECRET_KEY_HEX_LEN, SIGNATURE_HEX_LEN, SecretKey, Signature};
pub use network::Network;
pub use transaction::{SignedTransaction, Transaction};
pub use units::{EGLD_DECIMALS, Egld, IntoEgld, IntoTokenAmount, parse_atomic, to_atomic};

/// Unsigned 256-bit integer used for token amounts and big integer arguments.
pub use alloy_primitives::U256;
