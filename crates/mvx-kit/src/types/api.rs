//! Typed views of REST API responses.
//!
//! Only the fields the toolkit relies on are typed; everything else the API
//! returns is kept in each view's `extra` map.

use alloy_primitives::U256;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Address, Egld};

// ============================================================================
// Accounts
// ============================================================================

/// Account state from `GET /accounts/{address}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    /// The account address.
    pub address: Address,
    /// Native balance.
    pub balance: Egld,
    /// Nonce to use for the account's next transaction.
    pub nonce: u64,
    /// Shard the account lives in.
    #[serde(default)]
    pub shard: Option<u32>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Transactions
// ============================================================================

/// Response of `POST /transactions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionResponse {
    /// Hash assigned to the submitted transaction.
    pub tx_hash: String,
    /// Receiver echoed back by the API.
    #[serde(default)]
    pub receiver: Option<String>,
    /// Initial processing status, usually `pending`.
    #[serde(default)]
    pub status: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Transaction state from `GET /transactions/{hash}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
    /// The transaction hash.
    pub tx_hash: String,
    /// Processing status: `pending`, `success`, `fail` or `invalid`.
    pub status: String,
    /// Sender nonce.
    #[serde(default)]
    pub nonce: Option<u64>,
    /// Sender address.
    #[serde(default)]
    pub sender: Option<String>,
    /// Receiver address.
    #[serde(default)]
    pub receiver: Option<String>,
    /// Native value moved.
    #[serde(default)]
    pub value: Option<Egld>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionStatus {
    /// Whether the transaction executed successfully.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Whether the transaction has not been finalized yet.
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }

    /// Whether the transaction failed or was rejected.
    pub fn is_failure(&self) -> bool {
        matches!(self.status.as_str(), "fail" | "invalid")
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// Token metadata from `GET /tokens/{identifier}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProperties {
    /// Token identifier, e.g. `WEGLD-bd4d79`.
    pub identifier: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Issuer or current owner.
    #[serde(default)]
    pub owner: Option<String>,
    /// Number of decimals.
    #[serde(default)]
    pub decimals: Option<u8>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A token held by an account, from `GET /accounts/{address}/tokens[/{identifier}]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    /// Token identifier.
    pub identifier: String,
    /// Balance in atomic units, as a decimal string.
    pub balance: String,
    /// Number of decimals.
    #[serde(default)]
    pub decimals: Option<u8>,
    /// Token-level nonce; zero for fungible tokens.
    #[serde(default)]
    pub nonce: Option<u64>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenBalance {
    /// The balance as an integer number of atomic units.
    pub fn balance_atomic(&self) -> Option<U256> {
        super::parse_atomic(&self.balance).ok()
    }
}
