//! Error types for mvx-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) - Main error type, returned by most operations
//!   - [`ParseAddressError`] - Malformed or mis-checksummed `erd1…` address
//!   - [`ParseKeyError`] - Invalid private key / signature encoding
//!   - [`ParseAmountError`] - Invalid decimal amount
//! - [`ParseHashError`] - Malformed hex digest, returned by `CryptoHash::from_str`
//!   - [`SignerError`] - Key generation and signing failures
//!   - [`TransportError`] - Failures reported by the HTTP API
//!
//! # Example
//!
//! ```
//! use mvx_kit::{Address, Error, ParseAddressError};
//!
//! let err = "erd1tooshort".parse::<Address>().unwrap_err();
//! assert!(matches!(err, ParseAddressError::InvalidLength(12)));
//!
//! let err: Error = err.into();
//! assert!(matches!(err, Error::InvalidAddress(_)));
//! ```

use thiserror::Error;

/// Error parsing an `erd1…` address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("Invalid address length: expected 62 characters, got {0}")]
    InvalidLength(usize),

    #[error("Address '{0}' does not start with 'erd1'")]
    InvalidPrefix(String),

    #[error("Invalid bech32 encoding: {0}")]
    InvalidEncoding(String),

    #[error("Decoded address does not represent a 32-byte public key (got {0} bytes)")]
    InvalidPayloadLength(usize),
}

/// Error parsing a private key or signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid length: expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Private key is not a valid secp256k1 scalar")]
    InvalidScalar,

    #[error("Invalid curve point: key bytes do not represent a valid point on the curve")]
    InvalidCurvePoint,
}

/// Error parsing a hex-encoded hash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseHashError {
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("Invalid hash length: expected 64 hex characters, got {0}")]
    InvalidLength(usize),
}

/// Error parsing an amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("Invalid amount format: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid number in amount: '{0}'")]
    InvalidNumber(String),

    #[error("Amount cannot be negative: '{0}'")]
    Negative(String),

    #[error("Amount overflow: value too large")]
    Overflow,
}

/// Error during key generation or signing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
}

/// Error returned by a [`Transport`](crate::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("API request to {path} failed with status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// Create a status error from a non-2xx response.
    pub fn status(path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        TransportError::Status {
            path: path.into(),
            status,
            body: body.into(),
        }
    }

    /// HTTP status code, if the API answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for mvx-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Input validation ───
    #[error("Missing transaction parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported argument type encountered: {0}")]
    UnsupportedArgumentType(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] ParseAddressError),

    #[error("Invalid network '{0}': expected mainnet, testnet or devnet")]
    InvalidNetwork(String),

    #[error("Invalid key: {0}")]
    InvalidKey(#[from] ParseKeyError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    // ─── Signing ───
    #[error("Transaction signing failed: {0}")]
    SigningFailure(#[from] SignerError),

    // ─── Transport ───
    #[error(transparent)]
    Transport(#[from] TransportError),

    // ─── Configuration ───
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ─── Serialization ───
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
