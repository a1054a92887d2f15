//! Transaction types.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::{Address, CryptoHash, Egld, PublicKey, SecretKey, Signature};

/// An unsigned transaction.
///
/// Field declaration order is the canonical key order of the signing payload,
/// so it must not be changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sender's account nonce.
    pub nonce: u64,
    /// Native amount moved, serialized as an atomic decimal string.
    pub value: Egld,
    /// The account that receives the transaction.
    pub receiver: Address,
    /// The account that signs and pays for the transaction.
    pub sender: Address,
    /// Price per gas unit in atomic units.
    pub gas_price: u64,
    /// Maximum gas the transaction may consume.
    pub gas_limit: u64,
    /// Base64 of the raw call data; absent when there is no payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Chain id of the target network.
    #[serde(rename = "chainID")]
    pub chain_id: String,
    /// Transaction format version.
    pub version: u32,
}

impl Transaction {
    /// The raw call data, decoded from its base64 form.
    pub fn decoded_data(&self) -> Result<Option<String>, Error> {
        let Some(data) = &self.data else {
            return Ok(None);
        };
        let bytes = STANDARD
            .decode(data)
            .map_err(|e| Error::invalid_argument(format!("Invalid base64 data: {}", e)))?;
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| Error::invalid_argument(format!("Data is not UTF-8: {}", e)))
    }

    /// The canonical JSON that is hashed and signed.
    ///
    /// Compact, keys in declaration order, absent `data` omitted and `/` left
    /// unescaped.
    pub fn signing_payload(&self) -> String {
        serde_json::to_string(self).expect("transaction serialization should never fail")
    }

    /// Keccak-256 of the signing payload.
    pub fn digest(&self) -> CryptoHash {
        CryptoHash::keccak256(self.signing_payload().as_bytes())
    }

    /// Sign this transaction with a secret key.
    pub fn sign(self, secret_key: &SecretKey) -> Result<SignedTransaction, Error> {
        let signature = secret_key.sign_digest(&self.digest())?;
        tracing::debug!(
            sender = %self.sender,
            nonce = self.nonce,
            chain_id = %self.chain_id,
            "transaction signed"
        );
        Ok(SignedTransaction {
            transaction: self,
            signature,
        })
    }

    /// Sign this transaction with a 64-character hex private key.
    pub fn sign_with_hex(self, private_key_hex: &str) -> Result<SignedTransaction, Error> {
        let secret_key = SecretKey::from_hex(private_key_hex)?;
        self.sign(&secret_key)
    }
}

/// A signed transaction ready to be sent.
///
/// Serializes as the transaction's fields followed by `signature`, which is
/// the body posted to the `/transactions` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The unsigned transaction.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// The signature over the transaction's digest.
    pub signature: Signature,
}

impl SignedTransaction {
    /// The wire body as compact JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("signed transaction serialization should never fail")
    }

    /// Parse a wire body.
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check the signature against the sender's address.
    pub fn verify(&self) -> bool {
        let public_key = PublicKey::from(&self.transaction.sender);
        self.signature
            .verify(&self.transaction.digest(), &public_key)
    }
}
