//! Bech32 `erd1…` address codec.

use std::fmt::{self, Display};
use std::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseAddressError;

/// Human-readable part of every address.
pub const ADDRESS_HRP: &str = "erd";

/// Length of an encoded address: `erd` + `1` + 52 data symbols + 6 checksum symbols.
pub const ADDRESS_LEN: usize = 62;

const ADDRESS_PREFIX: &str = "erd1";

/// A validated, checksummed account address.
///
/// An address is the bech32 encoding of a 32-byte public key under the `erd`
/// human-readable part. The decoded payload is kept alongside the string, so
/// two addresses compare equal exactly when their payloads do.
///
/// # Examples
///
/// ```
/// use mvx_kit::Address;
///
/// let address: Address = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     address.to_hex(),
///     "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1"
/// );
///
/// assert!(!Address::is_valid("erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6tt"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    encoded: String,
    public_key: [u8; 32],
}

impl Address {
    /// Parse and validate an address string.
    pub fn new(s: impl AsRef<str>) -> Result<Self, ParseAddressError> {
        let s = s.as_ref();
        let public_key = Self::decode(s)?;
        Ok(Self {
            encoded: s.to_string(),
            public_key,
        })
    }

    /// Encode a 32-byte public key as an address.
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        let encoded = bech32::encode(ADDRESS_HRP, public_key.to_base32(), Variant::Bech32)
            .expect("'erd' is a valid human-readable part");
        Self {
            encoded,
            public_key: *public_key,
        }
    }

    /// Decode an address string to its 32-byte public key.
    pub fn decode(s: &str) -> Result<[u8; 32], ParseAddressError> {
        if s.len() != ADDRESS_LEN {
            return Err(ParseAddressError::InvalidLength(s.len()));
        }
        if !s.starts_with(ADDRESS_PREFIX) {
            return Err(ParseAddressError::InvalidPrefix(
                s.chars().take(ADDRESS_PREFIX.len()).collect(),
            ));
        }

        let (hrp, data, variant) =
            bech32::decode(s).map_err(|e| ParseAddressError::InvalidEncoding(e.to_string()))?;
        if hrp != ADDRESS_HRP {
            return Err(ParseAddressError::InvalidPrefix(hrp));
        }
        if variant != Variant::Bech32 {
            return Err(ParseAddressError::InvalidEncoding(
                "bech32m checksum is not accepted".to_string(),
            ));
        }

        // Strict 5-bit -> 8-bit regrouping: leftover padding bits must be zero.
        let bytes = Vec::<u8>::from_base32(&data)
            .map_err(|e| ParseAddressError::InvalidEncoding(e.to_string()))?;

        bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParseAddressError::InvalidPayloadLength(bytes.len()))
    }

    /// Check whether a string is a well-formed address.
    pub fn is_valid(s: &str) -> bool {
        Self::decode(s).is_ok()
    }

    /// Check whether a string has the outward shape of an address
    /// (62 characters, `erd1` prefix), without verifying the checksum.
    pub fn looks_like_address(s: &str) -> bool {
        s.len() == ADDRESS_LEN && s.starts_with(ADDRESS_PREFIX)
    }

    /// The 32-byte public key this address encodes.
    pub fn public_key_bytes(&self) -> &[u8; 32] {
        &self.public_key
    }

    /// The public key as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// Get as string slice.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = ParseAddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = ParseAddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<[u8; 32]> for Address {
    fn from(public_key: [u8; 32]) -> Self {
        Self::from_public_key(&public_key)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encoded)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
