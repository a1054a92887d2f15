//! secp256k1 key material and ECDSA signatures.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey, VerifyingKey};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseKeyError, SignerError};

use super::{Address, CryptoHash};

/// Length of a hex-encoded private key.
pub const SECRET_KEY_HEX_LEN: usize = 64;

/// Length of a hex-encoded signature (`r‖s`).
pub const SIGNATURE_HEX_LEN: usize = 128;

/// Draws rejected as out-of-range scalars before generation gives up.
const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Decode exactly `N` bytes from a hex string of `2 * N` characters.
fn decode_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N], ParseKeyError> {
    if s.len() != N * 2 {
        return Err(ParseKeyError::InvalidLength {
            expected: N * 2,
            actual: s.len(),
        });
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out).map_err(|e| ParseKeyError::InvalidHex(e.to_string()))?;
    Ok(out)
}

// ============================================================================
// SecretKey
// ============================================================================

/// A secp256k1 private key.
#[derive(Clone)]
pub struct SecretKey {
    inner: SigningKey,
}

impl SecretKey {
    /// Generate a uniformly random private key from the OS entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source fails; use [`SecretKey::try_generate`]
    /// to handle that case.
    pub fn generate() -> Self {
        Self::try_generate().expect("OS entropy source failed")
    }

    /// Generate a private key from the OS entropy source, reporting failure.
    pub fn try_generate() -> Result<Self, SignerError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a private key from `rng`.
    ///
    /// 32 bytes are drawn at a time; a draw that is zero or not below the
    /// curve order is discarded. Fails with [`SignerError::KeyGeneration`]
    /// if the source errors or keeps yielding out-of-range scalars.
    pub fn generate_with(rng: &mut impl RngCore) -> Result<Self, SignerError> {
        let mut bytes = [0u8; 32];
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| SignerError::KeyGeneration(e.to_string()))?;
            if let Ok(key) = Self::from_bytes(&bytes) {
                return Ok(key);
            }
        }
        Err(SignerError::KeyGeneration(
            "entropy source produced no valid scalar".to_string(),
        ))
    }

    /// Parse a private key from exactly 64 hex characters.
    ///
    /// Fails if the input is not hex, has the wrong length, or is not a valid
    /// scalar (zero or not below the curve order).
    pub fn from_hex(s: &str) -> Result<Self, ParseKeyError> {
        let bytes = decode_fixed_hex::<32>(s)?;
        Self::from_bytes(&bytes)
    }

    /// Create from raw 32 big-endian bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, ParseKeyError> {
        let inner = SigningKey::from_slice(bytes).map_err(|_| ParseKeyError::InvalidScalar)?;
        Ok(Self { inner })
    }

    /// The private key as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.inner.to_bytes())
    }

    /// Derive the public key (X coordinate of the public point).
    pub fn public_key(&self) -> PublicKey {
        let point = self.inner.verifying_key().to_encoded_point(false);
        let mut x = [0u8; 32];
        // A non-identity point always has an affine X coordinate.
        if let Some(bytes) = point.x() {
            x.copy_from_slice(bytes);
        }
        PublicKey(x)
    }

    /// Sign a 32-byte digest.
    ///
    /// Uses deterministic (RFC 6979) ECDSA and returns the low-S form, so
    /// signing the same digest with the same key always yields the same bytes.
    pub fn sign_digest(&self, digest: &CryptoHash) -> Result<Signature, SignerError> {
        let signature: EcdsaSignature = self
            .inner
            .sign_prehash(digest.as_bytes())
            .map_err(|e| SignerError::SigningFailed(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);

        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&signature.to_bytes());
        Ok(Signature(bytes))
    }
}

impl FromStr for SecretKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

// ============================================================================
// PublicKey
// ============================================================================

/// The published half of a key pair: the 32-byte X coordinate of the public point.
///
/// The Y coordinate is discarded; this is the payload that addresses encode.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Create from raw 32 bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw 32 bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The address derived from this public key.
    pub fn to_address(&self) -> Address {
        Address::from_public_key(&self.0)
    }

    /// Both curve points sharing this X coordinate, in SEC1 compressed form.
    fn candidate_points(&self) -> impl Iterator<Item = VerifyingKey> + '_ {
        [0x02u8, 0x03].into_iter().filter_map(move |tag| {
            let mut sec1 = [0u8; 33];
            sec1[0] = tag;
            sec1[1..].copy_from_slice(&self.0);
            VerifyingKey::from_sec1_bytes(&sec1).ok()
        })
    }

    /// Check that these bytes are the X coordinate of some curve point.
    pub fn is_on_curve(&self) -> bool {
        self.candidate_points().next().is_some()
    }
}

impl FromStr for PublicKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self(decode_fixed_hex::<32>(s)?);
        if !key.is_on_curve() {
            return Err(ParseKeyError::InvalidCurvePoint);
        }
        Ok(key)
    }
}

impl From<&Address> for PublicKey {
    fn from(address: &Address) -> Self {
        Self(*address.public_key_bytes())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

// ============================================================================
// Signature
// ============================================================================

/// A 64-byte ECDSA signature: `r‖s`, big-endian, each half left-padded to 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Create from raw 64 bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw 64 bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// The `r` component.
    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    /// The `s` component.
    pub fn s(&self) -> &[u8] {
        &self.0[32..]
    }

    /// Lowercase hex encoding (128 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from exactly 128 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, ParseKeyError> {
        decode_fixed_hex::<64>(s).map(Self)
    }

    /// Verify this signature over `digest` against a published X-only key.
    ///
    /// Either Y parity is accepted, since the address does not commit to one.
    pub fn verify(&self, digest: &CryptoHash, public_key: &PublicKey) -> bool {
        let Ok(signature) = EcdsaSignature::from_slice(&self.0) else {
            return false;
        };
        public_key
            .candidate_points()
            .any(|key| key.verify_prehash(digest.as_bytes(), &signature).is_ok())
    }
}

impl FromStr for Signature {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// KeyPair
// ============================================================================

/// A private key together with its public key and address.
///
/// # Example
///
/// ```rust
/// use mvx_kit::KeyPair;
///
/// let keypair = KeyPair::generate();
/// assert_eq!(keypair.private_key_hex().len(), 64);
/// assert_eq!(keypair.public_key_hex().len(), 64);
/// assert!(keypair.address.as_str().starts_with("erd1"));
/// ```
#[derive(Clone)]
pub struct KeyPair {
    /// The secret (private) key.
    pub secret_key: SecretKey,
    /// The public key derived from the secret key.
    pub public_key: PublicKey,
    /// The address encoding the public key.
    pub address: Address,
}

impl KeyPair {
    /// Generate a random key pair.
    ///
    /// # Panics
    ///
    /// Panics if the OS entropy source fails; see [`KeyPair::try_generate`].
    pub fn generate() -> Self {
        Self::from_secret_key(SecretKey::generate())
    }

    /// Generate a random key pair, reporting entropy failures.
    pub fn try_generate() -> Result<Self, SignerError> {
        SecretKey::try_generate().map(Self::from_secret_key)
    }

    /// Create a key pair from an existing secret key.
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let public_key = secret_key.public_key();
        let address = public_key.to_address();
        Self {
            secret_key,
            public_key,
            address,
        }
    }

    /// Create a key pair from a 64-character hex private key.
    pub fn from_private_key_hex(s: &str) -> Result<Self, ParseKeyError> {
        SecretKey::from_hex(s).map(Self::from_secret_key)
    }

    /// The private key as 64 hex characters.
    pub fn private_key_hex(&self) -> String {
        self.secret_key.to_hex()
    }

    /// The public key as 64 hex characters.
    pub fn public_key_hex(&self) -> String {
        self.public_key.to_hex()
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("secret_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const GENERATOR_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    /// secp256k1 group order n.
    const CURVE_ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
    /// floor(n / 2).
    const HALF_ORDER: &str = "7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0";

    #[test]
    fn test_public_key_of_scalar_one_is_generator_x() {
        let keypair = KeyPair::from_private_key_hex(ONE).unwrap();
        assert_eq!(keypair.public_key_hex(), GENERATOR_X);
        assert_eq!(
            keypair.address.as_str(),
            "erd10xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqe757kg"
        );
        assert_eq!(keypair.private_key_hex(), ONE);
    }

    #[test]
    fn test_generate_produces_consistent_material() {
        let keypair = KeyPair::generate();
        assert_eq!(keypair.private_key_hex().len(), SECRET_KEY_HEX_LEN);
        assert_eq!(
            Address::decode(keypair.address.as_str()).unwrap(),
            *keypair.public_key.as_bytes()
        );

        let reloaded = KeyPair::from_private_key_hex(&keypair.private_key_hex()).unwrap();
        assert_eq!(reloaded.address, keypair.address);
    }

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy exhausted"))
        }
    }

    /// Yields all-zero draws, which are never a valid scalar.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    #[test]
    fn test_try_generate_succeeds_with_os_entropy() {
        let keypair = KeyPair::try_generate().unwrap();
        assert_eq!(keypair.public_key, keypair.secret_key.public_key());
    }

    #[test]
    fn test_generation_reports_entropy_failure() {
        match SecretKey::generate_with(&mut FailingRng) {
            Err(SignerError::KeyGeneration(msg)) => assert!(msg.contains("entropy exhausted")),
            other => panic!("expected KeyGeneration, got {:?}", other.map(|_| ())),
        }
        assert!(matches!(
            SecretKey::generate_with(&mut ZeroRng),
            Err(SignerError::KeyGeneration(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_bad_keys() {
        assert!(matches!(
            SecretKey::from_hex("abcd"),
            Err(ParseKeyError::InvalidLength {
                expected: 64,
                actual: 4
            })
        ));
        assert!(matches!(
            SecretKey::from_hex(&"g".repeat(64)),
            Err(ParseKeyError::InvalidHex(_))
        ));
        assert!(matches!(
            SecretKey::from_hex(&"0".repeat(64)),
            Err(ParseKeyError::InvalidScalar)
        ));
        assert!(matches!(
            SecretKey::from_hex(CURVE_ORDER),
            Err(ParseKeyError::InvalidScalar)
        ));
    }

    #[test]
    fn test_sign_digest_is_deterministic_and_verifies() {
        let keypair = KeyPair::generate();
        let digest = CryptoHash::keccak256(b"payload");

        let first = keypair.secret_key.sign_digest(&digest).unwrap();
        let second = keypair.secret_key.sign_digest(&digest).unwrap();
        assert_eq!(first, second);

        assert!(first.verify(&digest, &keypair.public_key));
        assert!(!first.verify(&CryptoHash::keccak256(b"other"), &keypair.public_key));
        assert!(!first.verify(&digest, &KeyPair::generate().public_key));
    }

    #[test]
    fn test_signatures_are_low_s() {
        let mut half = [0u8; 32];
        hex::decode_to_slice(HALF_ORDER, &mut half).unwrap();

        let secret = SecretKey::from_hex(ONE).unwrap();
        for i in 0u32..32 {
            let digest = CryptoHash::keccak256(&i.to_be_bytes());
            let signature = secret.sign_digest(&digest).unwrap();
            // Equal-length big-endian byte strings compare numerically.
            assert!(signature.s() <= &half[..], "high S for digest {}", i);
        }
    }

    #[test]
    fn test_signature_hex_format() {
        let secret = SecretKey::generate();
        let signature = secret.sign_digest(&CryptoHash::keccak256(b"x")).unwrap();
        let hex_sig = signature.to_hex();
        assert_eq!(hex_sig.len(), SIGNATURE_HEX_LEN);
        assert!(hex_sig.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(Signature::from_hex(&hex_sig).unwrap(), signature);
    }

    #[test]
    fn test_public_key_from_str_validates_curve() {
        let key: PublicKey = GENERATOR_X.parse().unwrap();
        assert!(key.is_on_curve());
        // x = 5 has no matching y on secp256k1 (5^3 + 7 = 132 is a non-residue).
        let off_curve = format!("{:0>64}", "5");
        assert!(matches!(
            off_curve.parse::<PublicKey>(),
            Err(ParseKeyError::InvalidCurvePoint)
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let keypair = KeyPair::from_private_key_hex(ONE).unwrap();
        let debug = format!("{:?}", keypair);
        assert!(!debug.contains(ONE));
        assert!(debug.contains("***"));
        assert_eq!(format!("{:?}", keypair.secret_key), "SecretKey(***)");
    }
}
