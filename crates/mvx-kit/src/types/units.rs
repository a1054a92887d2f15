//! Native token amounts and decimal → atomic unit conversion.

use std::fmt::{self, Display};
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseAmountError;

/// Number of decimals of the native token.
pub const EGLD_DECIMALS: u8 = 18;

/// Atomic units per whole EGLD (10^18).
const ATOMIC_PER_EGLD: u128 = 1_000_000_000_000_000_000;

/// Scale a human-readable decimal amount by `10^decimals` into atomic units.
///
/// Fractional digits beyond `decimals` are truncated, never rounded.
/// Amounts up to 2^256 - 1 atomic units are representable.
///
/// # Example
///
/// ```
/// use mvx_kit::{U256, to_atomic};
///
/// assert_eq!(to_atomic("123.456", 6).unwrap(), U256::from(123_456_000u64));
/// assert_eq!(to_atomic("1.2345", 2).unwrap(), U256::from(123u64));
/// assert!(to_atomic("-1", 6).is_err());
/// ```
pub fn to_atomic(amount: &str, decimals: u8) -> Result<U256, ParseAmountError> {
    let s = amount.trim();

    if s.is_empty() {
        return Err(ParseAmountError::InvalidFormat(s.to_string()));
    }
    if s.starts_with('-') {
        return Err(ParseAmountError::Negative(s.to_string()));
    }

    let (whole_str, frac_str) = match s.split_once('.') {
        Some((_, frac)) if frac.contains('.') => {
            return Err(ParseAmountError::InvalidFormat(format!(
                "Multiple decimal points in: {}",
                s
            )));
        }
        Some((whole, frac)) => (whole, frac),
        None => (s, ""),
    };

    if whole_str.is_empty() && frac_str.is_empty() {
        return Err(ParseAmountError::InvalidFormat(s.to_string()));
    }
    if !all_digits(whole_str) || !all_digits(frac_str) {
        return Err(ParseAmountError::InvalidNumber(s.to_string()));
    }

    let scale = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or(ParseAmountError::Overflow)?;

    let whole = parse_digits(whole_str)?;
    let kept = &frac_str[..frac_str.len().min(decimals as usize)];
    let frac = parse_digits(&format!("{:0<width$}", kept, width = decimals as usize))?;

    whole
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac))
        .ok_or(ParseAmountError::Overflow)
}

/// Parse a plain string of decimal digits as an atomic amount.
///
/// Unlike [`to_atomic`] no decimal point is accepted.
pub fn parse_atomic(amount: &str) -> Result<U256, ParseAmountError> {
    let s = amount.trim();
    if s.starts_with('-') {
        return Err(ParseAmountError::Negative(s.to_string()));
    }
    if s.is_empty() || !all_digits(s) {
        return Err(ParseAmountError::InvalidFormat(s.to_string()));
    }
    parse_digits(s)
}

fn all_digits(part: &str) -> bool {
    part.chars().all(|c| c.is_ascii_digit())
}

// Callers have already checked `digits` is ASCII digits only.
fn parse_digits(digits: &str) -> Result<U256, ParseAmountError> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| ParseAmountError::Overflow)
}

/// A native token amount in atomic units (10^-18 EGLD).
///
/// # Creating Amounts
///
/// ```
/// use mvx_kit::Egld;
///
/// let one = Egld::from_egld(1);
/// let half: Egld = "0.5 EGLD".parse().unwrap();
/// let raw: Egld = "500000000000000000".parse().unwrap();
/// assert_eq!(half, raw);
/// assert_eq!(one.as_atomic(), 1_000_000_000_000_000_000);
/// ```
///
/// Bare digit strings are read as atomic units, which is how the ledger API
/// writes amounts; use the `EGLD` suffix or [`Egld::from_decimal`] for
/// human-readable amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Egld(u128);

impl Egld {
    /// Zero EGLD.
    pub const ZERO: Self = Self(0);
    /// One EGLD.
    pub const ONE_EGLD: Self = Self(ATOMIC_PER_EGLD);

    /// Create from atomic units.
    pub const fn from_atomic(atomic: u128) -> Self {
        Self(atomic)
    }

    /// Create from whole EGLD.
    pub const fn from_egld(egld: u128) -> Self {
        Self(egld * ATOMIC_PER_EGLD)
    }

    /// Parse a decimal EGLD amount such as `"1.5"`.
    pub fn from_decimal(s: &str) -> Result<Self, ParseAmountError> {
        let atomic = to_atomic(s, EGLD_DECIMALS)?;
        u128::try_from(atomic)
            .map(Self)
            .map_err(|_| ParseAmountError::Overflow)
    }

    /// Get the raw atomic value.
    pub const fn as_atomic(&self) -> u128 {
        self.0
    }

    /// The atomic value as a decimal string, as carried in a transaction's `value`.
    pub fn to_atomic_string(&self) -> String {
        self.0.to_string()
    }

    /// Checked addition.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Check if zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Egld {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // "X EGLD" or "X egld"
        if let Some(value) = s.strip_suffix(" EGLD").or_else(|| s.strip_suffix(" egld")) {
            return Self::from_decimal(value);
        }

        if s.starts_with('-') {
            return Err(ParseAmountError::Negative(s.to_string()));
        }
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseAmountError::InvalidFormat(s.to_string()));
        }
        s.parse().map(Self).map_err(|_| ParseAmountError::Overflow)
    }
}

impl TryFrom<&str> for Egld {
    type Error = ParseAmountError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<u128> for Egld {
    fn from(atomic: u128) -> Self {
        Self(atomic)
    }
}

impl Display for Egld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / ATOMIC_PER_EGLD;
        let remainder = self.0 % ATOMIC_PER_EGLD;

        if remainder == 0 {
            write!(f, "{} EGLD", whole)
        } else {
            let decimal = format!("{:018}", remainder);
            write!(f, "{}.{} EGLD", whole, decimal.trim_end_matches('0'))
        }
    }
}

// Serialized as the atomic decimal string, matching the API's `value` fields.
impl Serialize for Egld {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Egld {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(d)?;
        Ok(Self(s.parse().map_err(serde::de::Error::custom)?))
    }
}

// ============================================================================
// IntoEgld trait
// ============================================================================

/// Trait for types that can be converted into an [`Egld`] amount.
///
/// # Example
///
/// ```
/// use mvx_kit::{Egld, IntoEgld};
///
/// fn example(amount: impl IntoEgld) -> Egld {
///     amount.into_egld().unwrap()
/// }
///
/// assert_eq!(example(Egld::from_egld(2)), example("2 EGLD"));
/// assert_eq!(example(10u128), example("10"));
/// ```
pub trait IntoEgld {
    /// Convert into an Egld amount.
    fn into_egld(self) -> Result<Egld, ParseAmountError>;
}

impl IntoEgld for Egld {
    fn into_egld(self) -> Result<Egld, ParseAmountError> {
        Ok(self)
    }
}

impl IntoEgld for u128 {
    fn into_egld(self) -> Result<Egld, ParseAmountError> {
        Ok(Egld(self))
    }
}

impl IntoEgld for &str {
    fn into_egld(self) -> Result<Egld, ParseAmountError> {
        self.parse()
    }
}

impl IntoEgld for String {
    fn into_egld(self) -> Result<Egld, ParseAmountError> {
        self.parse()
    }
}

impl IntoEgld for &String {
    fn into_egld(self) -> Result<Egld, ParseAmountError> {
        self.parse()
    }
}

// ============================================================================
// IntoTokenAmount trait
// ============================================================================

/// Trait for values usable as a token amount or quantity in atomic units.
///
/// Strings must be plain decimal digits; use
/// [`EsdtTransfer::decimal_amount`](crate::EsdtTransfer::decimal_amount) to
/// scale a human-readable amount.
///
/// # Example
///
/// ```
/// use mvx_kit::{IntoTokenAmount, U256};
///
/// assert_eq!(42u64.into_token_amount().unwrap(), U256::from(42u64));
/// assert_eq!(
///     "340282366920938463463374607431768211456".into_token_amount().unwrap(),
///     U256::from(u128::MAX) + U256::from(1u64)
/// );
/// assert!("1.5".into_token_amount().is_err());
/// ```
pub trait IntoTokenAmount {
    /// Convert into an atomic amount.
    fn into_token_amount(self) -> Result<U256, ParseAmountError>;
}

impl IntoTokenAmount for U256 {
    fn into_token_amount(self) -> Result<U256, ParseAmountError> {
        Ok(self)
    }
}

macro_rules! impl_into_token_amount {
    ($($t:ty),*) => {
        $(
            impl IntoTokenAmount for $t {
                fn into_token_amount(self) -> Result<U256, ParseAmountError> {
                    Ok(U256::from(self))
                }
            }
        )*
    };
}

impl_into_token_amount!(u8, u16, u32, u64, u128);

impl IntoTokenAmount for &str {
    fn into_token_amount(self) -> Result<U256, ParseAmountError> {
        parse_atomic(self)
    }
}

impl IntoTokenAmount for String {
    fn into_token_amount(self) -> Result<U256, ParseAmountError> {
        parse_atomic(&self)
    }
}
