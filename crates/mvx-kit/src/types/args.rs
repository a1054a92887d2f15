//! Smart contract call arguments and call-data assembly.
//!
//! Call data is an `@`-delimited string: a function name followed by one
//! hex token per argument.
//!
//! ```
//! use mvx_kit::{Arg, build_call_data, encode_args};
//!
//! let args = encode_args(&[Arg::from(255u64), Arg::from("hello"), Arg::from(true)]).unwrap();
//! assert_eq!(args, ["ff", "68656c6c6f", "01"]);
//!
//! let data = build_call_data("myFunction", &args).unwrap();
//! assert_eq!(data, "myFunction@ff@68656c6c6f@01");
//! ```

use alloy_primitives::U256;
use serde_json::Value;

use crate::error::Error;

use super::Address;

/// Hex token used for any zero magnitude.
pub(crate) const ZERO_HEX: &str = "00";

/// A typed smart contract argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    /// Unsigned integer of up to 256 bits, encoded as minimal hex.
    BigUint(U256),
    /// Signed integer; must be non-negative to be encoded.
    Int(i64),
    /// Text. Strings shaped like an address are encoded as the address's
    /// 32-byte public key, everything else as its UTF-8 bytes.
    Text(String),
    /// Boolean, encoded as `01` or `00`.
    Bool(bool),
    /// An account address, encoded as its 32-byte public key.
    Address(Address),
}

impl Arg {
    /// Encode this argument as a hex token.
    pub fn encode(&self) -> Result<String, Error> {
        encode_arg(self)
    }

    /// Name of the argument's kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::BigUint(_) => "biguint",
            Arg::Int(_) => "int",
            Arg::Text(_) => "string",
            Arg::Bool(_) => "bool",
            Arg::Address(_) => "address",
        }
    }
}

/// Minimal lowercase hex of an unsigned magnitude; zero renders as `"00"`.
pub(crate) fn magnitude_hex(value: U256) -> String {
    if value.is_zero() {
        ZERO_HEX.to_string()
    } else {
        format!("{:x}", value)
    }
}

/// Encode a single argument as a hex token.
pub fn encode_arg(arg: &Arg) -> Result<String, Error> {
    match arg {
        Arg::BigUint(value) => Ok(magnitude_hex(*value)),
        Arg::Int(value) => {
            if *value < 0 {
                return Err(Error::invalid_argument(format!(
                    "Negative integers are not supported: {}",
                    value
                )));
            }
            Ok(magnitude_hex(U256::from(*value as u64)))
        }
        Arg::Text(text) => {
            if Address::looks_like_address(text) {
                let public_key = Address::decode(text).map_err(|e| {
                    Error::invalid_argument(format!("Invalid address argument '{}': {}", text, e))
                })?;
                Ok(hex::encode(public_key))
            } else {
                Ok(hex::encode(text.as_bytes()))
            }
        }
        Arg::Bool(true) => Ok("01".to_string()),
        Arg::Bool(false) => Ok(ZERO_HEX.to_string()),
        Arg::Address(address) => Ok(address.to_hex()),
    }
}

/// Encode an ordered sequence of arguments, preserving order.
pub fn encode_args(args: &[Arg]) -> Result<Vec<String>, Error> {
    args.iter().map(encode_arg).collect()
}

/// Join a function name and encoded arguments into a call-data string.
///
/// Every argument must be a non-empty string of hex digits.
pub fn build_call_data(
    function: &str,
    encoded_args: &[impl AsRef<str>],
) -> Result<String, Error> {
    if function.is_empty() {
        return Err(Error::invalid_argument("Function name cannot be empty"));
    }

    let mut data = function.to_string();
    for arg in encoded_args {
        let arg = arg.as_ref();
        if arg.is_empty() {
            return Err(Error::invalid_argument("Argument encodes to an empty hex string"));
        }
        if !arg.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_argument(format!(
                "Argument is not a valid hex string: {}",
                arg
            )));
        }
        data.push('@');
        data.push_str(arg);
    }
    Ok(data)
}

// ============================================================================
// Conversions
// ============================================================================

impl From<U256> for Arg {
    fn from(value: U256) -> Self {
        Arg::BigUint(value)
    }
}

impl From<u128> for Arg {
    fn from(value: u128) -> Self {
        Arg::BigUint(U256::from(value))
    }
}

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        Arg::BigUint(U256::from(value))
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::BigUint(U256::from(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value as i64)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<Address> for Arg {
    fn from(value: Address) -> Self {
        Arg::Address(value)
    }
}

impl From<&Address> for Arg {
    fn from(value: &Address) -> Self {
        Arg::Address(value.clone())
    }
}

/// Map a dynamically typed JSON value onto an argument.
///
/// `null`, floating point numbers, arrays and objects have no call-data
/// encoding and fail with [`Error::UnsupportedArgumentType`].
impl TryFrom<Value> for Arg {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Arg::Bool(b)),
            Value::String(s) => Ok(Arg::Text(s)),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Arg::BigUint(U256::from(u)))
                } else if let Some(i) = n.as_i64() {
                    Ok(Arg::Int(i))
                } else {
                    Err(Error::UnsupportedArgumentType("float".to_string()))
                }
            }
            Value::Null => Err(Error::UnsupportedArgumentType("null".to_string())),
            Value::Array(_) => Err(Error::UnsupportedArgumentType("array".to_string())),
            Value::Object(_) => Err(Error::UnsupportedArgumentType("object".to_string())),
        }
    }
}
