//! Smart contract calls.
//!
//! A contract call is a transaction addressed to the contract whose `data`
//! is the function name followed by hex-encoded arguments.
//!
//! # Example
//!
//! ```
//! use mvx_kit::{Arg, Config, ContractCall};
//!
//! let tx = ContractCall::new()
//!     .sender("erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th")
//!     .contract("erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx")
//!     .function("add")
//!     .args([Arg::from(255u64), Arg::from(true)])
//!     .value(0u128)
//!     .nonce(3)
//!     .gas_limit(5_000_000)
//!     .prepare(&Config::devnet())
//!     .unwrap();
//!
//! assert_eq!(tx.decoded_data().unwrap().as_deref(), Some("add@ff@01"));
//! ```

use crate::client::{Config, TransactionBuilder};
use crate::error::{Error, ParseAmountError};
use crate::types::{Address, Arg, Egld, IntoEgld, Transaction, build_call_data, encode_args};

/// Builder for a smart contract call.
#[derive(Default)]
pub struct ContractCall {
    sender: Option<String>,
    contract: Option<String>,
    function: Option<String>,
    args: Option<Vec<Arg>>,
    value: Option<Result<Egld, ParseAmountError>>,
    nonce: Option<u64>,
    gas_limit: Option<u64>,
}

impl ContractCall {
    /// Start an empty contract call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the calling address.
    pub fn sender(mut self, address: impl AsRef<str>) -> Self {
        self.sender = Some(address.as_ref().to_string());
        self
    }

    /// Set the contract address; it becomes the transaction's receiver.
    pub fn contract(mut self, address: impl AsRef<str>) -> Self {
        self.contract = Some(address.as_ref().to_string());
        self
    }

    /// Set the function to call.
    pub fn function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    /// Set the full argument list, replacing any previous arguments.
    pub fn args<A: Into<Arg>>(mut self, args: impl IntoIterator<Item = A>) -> Self {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.get_or_insert_with(Vec::new).push(arg.into());
        self
    }

    /// Set the native amount sent to the contract.
    pub fn value(mut self, amount: impl IntoEgld) -> Self {
        self.value = Some(amount.into_egld());
        self
    }

    /// Set the sender's account nonce.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Set the gas limit.
    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Validate, encode the call data and build the unsigned transaction.
    ///
    /// Required parameters, in check order: `sender`, `contractAddress`,
    /// `functionName`, `arguments`, `value`, `nonce`, `gasLimit`. An empty
    /// argument list must still be given explicitly with `args`.
    pub fn prepare(self, config: &Config) -> Result<Transaction, Error> {
        let sender = self.sender.ok_or(Error::MissingParameter("sender"))?;
        let contract = self.contract.ok_or(Error::MissingParameter("contractAddress"))?;
        let function = self.function.ok_or(Error::MissingParameter("functionName"))?;
        let args = self.args.ok_or(Error::MissingParameter("arguments"))?;
        let value = self.value.ok_or(Error::MissingParameter("value"))??;
        let nonce = self.nonce.ok_or(Error::MissingParameter("nonce"))?;
        let gas_limit = self.gas_limit.ok_or(Error::MissingParameter("gasLimit"))?;

        let contract = Address::new(&contract)?;
        if function.is_empty() {
            return Err(Error::invalid_argument("Function name cannot be empty"));
        }

        let data = build_call_data(&function, &encode_args(&args)?)?;

        TransactionBuilder::new(config)
            .sender(sender)
            .receiver(contract)
            .value(value)
            .nonce(nonce)
            .gas_limit(gas_limit)
            .data(data)
            .build()
    }
}
