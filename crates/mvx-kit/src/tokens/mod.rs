//! Token transfer encoders.
//!
//! Token amounts do not travel in a transaction's `value`; they are encoded
//! into its `data` and the native value is always zero.
//!
//! - [`EsdtTransfer`] - fungible tokens (`ESDTTransfer@…`)
//! - [`NftTransfer`] - non-fungible and semi-fungible tokens (`ESDTNFTTransfer@…`)
//!
//! # Example
//!
//! ```
//! use mvx_kit::{Config, Egld, EsdtTransfer};
//!
//! let tx = EsdtTransfer::new()
//!     .sender("erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th")
//!     .receiver("erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx")
//!     .token("WEGLD-bd4d79")
//!     .decimal_amount("1.5", 18)
//!     .nonce(4)
//!     .gas_limit(500_000)
//!     .prepare(&Config::devnet())
//!     .unwrap();
//!
//! assert_eq!(tx.value, Egld::ZERO);
//! assert_eq!(
//!     tx.decoded_data().unwrap().as_deref(),
//!     Some("ESDTTransfer@5745474c442d626434643739@14d1120d7b160000")
//! );
//! ```

mod esdt;
mod nft;

pub use esdt::EsdtTransfer;
pub use nft::NftTransfer;
