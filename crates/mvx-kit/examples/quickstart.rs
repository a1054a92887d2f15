//! Quickstart - keys, transfers and submission
//!
//! Covers: key generation, plain/ESDT/NFT/contract transactions, signing,
//! and sending through the REST API
//!
//! Run: cargo run --example quickstart
//!
//! Offline by default. To submit the plain transfer, set:
//!   MULTIVERSX_NETWORK=devnet
//!   MULTIVERSX_PRIVATE_KEY=<64 hex characters of a funded key>
//!
//! Logging is controlled with RUST_LOG, e.g. RUST_LOG=mvx_kit=debug

use mvx_kit::*;
use tracing_subscriber::EnvFilter;

const BOB: &str = "erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx";

// ============================================================================
// 1. Offline: build and sign every kind of transaction
// ============================================================================

fn offline_example(config: &Config, keypair: &KeyPair) -> Result<(), Error> {
    println!("=== Offline Example ===\n");

    let transfer = TransactionBuilder::new(config)
        .sender(&keypair.address)
        .receiver(BOB)
        .value("0.01 EGLD")
        .nonce(0)
        .gas_limit(50_000)
        .build()?
        .sign(&keypair.secret_key)?;
    println!("Plain transfer:\n{}\n", transfer.to_json());

    let esdt = EsdtTransfer::new()
        .sender(&keypair.address)
        .receiver(BOB)
        .token("WEGLD-bd4d79")
        .decimal_amount("1.5", 18)
        .nonce(1)
        .gas_limit(500_000)
        .prepare(config)?;
    println!("ESDT data: {:?}", esdt.decoded_data()?);

    let nft = NftTransfer::new()
        .sender(&keypair.address)
        .receiver(BOB)
        .collection("NFT-123456")
        .token_nonce(7)
        .quantity(1u64)
        .tx_nonce(2)
        .gas_limit(1_000_000)
        .prepare(config)?;
    println!("NFT data: {:?}", nft.decoded_data()?);

    let call = ContractCall::new()
        .sender(&keypair.address)
        .contract(BOB)
        .function("add")
        .args([Arg::from(42u64), Arg::from("memo")])
        .value(Egld::ZERO)
        .nonce(3)
        .gas_limit(5_000_000)
        .prepare(config)?
        .sign(&keypair.secret_key)?;
    println!("Contract call signature: {}\n", call.signature);

    Ok(())
}

// ============================================================================
// 2. Online: fetch the nonce and submit
// ============================================================================

async fn online_example(client: &Multiversx, keypair: &KeyPair) -> Result<(), Error> {
    println!("=== Online Example ===\n");

    let account = client.account(&keypair.address).await?;
    println!("Balance: {}, nonce: {}", account.balance, account.nonce);

    let signed = client
        .transaction()
        .sender(&keypair.address)
        .receiver(BOB)
        .value("0.001 EGLD")
        .nonce(account.nonce)
        .gas_limit(50_000)
        .build()?
        .sign(&keypair.secret_key)?;

    let sent = client.send_transaction(&signed).await?;
    println!("Submitted: {}", sent.tx_hash);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Multiversx::from_env()?;

    match std::env::var("MULTIVERSX_PRIVATE_KEY") {
        Ok(key) => {
            let keypair = KeyPair::from_private_key_hex(&key)?;
            offline_example(client.config(), &keypair)?;
            online_example(&client, &keypair).await?;
        }
        Err(_) => {
            let keypair = KeyPair::generate();
            println!("Generated address: {}\n", keypair.address);
            offline_example(client.config(), &keypair)?;
        }
    }

    Ok(())
}
