//! Transfer encoders end to end: prepare, sign, serialize.

use mvx_kit::*;

const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
const BOB: &str = "erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx";
const BOB_HEX: &str = "8049d639e5a6980d1cd2392abcce41029cda74a1563523a202f09641cc2618f8";

#[test]
fn test_chain_id_per_network() {
    for (network, chain_id) in [
        ("mainnet", "1"),
        ("testnet", "T"),
        ("devnet", "D"),
    ] {
        let config = Config::new(network.parse().unwrap());
        let tx = EsdtTransfer::new()
            .sender(ALICE)
            .receiver(BOB)
            .token("WEGLD-bd4d79")
            .amount(1u64)
            .nonce(0)
            .gas_limit(500_000)
            .prepare(&config)
            .unwrap();
        assert_eq!(tx.chain_id, chain_id);
    }

    assert!(matches!(
        "localnet".parse::<Network>(),
        Err(Error::InvalidNetwork(_))
    ));
}

#[test]
fn test_esdt_zero_amount_scenario() {
    let tx = EsdtTransfer::new()
        .sender(ALICE)
        .receiver(BOB)
        .token("WEGLD-bd4d79")
        .amount(0u128)
        .nonce(1)
        .gas_limit(500_000)
        .prepare(&Config::devnet())
        .unwrap();

    assert_eq!(
        tx.decoded_data().unwrap().unwrap(),
        format!("ESDTTransfer@{}@00", hex::encode("WEGLD-bd4d79"))
    );
    assert_eq!(tx.value.to_atomic_string(), "0");
}

#[test]
fn test_nft_transfer_signed_wire_body() {
    let keypair = KeyPair::generate();
    let signed = NftTransfer::new()
        .sender(&keypair.address)
        .receiver(BOB)
        .collection("NFT-123456")
        .token_nonce(1)
        .quantity(1u64)
        .tx_nonce(99)
        .gas_limit(1_000_000)
        .prepare(&Config::testnet())
        .unwrap()
        .sign(&keypair.secret_key)
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&signed.to_json()).unwrap();
    assert_eq!(body["receiver"], keypair.address.as_str());
    assert_eq!(body["sender"], keypair.address.as_str());
    assert_eq!(body["nonce"], 99);
    assert_eq!(body["value"], "0");
    assert_eq!(body["chainID"], "T");
    assert_eq!(body["signature"].as_str().unwrap().len(), 128);

    let data = signed.transaction.decoded_data().unwrap().unwrap();
    assert!(data.ends_with(BOB_HEX));
    assert!(signed.verify());
}

#[test]
fn test_contract_call_with_dynamic_arguments() {
    let args: Vec<Arg> = serde_json::json!([255, "hello", true, false, BOB])
        .as_array()
        .unwrap()
        .iter()
        .cloned()
        .map(Arg::try_from)
        .collect::<Result<_, _>>()
        .unwrap();

    let tx = ContractCall::new()
        .sender(ALICE)
        .contract(BOB)
        .function("store")
        .args(args)
        .value("0.1 EGLD")
        .nonce(12)
        .gas_limit(10_000_000)
        .prepare(&Config::mainnet())
        .unwrap();

    assert_eq!(tx.receiver.as_str(), BOB);
    assert_eq!(tx.value, Egld::from_decimal("0.1").unwrap());
    assert_eq!(
        tx.decoded_data().unwrap().unwrap(),
        format!("store@ff@68656c6c6f@01@00@{}", BOB_HEX)
    );
}

#[test]
fn test_unsupported_dynamic_argument() {
    let result = Arg::try_from(serde_json::json!({ "nested": [1] }));
    match result {
        Err(err @ Error::UnsupportedArgumentType(_)) => {
            assert_eq!(err.to_string(), "Unsupported argument type encountered: object");
        }
        other => panic!("expected UnsupportedArgumentType, got {:?}", other),
    }
}
