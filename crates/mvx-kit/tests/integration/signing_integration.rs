//! Key derivation and transaction signing through the public API.

use mvx_kit::*;

const BOB: &str = "erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx";

/// secp256k1 group order divided by two (big-endian).
const HALF_ORDER: &str = "7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0";

fn one() -> KeyPair {
    KeyPair::from_private_key_hex(&format!("{:0>64}", "1")).unwrap()
}

#[test]
fn test_generator_key_material() {
    let keypair = one();
    assert_eq!(
        keypair.public_key_hex(),
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
    assert_eq!(
        keypair.address.as_str(),
        "erd10xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqe757kg"
    );
    assert_eq!(
        Address::decode(keypair.address.as_str()).unwrap(),
        *keypair.public_key.as_bytes()
    );
}

#[test]
fn test_generated_keys_are_consistent() {
    for _ in 0..8 {
        let keypair = KeyPair::generate();
        assert_eq!(keypair.private_key_hex().len(), 64);
        assert_eq!(keypair.address.as_str().len(), ADDRESS_LEN);
        assert!(Address::is_valid(keypair.address.as_str()));

        let restored = KeyPair::from_private_key_hex(&keypair.private_key_hex()).unwrap();
        assert_eq!(restored.address, keypair.address);
    }
}

#[test]
fn test_signing_is_deterministic_and_low_s() {
    let keypair = one();
    let half_order = hex::decode(HALF_ORDER).unwrap();

    for nonce in 0..16u64 {
        let build = || {
            TransactionBuilder::new(&Config::mainnet())
                .sender(&keypair.address)
                .receiver(BOB)
                .value(Egld::from_atomic(nonce as u128 * 1_000))
                .nonce(nonce)
                .gas_limit(50_000)
                .build()
                .unwrap()
        };

        let first = build().sign(&keypair.secret_key).unwrap();
        let second = build().sign(&keypair.secret_key).unwrap();
        assert_eq!(first.signature, second.signature);

        let hex = first.signature.to_hex();
        assert_eq!(hex.len(), SIGNATURE_HEX_LEN);
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert!(first.signature.s() <= half_order.as_slice(), "high S for nonce {}", nonce);
        assert!(first.verify());
    }
}

#[test]
fn test_signature_depends_on_every_field() {
    let keypair = one();
    let devnet = Config::devnet();
    let base = TransactionBuilder::new(&devnet)
        .sender(&keypair.address)
        .receiver(BOB)
        .value(0u128)
        .nonce(1)
        .gas_limit(50_000);
    let signed = base.build().unwrap().sign(&keypair.secret_key).unwrap();

    let on_testnet = TransactionBuilder::new(&Config::testnet())
        .sender(&keypair.address)
        .receiver(BOB)
        .value(0u128)
        .nonce(1)
        .gas_limit(50_000)
        .build()
        .unwrap()
        .sign(&keypair.secret_key)
        .unwrap();

    assert_ne!(signed.signature, on_testnet.signature);
    assert_ne!(signed.transaction.digest(), on_testnet.transaction.digest());
}

#[test]
fn test_signing_payload_matches_digest() {
    let keypair = one();
    let tx = TransactionBuilder::new(&Config::devnet())
        .sender(&keypair.address)
        .receiver(BOB)
        .value("1 EGLD")
        .nonce(7)
        .gas_limit(50_000)
        .data("hello")
        .build()
        .unwrap();

    assert_eq!(
        tx.signing_payload(),
        format!(
            r#"{{"nonce":7,"value":"1000000000000000000","receiver":"{}","sender":"{}","gasPrice":1000000000,"gasLimit":50000,"data":"aGVsbG8=","chainID":"D","version":1}}"#,
            BOB, keypair.address
        )
    );
    assert_eq!(
        tx.digest(),
        CryptoHash::keccak256(tx.signing_payload().as_bytes())
    );
}

#[test]
fn test_invalid_private_keys() {
    let cases = [
        "".to_string(),
        "abc".to_string(),
        "g".repeat(64),
        "0".repeat(64),
        // The group order itself is not a valid scalar.
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141".to_string(),
    ];
    for key in cases {
        assert!(
            KeyPair::from_private_key_hex(&key).is_err(),
            "accepted {:?}",
            key
        );
    }
}
