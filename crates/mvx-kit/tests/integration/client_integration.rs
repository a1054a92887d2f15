//! Client operations against the mock transport.

use std::sync::Arc;

use mvx_kit::*;
use serde_json::json;

use crate::mock::MockTransport;

const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
const BOB: &str = "erd1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruqzu66jx";

fn client(mock: &Arc<MockTransport>) -> Multiversx {
    Multiversx::with_transport(Config::devnet(), mock.clone())
}

// =============================================================================
// Transactions
// =============================================================================

#[tokio::test]
async fn test_send_transaction_posts_wire_body() {
    let tx_hash = "ab".repeat(32);
    let mock = Arc::new(
        MockTransport::new().respond(
            "/transactions",
            json!({ "txHash": tx_hash.clone(), "status": "pending" }),
        ),
    );
    let client = client(&mock);
    let keypair = KeyPair::generate();

    let signed = client
        .transaction()
        .sender(&keypair.address)
        .receiver(BOB)
        .value("0.25 EGLD")
        .nonce(3)
        .gas_limit(50_000)
        .data("hello")
        .build()
        .unwrap()
        .sign(&keypair.secret_key)
        .unwrap();

    let response = client.send_transaction(&signed).await.unwrap();
    assert_eq!(response.tx_hash, tx_hash);
    assert_eq!(response.status.as_deref(), Some("pending"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/transactions");

    let body = requests[0].body.clone().unwrap();
    assert_eq!(body, signed.to_json());

    // The posted body still verifies after a round trip through JSON.
    let parsed = SignedTransaction::from_json(&body).unwrap();
    assert!(parsed.verify());
    assert_eq!(parsed.transaction.chain_id, "D");
}

#[tokio::test]
async fn test_send_transaction_surfaces_status_errors() {
    let mock = Arc::new(MockTransport::new().fail("/transactions", 400, "invalid signature"));
    let client = client(&mock);
    let keypair = KeyPair::generate();

    let signed = client
        .transaction()
        .sender(&keypair.address)
        .receiver(BOB)
        .value(0u128)
        .nonce(0)
        .gas_limit(50_000)
        .build()
        .unwrap()
        .sign(&keypair.secret_key)
        .unwrap();

    match client.send_transaction(&signed).await {
        Err(Error::Transport(err)) => {
            assert_eq!(err.status_code(), Some(400));
            assert!(err.to_string().contains("invalid signature"));
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transaction_status() {
    let hash = "0123456789abcdef".repeat(4);
    let mock = Arc::new(MockTransport::new().respond(
        &format!("/transactions/{}", hash),
        json!({ "txHash": hash.clone(), "status": "success", "nonce": 3, "value": "0" }),
    ));
    let client = client(&mock);

    let status = client.transaction_status(&hash).await.unwrap();
    assert!(status.is_success());
    assert_eq!(status.nonce, Some(3));
    assert_eq!(status.value, Some(Egld::ZERO));
}

#[test]
fn test_transaction_status_rejects_bad_hash() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);

    let long = "ab".repeat(33);
    let non_hex = "zz".repeat(32);
    for bad in ["", "abc", non_hex.as_str(), long.as_str()] {
        let result = tokio_test::block_on(client.transaction_status(bad));
        assert!(matches!(result, Err(Error::InvalidArgument(_))), "{:?}", bad);
    }
    assert!(mock.requests().is_empty());
}

// =============================================================================
// Accounts and tokens
// =============================================================================

#[tokio::test]
async fn test_account() {
    let mock = Arc::new(MockTransport::new().respond(
        &format!("/accounts/{}", ALICE),
        json!({ "address": ALICE, "balance": "2000000000000000000", "nonce": 17, "shard": 0 }),
    ));
    let client = client(&mock);

    let account = client.account(ALICE).await.unwrap();
    assert_eq!(account.address.as_str(), ALICE);
    assert_eq!(account.balance, Egld::from_egld(2));
    assert_eq!(account.nonce, 17);
}

#[test]
fn test_account_rejects_invalid_address() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);

    let result = tokio_test::block_on(client.account("erd1invalid"));
    assert!(matches!(result, Err(Error::InvalidAddress(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_token_properties() {
    let mock = Arc::new(MockTransport::new().respond(
        "/tokens/WEGLD-bd4d79",
        json!({
            "identifier": "WEGLD-bd4d79",
            "name": "WrappedEGLD",
            "ticker": "WEGLD",
            "decimals": 18,
            "isPaused": false,
            "canUpgrade": true
        }),
    ));
    let client = client(&mock);

    let token = client.token_properties("WEGLD-bd4d79").await.unwrap();
    assert_eq!(token.identifier, "WEGLD-bd4d79");
    assert_eq!(token.name.as_deref(), Some("WrappedEGLD"));
    assert_eq!(token.extra["canUpgrade"], true);
}

#[tokio::test]
async fn test_token_properties_not_found() {
    let mock = Arc::new(MockTransport::new().fail(
        "/tokens/INVALIDTOKEN-123456",
        404,
        r#"{"message":"token not found"}"#,
    ));
    let client = client(&mock);

    let err = client
        .token_properties("INVALIDTOKEN-123456")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed with status 404"));
}

#[tokio::test]
async fn test_empty_token_identifier() {
    let mock = Arc::new(MockTransport::new());
    let client = client(&mock);

    assert!(matches!(
        client.token_properties("").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.token_balance(ALICE, "").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_token_balance() {
    let mock = Arc::new(MockTransport::new().respond(
        &format!("/accounts/{}/tokens/WEGLD-bd4d79", ALICE),
        json!({ "identifier": "WEGLD-bd4d79", "balance": "500000000000000000", "nonce": 0 }),
    ));
    let client = client(&mock);

    let balance = client.token_balance(ALICE, "WEGLD-bd4d79").await.unwrap();
    assert_eq!(
        balance.balance_atomic(),
        Some(U256::from(500_000_000_000_000_000u64))
    );
}

#[tokio::test]
async fn test_account_tokens_with_pagination() {
    let path = format!("/accounts/{}/tokens", ALICE);
    let mock = Arc::new(MockTransport::new().respond(
        &path,
        json!([
            { "identifier": "WEGLD-bd4d79", "balance": "1" },
            { "identifier": "USDC-c76f1f", "balance": "2500000", "decimals": 6 }
        ]),
    ));
    let client = client(&mock);

    let tokens = client.account_tokens(ALICE, Some(0), Some(2)).await.unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].decimals, Some(6));

    let tokens = client.account_tokens(ALICE, None, None).await.unwrap();
    assert_eq!(tokens.len(), 2);

    let requests = mock.requests();
    assert_eq!(
        requests[0].query,
        vec![
            ("from".to_string(), "0".to_string()),
            ("size".to_string(), "2".to_string())
        ]
    );
    assert!(requests[1].query.is_empty());
}

#[tokio::test]
async fn test_unexpected_response_shape() {
    let mock = Arc::new(
        MockTransport::new().respond(&format!("/accounts/{}", ALICE), json!({ "oops": true })),
    );
    let client = client(&mock);

    assert!(matches!(
        client.account(ALICE).await,
        Err(Error::Transport(TransportError::InvalidResponse(_)))
    ));
}
