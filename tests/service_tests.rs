//! Tests for the upstream API clients, using a mock HTTP server

use mockito::{mock, server_url, Matcher};
use secrecy::SecretString;
use serde_json::json;
use swap_mcp_server::services::{fusion, portfolio, UpstreamError};

#[tokio::test]
async fn quote_sends_bearer_and_parses_json() {
    let _m = mock("GET", "/quote-ok/quoter/v1.0/quote/receive")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("srcChain".into(), "1".into()),
            Matcher::UrlEncoded("dstChain".into(), "42161".into()),
            Matcher::UrlEncoded("amount".into(), "1000000".into()),
        ]))
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"dstTokenAmount":"990000"}"#)
        .create();

    let client = reqwest::Client::new();
    let key = SecretString::new("test-key".to_string());
    let base = format!("{}/quote-ok", server_url());
    let quote = fusion::QuoteRequest {
        src_chain: 1,
        dst_chain: 42161,
        src_token_address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
        dst_token_address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
        amount: "1000000".to_string(),
        wallet_address: "0x1111111111111111111111111111111111111111".to_string(),
    };

    let value = fusion::get_quote(&client, &base, Some(&key), &quote)
        .await
        .unwrap();
    assert_eq!(value, json!({"dstTokenAmount": "990000"}));
}

#[tokio::test]
async fn portfolio_success_parses_value() {
    let _m = mock("GET", "/pf-ok/general/current_value")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "addresses".into(),
                "0x3333333333333333333333333333333333333333".into(),
            ),
            Matcher::UrlEncoded("chain_id".into(), "137".into()),
        ]))
        .match_header("authorization", "Bearer pf-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result":[{"value_usd":42.5}]}"#)
        .create();

    let client = reqwest::Client::new();
    let key = SecretString::new("pf-key".to_string());
    let base = format!("{}/pf-ok", server_url());

    let value = portfolio::get_current_value(
        &client,
        &base,
        Some(&key),
        "0x3333333333333333333333333333333333333333",
        137,
    )
    .await
    .unwrap();
    assert_eq!(value["result"][0]["value_usd"], json!(42.5));
}

#[tokio::test]
async fn portfolio_non_success_maps_to_status_error() {
    let _m = mock("GET", "/pf-401/general/current_value")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error":"unauthorized"}"#)
        .create();

    let client = reqwest::Client::new();
    let key = SecretString::new("bad-key".to_string());
    let base = format!("{}/pf-401", server_url());

    let err = portfolio::get_current_value(
        &client,
        &base,
        Some(&key),
        "0x2222222222222222222222222222222222222222",
        1,
    )
    .await
    .unwrap_err();
    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("unauthorized"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_short_circuits_without_io() {
    // Unroutable base: if the client tried to connect this would fail with a
    // transport error, not MissingKey.
    let client = reqwest::Client::new();
    let err = portfolio::get_current_value(
        &client,
        "http://127.0.0.1:1",
        None,
        "0x2222222222222222222222222222222222222222",
        1,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UpstreamError::MissingKey("portfolio")));

    let quote = fusion::QuoteRequest {
        src_chain: 1,
        dst_chain: 137,
        src_token_address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
        dst_token_address: "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359".to_string(),
        amount: "1".to_string(),
        wallet_address: "0x1111111111111111111111111111111111111111".to_string(),
    };
    let err = fusion::get_quote(&client, "http://127.0.0.1:1", None, &quote)
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::MissingKey("fusion")));
}

#[tokio::test]
async fn invalid_upstream_json_is_a_decode_error() {
    let _m = mock("GET", "/pf-bad/general/current_value")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create();

    let client = reqwest::Client::new();
    let key = SecretString::new("pf-key".to_string());
    let base = format!("{}/pf-bad", server_url());

    let err = portfolio::get_current_value(
        &client,
        &base,
        Some(&key),
        "0x2222222222222222222222222222222222222222",
        1,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}
