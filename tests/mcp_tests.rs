//! Tests for MCP request dispatch

use serde_json::{json, Value};
use swap_mcp_server::{
    config::Config,
    mcp::{
        handler::handle_mcp_request,
        protocol::{error_codes, Request},
    },
    AppState,
};

fn test_state() -> AppState {
    AppState::new(Config::default())
}

fn request(method: &str, params: Option<Value>) -> Request {
    Request {
        jsonrpc: "2.0".to_string(),
        id: json!(1),
        method: method.to_string(),
        params,
    }
}

fn tool_call(name: &str, arguments: Value) -> Request {
    request(
        "tools/call",
        Some(json!({"name": name, "arguments": arguments})),
    )
}

fn tool_text(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let resp = handle_mcp_request(request("initialize", None), test_state())
        .await
        .unwrap();
    assert!(resp.error.is_none());
    let result = resp.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], json!("swap_mcp"));
}

#[tokio::test]
async fn tools_list_contains_all_tools() {
    let resp = handle_mcp_request(request("tools/list", None), test_state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    let names: Vec<&str> = result["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    for expected in [
        "list_networks",
        "resolve_network",
        "resolve_token",
        "generate_secret",
        "get_quote",
        "get_portfolio_value",
    ] {
        assert!(names.contains(&expected), "missing tool {expected}");
    }
}

#[tokio::test]
async fn resolve_network_returns_chain_id_envelope() {
    let resp = handle_mcp_request(
        tool_call("resolve_network", json!({"network": "Ethereum"})),
        test_state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(false));
    let payload: Value = serde_json::from_str(tool_text(&result)).unwrap();
    assert_eq!(payload["chainId"], json!(1));
    assert_eq!(payload["network"], json!("ethereum"));
}

#[tokio::test]
async fn resolve_network_miss_is_an_error_envelope() {
    let resp = handle_mcp_request(
        tool_call("resolve_network", json!({"network": "solana"})),
        test_state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(true));
    assert_eq!(
        tool_text(&result),
        "Network 'solana' not supported or not found."
    );
}

#[tokio::test]
async fn resolve_token_returns_address_envelope() {
    let resp = handle_mcp_request(
        tool_call("resolve_token", json!({"network": "arbitrum", "token": "usdt"})),
        test_state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(false));
    let payload: Value = serde_json::from_str(tool_text(&result)).unwrap();
    assert_eq!(
        payload["address"],
        json!("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9")
    );
    assert_eq!(payload["token"], json!("USDT"));
}

#[tokio::test]
async fn resolve_token_miss_echoes_both_inputs() {
    let resp = handle_mcp_request(
        tool_call("resolve_token", json!({"network": "ethereum", "token": "XYZ"})),
        test_state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(true));
    assert_eq!(tool_text(&result), "Token 'XYZ' not supported on ethereum.");
}

#[tokio::test]
async fn generate_secret_returns_bytes32_text() {
    let resp = handle_mcp_request(tool_call("generate_secret", json!({})), test_state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(false));
    let secret = tool_text(&result);
    assert_eq!(secret.len(), 66);
    assert!(secret.starts_with("0x"));
    assert!(secret[2..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn list_networks_is_sorted_by_chain_id() {
    let resp = handle_mcp_request(tool_call("list_networks", json!({})), test_state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    let payload: Value = serde_json::from_str(tool_text(&result)).unwrap();
    let ids: Vec<u64> = payload["networks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["chainId"].as_u64().unwrap())
        .collect();
    assert_eq!(ids.len(), 13);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn missing_argument_is_invalid_params() {
    let resp = handle_mcp_request(tool_call("resolve_network", json!({})), test_state())
        .await
        .unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn unknown_tool_is_method_not_found() {
    let resp = handle_mcp_request(tool_call("execute_swap", json!({})), test_state())
        .await
        .unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let resp = handle_mcp_request(request("resources/list", None), test_state())
        .await
        .unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn notifications_get_no_response() {
    let req = Request {
        jsonrpc: "2.0".to_string(),
        id: Value::Null,
        method: "tools/list".to_string(),
        params: None,
    };
    assert!(handle_mcp_request(req, test_state()).await.is_none());
}

#[tokio::test]
async fn direct_method_alias_reuses_tool_logic() {
    let resp = handle_mcp_request(
        request("resolve_network", Some(json!({"network": "base"}))),
        test_state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    let payload: Value = serde_json::from_str(tool_text(&result)).unwrap();
    assert_eq!(payload["chainId"], json!(8453));
}

#[tokio::test]
async fn quote_without_key_is_a_tool_error() {
    let args = json!({
        "src_network": "ethereum",
        "dst_network": "arbitrum",
        "src_token": "USDC",
        "dst_token": "USDC",
        "amount": "1000000",
        "wallet_address": "0x1111111111111111111111111111111111111111"
    });
    let resp = handle_mcp_request(tool_call("get_quote", args), test_state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(true));
    assert!(tool_text(&result).contains("no API key configured"));
}

#[tokio::test]
async fn quote_with_unknown_token_fails_before_any_request() {
    let args = json!({
        "src_network": "ethereum",
        "dst_network": "arbitrum",
        "src_token": "XYZ",
        "dst_token": "USDC",
        "amount": "1000000",
        "wallet_address": "0x1111111111111111111111111111111111111111"
    });
    let resp = handle_mcp_request(tool_call("get_quote", args), test_state())
        .await
        .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(true));
    assert_eq!(tool_text(&result), "Token 'XYZ' not supported on ethereum.");
}

#[tokio::test]
async fn portfolio_without_address_is_a_tool_error() {
    let resp = handle_mcp_request(
        tool_call("get_portfolio_value", json!({"network": "ethereum"})),
        test_state(),
    )
    .await
    .unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(true));
    assert!(tool_text(&result).contains("WALLET_ADDRESS"));
}
