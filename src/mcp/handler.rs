//! # MCP Handler Module
//!
//! This module implements the Model Context Protocol (MCP) dispatch for the
//! swap server. It handles incoming MCP requests and routes them to the
//! registry, normalizer, and upstream-API tools.
//!
//! ## Supported Tools
//!
//! ### Registry / Normalization
//! - `list_networks` - List supported networks with chain ids
//! - `resolve_network` - Resolve a network name to its chain id
//! - `resolve_token` - Resolve a token symbol on a network to its address
//! - `generate_secret` - Fresh random bytes32 for cross-chain swap flows
//!
//! ### Upstream (read-only)
//! - `get_quote` - Cross-chain swap quote via the Fusion+ quoter
//! - `get_portfolio_value` - Current portfolio value for an address

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    mcp::protocol::{error_codes, Request, Response},
    normalize::{validate_network, validate_token, NetworkValidation, TokenValidation},
    response::{format_tool_response, ToolResponse},
    services::{fusion, portfolio},
    utils, AppState,
};

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tool_call(req, state).await,
        // Convenience aliases to support direct method calls from CLI
        // clients. They are rewritten into tools/call to reuse the same logic
        "list_networks" | "resolve_network" | "resolve_token" | "generate_secret" | "get_quote"
        | "get_portfolio_value" => {
            let name = req.method.clone();
            let wrapped = Request {
                jsonrpc: req.jsonrpc.clone(),
                id: req.id.clone(),
                method: "tools/call".to_string(),
                params: Some(json!({
                    "name": name,
                    "arguments": req.params.clone().unwrap_or_else(|| json!({}))
                })),
            };
            handle_tool_call(wrapped, state).await
        }
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by dispatching it to the correct tool logic.
async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let empty_args = json!({});
    let args = params.get("arguments").unwrap_or(&empty_args);
    let req_id = &req.id;

    match tool_name {
        "list_networks" => list_networks(req_id, &state),
        "resolve_network" => resolve_network(req_id, args, &state),
        "resolve_token" => resolve_token(req_id, args, &state),
        "generate_secret" => generate_secret(req_id),
        "get_quote" => get_quote(req_id, args, &state).await,
        "get_portfolio_value" => get_portfolio_value(req_id, args, &state).await,
        _ => Response::error(
            req_id.clone(),
            error_codes::METHOD_NOT_FOUND,
            format!("Unknown tool: {}", tool_name),
        ),
    }
}

fn list_networks(req_id: &Value, state: &AppState) -> Response {
    let mut networks: Vec<(&str, u64)> = state.networks.entries().collect();
    networks.sort_by_key(|(_, chain_id)| *chain_id);

    let payload = json!({
        "networks": networks
            .iter()
            .map(|(name, chain_id)| json!({"network": name, "chainId": chain_id}))
            .collect::<Vec<_>>()
    });
    Response::tool_result(req_id.clone(), &format_tool_response(&payload, false))
}

fn resolve_network(req_id: &Value, args: &Value, state: &AppState) -> Response {
    let network: String = match utils::get_required_arg(args, "network", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let tool = match validate_network(&network, &state.networks) {
        NetworkValidation::Valid { chain_id } => format_tool_response(
            &json!({"network": network.to_lowercase(), "chainId": chain_id}),
            false,
        ),
        NetworkValidation::Invalid { message } => ToolResponse::error(message),
    };
    Response::tool_result(req_id.clone(), &tool)
}

fn resolve_token(req_id: &Value, args: &Value, state: &AppState) -> Response {
    let network: String = match utils::get_required_arg(args, "network", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let token: String = match utils::get_required_arg(args, "token", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let tool = match validate_token(&network, &token, &state.tokens) {
        TokenValidation::Valid { address } => format_tool_response(
            &json!({
                "network": network.to_lowercase(),
                "token": token.to_uppercase(),
                "address": address
            }),
            false,
        ),
        TokenValidation::Invalid { message } => ToolResponse::error(message),
    };
    Response::tool_result(req_id.clone(), &tool)
}

fn generate_secret(req_id: &Value) -> Response {
    Response::tool_result(req_id.clone(), &ToolResponse::text(utils::random_bytes32()))
}

async fn get_quote(req_id: &Value, args: &Value, state: &AppState) -> Response {
    let src_network: String = match utils::get_required_arg(args, "src_network", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let dst_network: String = match utils::get_required_arg(args, "dst_network", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let src_token: String = match utils::get_required_arg(args, "src_token", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let dst_token: String = match utils::get_required_arg(args, "dst_token", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let amount: String = match utils::get_required_arg(args, "amount", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let wallet_address = match utils::get_optional_arg::<String>(args, "wallet_address")
        .or_else(|| state.config.wallet_address.clone())
    {
        Some(a) => a,
        None => {
            return Response::tool_result(
                req_id.clone(),
                &ToolResponse::error(
                    "No wallet address provided and WALLET_ADDRESS is not configured.",
                ),
            )
        }
    };

    let src_chain = match validate_network(&src_network, &state.networks) {
        NetworkValidation::Valid { chain_id } => chain_id,
        NetworkValidation::Invalid { message } => {
            return Response::tool_result(req_id.clone(), &ToolResponse::error(message))
        }
    };
    let dst_chain = match validate_network(&dst_network, &state.networks) {
        NetworkValidation::Valid { chain_id } => chain_id,
        NetworkValidation::Invalid { message } => {
            return Response::tool_result(req_id.clone(), &ToolResponse::error(message))
        }
    };
    let src_token_address = match validate_token(&src_network, &src_token, &state.tokens) {
        TokenValidation::Valid { address } => address,
        TokenValidation::Invalid { message } => {
            return Response::tool_result(req_id.clone(), &ToolResponse::error(message))
        }
    };
    let dst_token_address = match validate_token(&dst_network, &dst_token, &state.tokens) {
        TokenValidation::Valid { address } => address,
        TokenValidation::Invalid { message } => {
            return Response::tool_result(req_id.clone(), &ToolResponse::error(message))
        }
    };

    let quote = fusion::QuoteRequest {
        src_chain,
        dst_chain,
        src_token_address,
        dst_token_address,
        amount,
        wallet_address,
    };

    match fusion::get_quote(
        &state.http,
        &state.config.fusion_api_url,
        state.config.dev_portal_key.as_ref(),
        &quote,
    )
    .await
    {
        Ok(value) => Response::tool_result(req_id.clone(), &format_tool_response(&value, false)),
        Err(e) => {
            warn!("quote request failed: {}", e);
            Response::tool_result(
                req_id.clone(),
                &ToolResponse::error(format!("Quote request failed: {}", e)),
            )
        }
    }
}

async fn get_portfolio_value(req_id: &Value, args: &Value, state: &AppState) -> Response {
    let network: String = match utils::get_required_arg(args, "network", req_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let address = match utils::get_optional_arg::<String>(args, "address")
        .or_else(|| state.config.wallet_address.clone())
    {
        Some(a) => a,
        None => {
            return Response::tool_result(
                req_id.clone(),
                &ToolResponse::error(
                    "No address provided and WALLET_ADDRESS is not configured.",
                ),
            )
        }
    };

    let chain_id = match validate_network(&network, &state.networks) {
        NetworkValidation::Valid { chain_id } => chain_id,
        NetworkValidation::Invalid { message } => {
            return Response::tool_result(req_id.clone(), &ToolResponse::error(message))
        }
    };

    match portfolio::get_current_value(
        &state.http,
        &state.config.portfolio_api_url,
        state.config.portfolio_api_key.as_ref(),
        &address,
        chain_id,
    )
    .await
    {
        Ok(value) => Response::tool_result(req_id.clone(), &format_tool_response(&value, false)),
        Err(e) => {
            warn!("portfolio request failed: {}", e);
            Response::tool_result(
                req_id.clone(),
                &ToolResponse::error(format!("Portfolio request failed: {}", e)),
            )
        }
    }
}

fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": "swap_mcp",
        "version": "0.1.0"
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions =
        "Cross-chain swap MCP server for network/token resolution, swap quotes, and portfolio queries.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": "2025-06-18",
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request by returning a JSON definition of all available tools.
fn handle_tools_list(req: &Request) -> Response {
    let tools = json!([
        {
            "name": "list_networks",
            "description": "List all supported networks with their chain ids.",
            "inputSchema": { "type": "object", "properties": {}, "additionalProperties": false }
        },
        {
            "name": "resolve_network",
            "description": "Resolve a network name (e.g. 'ethereum') to its chain id. Case-insensitive.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "network": {"type": "string", "description": "Network name, e.g. 'ethereum' or 'arbitrum'."}
                },
                "required": ["network"],
                "additionalProperties": false
            }
        },
        {
            "name": "resolve_token",
            "description": "Resolve a token symbol on a network to its contract address. Case-insensitive on both inputs.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "network": {"type": "string", "description": "Network name, e.g. 'ethereum'."},
                    "token": {"type": "string", "description": "Token symbol, e.g. 'USDC'."}
                },
                "required": ["network", "token"],
                "additionalProperties": false
            }
        },
        {
            "name": "generate_secret",
            "description": "Generate a fresh random bytes32 value (0x + 64 hex chars) for use as a cross-chain swap secret.",
            "inputSchema": { "type": "object", "properties": {}, "additionalProperties": false }
        },
        {
            "name": "get_quote",
            "description": "Get a cross-chain swap quote between two supported tokens (requires DEV_PORTAL_KEY).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "src_network": {"type": "string", "description": "Source network name."},
                    "dst_network": {"type": "string", "description": "Destination network name."},
                    "src_token": {"type": "string", "description": "Source token symbol."},
                    "dst_token": {"type": "string", "description": "Destination token symbol."},
                    "amount": {"type": "string", "description": "Amount in the source token's smallest unit."},
                    "wallet_address": {"type": "string", "description": "Wallet address for the quote. Falls back to WALLET_ADDRESS."}
                },
                "required": ["src_network", "dst_network", "src_token", "dst_token", "amount"],
                "additionalProperties": false
            }
        },
        {
            "name": "get_portfolio_value",
            "description": "Get the current portfolio value of an address on a network (requires PORTFOLIO_API_KEY).",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "network": {"type": "string", "description": "Network name, e.g. 'ethereum'."},
                    "address": {"type": "string", "description": "The 0x... address to value. Falls back to WALLET_ADDRESS."}
                },
                "required": ["network"],
                "additionalProperties": false
            }
        }
    ]);

    Response::success(req.id.clone(), json!({ "tools": tools }))
}
