// src/api/resolve.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    normalize::{validate_network, validate_token, NetworkValidation, TokenValidation},
    AppState,
};

pub async fn list_networks_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut networks: Vec<(&str, u64)> = state.networks.entries().collect();
    networks.sort_by_key(|(_, chain_id)| *chain_id);

    Json(json!({
        "networks": networks
            .iter()
            .map(|(name, chain_id)| json!({"network": name, "chainId": chain_id}))
            .collect::<Vec<_>>()
    }))
}

pub async fn resolve_network_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match validate_network(&name, &state.networks) {
        NetworkValidation::Valid { chain_id } => (
            StatusCode::OK,
            Json(json!({"network": name.to_lowercase(), "chainId": chain_id})),
        ),
        NetworkValidation::Invalid { message } => {
            (StatusCode::NOT_FOUND, Json(json!({"error": message})))
        }
    }
}

pub async fn resolve_token_handler(
    State(state): State<AppState>,
    Path((network, symbol)): Path<(String, String)>,
) -> impl IntoResponse {
    match validate_token(&network, &symbol, &state.tokens) {
        TokenValidation::Valid { address } => (
            StatusCode::OK,
            Json(json!({
                "network": network.to_lowercase(),
                "token": symbol.to_uppercase(),
                "address": address
            })),
        ),
        TokenValidation::Invalid { message } => {
            (StatusCode::NOT_FOUND, Json(json!({"error": message})))
        }
    }
}
