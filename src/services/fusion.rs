// src/services/fusion.rs

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{read_json, UpstreamError};

/// Parameters for a cross-chain quote. Field names serialize to the query
/// parameter names the quoter endpoint expects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub src_chain: u64,
    pub dst_chain: u64,
    pub src_token_address: String,
    pub dst_token_address: String,
    pub amount: String,
    pub wallet_address: String,
}

/// Fetches a cross-chain swap quote from the Fusion+ quoter.
pub async fn get_quote(
    client: &Client,
    base: &str,
    key: Option<&SecretString>,
    quote: &QuoteRequest,
) -> Result<Value, UpstreamError> {
    let key = key.ok_or(UpstreamError::MissingKey("fusion"))?;
    let url = format!("{}/quoter/v1.0/quote/receive", base.trim_end_matches('/'));
    debug!(
        "requesting quote {} -> {} from {}",
        quote.src_chain, quote.dst_chain, url
    );

    let resp = client
        .get(&url)
        .bearer_auth(key.expose_secret())
        .query(quote)
        .send()
        .await
        .map_err(|source| UpstreamError::Transport {
            url: url.clone(),
            source,
        })?;

    read_json(resp).await
}
