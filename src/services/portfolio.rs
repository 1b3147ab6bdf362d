// src/services/portfolio.rs

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use super::{read_json, UpstreamError};

/// Fetches the current portfolio value for an address on one chain.
pub async fn get_current_value(
    client: &Client,
    base: &str,
    key: Option<&SecretString>,
    address: &str,
    chain_id: u64,
) -> Result<Value, UpstreamError> {
    let key = key.ok_or(UpstreamError::MissingKey("portfolio"))?;
    let url = format!("{}/general/current_value", base.trim_end_matches('/'));
    debug!("requesting portfolio value for {} from {}", address, url);

    let resp = client
        .get(&url)
        .bearer_auth(key.expose_secret())
        .query(&[
            ("addresses", address.to_string()),
            ("chain_id", chain_id.to_string()),
        ])
        .send()
        .await
        .map_err(|source| UpstreamError::Transport {
            url: url.clone(),
            source,
        })?;

    read_json(resp).await
}
