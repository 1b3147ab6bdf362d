//! Read-only clients for the upstream swap-quote and portfolio APIs.
//!
//! Each client is a plain async function taking a shared `reqwest::Client`,
//! a base URL, and the bearer key from configuration. No signing, no order
//! submission: every call here is a read.

use reqwest::StatusCode;
use thiserror::Error;

pub mod fusion;
pub mod portfolio;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("no API key configured for the {0} API")]
    MissingKey(&'static str),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid JSON from upstream: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reads a response body, mapping non-2xx statuses to errors that carry the
/// upstream body for diagnostics.
pub(crate) async fn read_json(resp: reqwest::Response) -> Result<serde_json::Value, UpstreamError> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp
        .text()
        .await
        .map_err(|source| UpstreamError::Transport { url, source })?;
    if !status.is_success() {
        return Err(UpstreamError::Status { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}
