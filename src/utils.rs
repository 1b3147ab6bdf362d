//! Utility functions for the swap MCP server

use rand::rngs::OsRng;
use rand::RngCore;
use serde::de::DeserializeOwned;
use serde_json::{from_value, Value};

use crate::mcp::protocol::{error_codes, Response};

/// Generates a random 32-byte value, hex-encoded with a `0x` prefix.
///
/// Drawn from the OS secure random source. Used as a secret / correlation
/// value in cross-chain swap flows, so it must never come from a predictable
/// generator; if the OS source is unavailable the call aborts instead of
/// degrading.
pub fn random_bytes32() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

/// Helper function to extract a required argument from a JSON object
pub fn get_required_arg<T: DeserializeOwned>(
    args: &Value,
    key: &str,
    req_id: &Value,
) -> Result<T, Response> {
    from_value(args.get(key).cloned().unwrap_or(Value::Null)).map_err(|_| {
        Response::error(
            req_id.clone(),
            error_codes::INVALID_PARAMS,
            format!("Missing or invalid required argument: '{}'", key),
        )
    })
}

/// Helper function to extract an optional argument from a JSON object
pub fn get_optional_arg<T: DeserializeOwned>(args: &Value, key: &str) -> Option<T> {
    args.get(key)
        .filter(|v| !v.is_null())
        .cloned()
        .and_then(|v| from_value(v).ok())
}
