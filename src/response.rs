// src/response.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single content block inside a tool response. Only text blocks are
/// produced by this server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// The uniform envelope every tool result is wrapped in, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResponse {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// A non-error response carrying the given text verbatim.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: false,
        }
    }

    /// An error response carrying the given text verbatim.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: true,
        }
    }
}

/// Wraps an arbitrary payload into the tool response envelope.
///
/// String payloads are used verbatim; everything else is pretty-printed. The
/// exact indentation of the pretty form is not a contract, only its parsed
/// content is.
pub fn format_tool_response(data: &Value, is_error: bool) -> ToolResponse {
    let text = match data {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    };
    ToolResponse {
        content: vec![ContentBlock::text(text)],
        is_error,
    }
}
