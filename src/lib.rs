// src/lib.rs

// Re-export the request-normalization core
pub use normalize::{validate_network, validate_token, NetworkValidation, TokenValidation};
pub use registry::{NetworkRegistry, TokenRegistry};
pub use response::{format_tool_response, ContentBlock, ToolResponse};
pub use utils::random_bytes32;

// Re-export modules
pub mod api;
pub mod config;
pub mod mcp;
pub mod normalize;
pub mod registry;
pub mod response;
pub mod services;
pub mod utils;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Supported networks and their chain ids
    pub networks: registry::NetworkRegistry,
    /// Token contract addresses keyed by network
    pub tokens: registry::TokenRegistry,
    /// Shared HTTP client for upstream API calls
    pub http: reqwest::Client,
}

impl AppState {
    /// Builds application state around the built-in registries.
    pub fn new(config: config::Config) -> Self {
        Self {
            config,
            networks: registry::NetworkRegistry::builtin(),
            tokens: registry::TokenRegistry::builtin(),
            http: reqwest::Client::new(),
        }
    }
}
