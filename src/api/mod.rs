//! # API Module
//!
//! HTTP handlers for the swap MCP server's REST surface.
//!
//! ## Available Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /networks` - List supported networks with chain ids
//! - `GET /resolve/network/:name` - Resolve a network name to its chain id
//! - `GET /resolve/token/:network/:symbol` - Resolve a token symbol to its
//!   contract address on a network
//!
//! The JSON-RPC `/rpc` endpoint is wired directly to the MCP handler in
//! `main.rs`.

pub mod health;
pub mod resolve;
