// src/config.rs

use std::env;

use anyhow::{Context, Result};
use secrecy::SecretString;

pub const DEFAULT_FUSION_API_URL: &str = "https://api.1inch.dev/fusion-plus";
pub const DEFAULT_PORTFOLIO_API_URL: &str = "https://api.1inch.dev/portfolio/portfolio/v4";

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,

    // Upstream API settings
    pub fusion_api_url: String,
    pub portfolio_api_url: String,

    /// Bearer key for the swap-quote (Fusion+) API
    pub dev_portal_key: Option<SecretString>,
    /// Bearer key for the portfolio API
    pub portfolio_api_key: Option<SecretString>,

    /// Default wallet address used when a portfolio or quote request does not
    /// supply one. A public address only, never key material.
    pub wallet_address: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        Ok(Config {
            // Server settings
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,

            // Upstream API settings
            fusion_api_url: env::var("FUSION_API_URL")
                .unwrap_or_else(|_| DEFAULT_FUSION_API_URL.to_string()),
            portfolio_api_url: env::var("PORTFOLIO_API_URL")
                .unwrap_or_else(|_| DEFAULT_PORTFOLIO_API_URL.to_string()),

            // Keys are optional at startup; tools that need a missing key
            // report it per call instead of failing the whole server.
            dev_portal_key: env::var("DEV_PORTAL_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .map(SecretString::new),
            portfolio_api_key: env::var("PORTFOLIO_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .map(SecretString::new),

            wallet_address: env::var("WALLET_ADDRESS").ok().filter(|a| !a.is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            fusion_api_url: DEFAULT_FUSION_API_URL.to_string(),
            portfolio_api_url: DEFAULT_PORTFOLIO_API_URL.to_string(),
            dev_portal_key: None,
            portfolio_api_key: None,
            wallet_address: None,
        }
    }
}
