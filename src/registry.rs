// src/registry.rs

use std::collections::HashMap;

/// Supported networks and their canonical chain ids.
///
/// Keys are stored lowercase; lookups normalize their input the same way, so
/// callers may pass names in any casing. The table is built once and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct NetworkRegistry {
    chains: HashMap<String, u64>,
}

impl NetworkRegistry {
    /// The built-in set of supported public networks.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("ethereum", 1),
            ("optimism", 10),
            ("bsc", 56),
            ("gnosis", 100),
            ("polygon", 137),
            ("zksync", 324),
            ("mantle", 5000),
            ("base", 8453),
            ("arbitrum", 42161),
            ("avalanche", 43114),
            ("linea", 59144),
            ("blast", 81457),
            ("scroll", 534352),
        ])
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        Self {
            chains: entries
                .into_iter()
                .map(|(name, id)| (name.to_lowercase(), id))
                .collect(),
        }
    }

    /// Looks up the chain id for a network name, case-insensitively.
    pub fn chain_id(&self, network: &str) -> Option<u64> {
        self.chains.get(&network.to_lowercase()).copied()
    }

    /// Iterates over all (name, chain id) pairs in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.chains.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Token contract addresses, keyed by network name and token symbol.
///
/// The same symbol resolves to different addresses on different networks, so
/// an address is only meaningful together with its network entry.
#[derive(Clone, Debug)]
pub struct TokenRegistry {
    tokens: HashMap<String, HashMap<String, String>>,
}

impl TokenRegistry {
    /// Built-in stablecoin addresses on the networks that carry them.
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "ethereum",
                vec![
                    ("USDC", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                    ("USDT", "0xdAC17F958D2ee523a2206206994597C13D831ec7"),
                    ("DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
                ],
            ),
            (
                "arbitrum",
                vec![
                    ("USDC", "0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
                    ("USDT", "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
                    ("DAI", "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
                ],
            ),
            (
                "optimism",
                vec![
                    ("USDC", "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85"),
                    ("USDT", "0x94b008aA00579c1307B0EF2c499aD98a8ce58e58"),
                    ("DAI", "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1"),
                ],
            ),
            (
                "base",
                vec![
                    ("USDC", "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
                    ("USDT", "0xd9aAEc86B65D86f6A7B5B1b0c42FFA531710b6CA"),
                    ("DAI", "0x50c5725949A6F0c72E6C4a641F24049A917DB0Cb"),
                ],
            ),
            (
                "polygon",
                vec![
                    ("USDC", "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359"),
                    ("USDT", "0xc2132D05D31c914a87C6611C10748AEb04B58e8F"),
                    ("DAI", "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063"),
                ],
            ),
        ])
    }

    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, Vec<(&'a str, &'a str)>)>,
    ) -> Self {
        Self {
            tokens: entries
                .into_iter()
                .map(|(network, tokens)| {
                    (
                        network.to_lowercase(),
                        tokens
                            .into_iter()
                            .map(|(symbol, address)| (symbol.to_uppercase(), address.to_string()))
                            .collect(),
                    )
                })
                .collect(),
        }
    }

    /// Looks up a token contract address. Network names are matched
    /// case-insensitively and symbols are matched uppercase; a missing
    /// network entry and a missing symbol are both plain misses.
    pub fn address(&self, network: &str, token: &str) -> Option<&str> {
        self.tokens
            .get(&network.to_lowercase())?
            .get(&token.to_uppercase())
            .map(String::as_str)
    }
}
