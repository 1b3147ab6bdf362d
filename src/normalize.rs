// src/normalize.rs
//
// Validation of user-supplied (network, token) inputs against the static
// registries. A miss is a normal outcome carried in the result, never an
// error: callers branch on the variant.

use crate::registry::{NetworkRegistry, TokenRegistry};

/// Outcome of validating a network name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkValidation {
    /// The network is supported; carries its chain id.
    Valid { chain_id: u64 },
    /// The network is unknown; carries a human-readable reason.
    Invalid { message: String },
}

impl NetworkValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, NetworkValidation::Valid { .. })
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            NetworkValidation::Valid { chain_id } => Some(*chain_id),
            NetworkValidation::Invalid { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            NetworkValidation::Valid { .. } => None,
            NetworkValidation::Invalid { message } => Some(message),
        }
    }
}

/// Outcome of validating a token symbol on a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidation {
    /// The token is supported on the network; carries its contract address.
    Valid { address: String },
    /// The (network, token) pair is unknown; carries a human-readable reason.
    Invalid { message: String },
}

impl TokenValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenValidation::Valid { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            TokenValidation::Valid { address } => Some(address),
            TokenValidation::Invalid { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TokenValidation::Valid { .. } => None,
            TokenValidation::Invalid { message } => Some(message),
        }
    }
}

/// Validates a network name against the registry.
///
/// Matching is case-insensitive. The miss message echoes the input exactly as
/// the caller wrote it.
pub fn validate_network(network: &str, registry: &NetworkRegistry) -> NetworkValidation {
    match registry.chain_id(network) {
        Some(chain_id) => NetworkValidation::Valid { chain_id },
        None => NetworkValidation::Invalid {
            message: format!("Network '{}' not supported or not found.", network),
        },
    }
}

/// Validates a token symbol on a network against the registry.
///
/// Network matching is case-insensitive and symbol matching is uppercase. An
/// unknown network and an unknown symbol produce the same miss, with both
/// inputs echoed in their original casing.
pub fn validate_token(network: &str, token: &str, registry: &TokenRegistry) -> TokenValidation {
    match registry.address(network, token) {
        Some(address) => TokenValidation::Valid {
            address: address.to_string(),
        },
        None => TokenValidation::Invalid {
            message: format!("Token '{}' not supported on {}.", token, network),
        },
    }
}
