//! PokeAPI endpoint configuration.

use std::env;

/// Public PokeAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Fetcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL that `pokemon/{name}` is appended to.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        match env::var("POKEAPI_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}
