//! PokeAPI HTTP client implementation.

use async_trait::async_trait;
use poke_core::Entity;

use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::source::PokemonSource;
use crate::types::PokemonResponse;

/// PokeAPI client using the public HTTP API.
///
/// Holds a single long-lived `reqwest::Client`. Build it once at startup and
/// pass it to whatever needs lookups.
pub struct PokeApiClient {
    /// Base endpoint, without trailing slash
    base_url: String,

    /// HTTP client
    http_client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(config: ApiConfig, http_client: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one pokemon by name.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - PokeAPI answers with a non-success status
    /// - Response parsing fails
    pub async fn get_pokemon(&self, name: &str) -> Result<Entity> {
        let url = pokemon_url(&self.base_url, name);

        tracing::debug!("Requesting {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            "PokeAPI responded {} ({} bytes) for {}",
            status,
            body.len(),
            name
        );

        decode_response(status.as_u16(), &body, name)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch(&self, name: &str) -> Result<Entity> {
        self.get_pokemon(name).await
    }
}

/// `{base}/pokemon/{name}` with the name lower-cased.
///
/// No other escaping is applied.
pub fn pokemon_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/pokemon/{}",
        base_url.trim_end_matches('/'),
        name.to_lowercase()
    )
}

/// Turn an HTTP status and body into an [`Entity`] or an error.
pub fn decode_response(status: u16, body: &str, requested: &str) -> Result<Entity> {
    match status {
        200..=299 => {
            let payload: PokemonResponse = serde_json::from_str(body)?;
            Ok(payload.into_entity(requested))
        }
        404 => Err(FetchError::NotFound(requested.to_lowercase())),
        status => Err(FetchError::Status {
            status,
            name: requested.to_lowercase(),
        }),
    }
}
