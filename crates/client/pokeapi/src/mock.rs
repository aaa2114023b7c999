//! Mock pokemon source for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use poke_core::Entity;

use crate::client::decode_response;
use crate::error::FetchError;
use crate::source::PokemonSource;

/// Canned response for one name.
#[derive(Clone, Debug)]
enum Canned {
    Http { status: u16, body: String },
    NetworkFailure(String),
}

/// Mock pokemon source for testing without network.
///
/// Responses go through the same [`decode_response`] path as the real client.
/// Names with no canned response answer 404. Every requested name is
/// recorded, lower-cased, in request order.
#[derive(Clone, Default)]
pub struct MockPokemonSource {
    responses: Arc<Mutex<HashMap<String, Canned>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockPokemonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for `name`.
    pub fn with_payload(self, name: &str, body: impl Into<String>) -> Self {
        self.with_response(name, 200, body)
    }

    /// Serve an arbitrary status and body for `name`.
    pub fn with_response(self, name: &str, status: u16, body: impl Into<String>) -> Self {
        self.insert(
            name,
            Canned::Http {
                status,
                body: body.into(),
            },
        )
    }

    /// Fail the request for `name` as if the connection dropped.
    pub fn with_network_failure(self, name: &str, message: impl Into<String>) -> Self {
        self.insert(name, Canned::NetworkFailure(message.into()))
    }

    /// Names requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn insert(self, name: &str, canned: Canned) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_lowercase(), canned);
        self
    }
}

#[async_trait]
impl PokemonSource for MockPokemonSource {
    async fn fetch(&self, name: &str) -> Result<Entity, FetchError> {
        let key = name.to_lowercase();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key.clone());

        let canned = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();

        match canned {
            Some(Canned::Http { status, body }) => decode_response(status, &body, name),
            Some(Canned::NetworkFailure(message)) => Err(FetchError::Network(message)),
            None => decode_response(404, "Not Found", name),
        }
    }
}

/// Build a minimal PokeAPI payload with the three projected stats.
pub fn pokemon_payload(name: &str, types: &[&str], hp: u32, attack: u32, defense: u32) -> String {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| serde_json::json!({ "slot": i + 1, "type": { "name": t } }))
        .collect();
    serde_json::json!({
        "name": name,
        "types": types,
        "stats": [
            { "base_stat": hp, "stat": { "name": "hp" } },
            { "base_stat": attack, "stat": { "name": "attack" } },
            { "base_stat": defense, "stat": { "name": "defense" } },
        ],
    })
    .to_string()
}
