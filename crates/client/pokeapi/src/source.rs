//! Lookup abstraction.

use async_trait::async_trait;
use poke_core::Entity;

use crate::error::FetchError;

/// Anything that can resolve a pokemon name into an [`Entity`].
///
/// [`crate::PokeApiClient`] talks to the real API; [`crate::MockPokemonSource`]
/// serves canned payloads for tests.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch and normalize one pokemon.
    async fn fetch(&self, name: &str) -> Result<Entity, FetchError>;

    /// Like [`fetch`](Self::fetch), but never fails.
    ///
    /// Any error is logged once and replaced by [`Entity::unknown`], which
    /// callers check before acting on the result.
    async fn lookup(&self, name: &str) -> Entity {
        match self.fetch(name).await {
            Ok(entity) => entity,
            Err(e) => {
                tracing::warn!(
                    name,
                    kind = ?e.kind(),
                    "error fetching pokemon data: {}",
                    e
                );
                Entity::unknown()
            }
        }
    }
}
