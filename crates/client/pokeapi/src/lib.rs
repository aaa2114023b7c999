//! PokeAPI lookups.
//!
//! This crate is the fetcher: it issues one `GET pokemon/{name}` per lookup,
//! decodes the nested JSON payload, and projects it into a flat
//! [`poke_core::Entity`].
//!
//! ## Error Model
//!
//! [`PokemonSource::fetch`] reports failures as a [`FetchError`]. The
//! sentinel `unknown` entity only appears through [`PokemonSource::lookup`],
//! which logs the error and substitutes the sentinel for display code.
//!
//! ## Modules
//!
//! - [`client`]: reqwest-backed client and the pure decode helpers
//! - [`types`]: PokeAPI payload types and the projection
//! - [`mock`]: in-memory source for tests

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod source;
pub mod types;

pub use client::{PokeApiClient, decode_response, pokemon_url};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{FetchError, FetchErrorKind, Result};
pub use mock::{MockPokemonSource, pokemon_payload};
pub use source::PokemonSource;
pub use types::PokemonResponse;
