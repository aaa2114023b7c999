//! Terminal frontend for poke-search.
//!
//! Presents the numbered menu, reads names from the input stream, looks
//! them up through an injected [`client_pokeapi::PokemonSource`], and narrates
//! battles with a configurable pause between actions.
//!
//! The app is generic over async reader and writer, so tests drive it with
//! in-memory buffers instead of a terminal.

mod app;
mod builder;
mod config;
pub mod logging;
mod menu;

pub use app::{App, BANNER, BATTLE_REFUSED, INVALID_CHOICE, NOT_FOUND};
pub use builder::AppBuilder;
pub use config::{BattleConfig, CliConfig, LogConfig};
pub use menu::MenuChoice;
