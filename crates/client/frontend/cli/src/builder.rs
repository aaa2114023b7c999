//! App builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_pokeapi::PokemonSource;
use poke_core::{PcgRange, RangeOracle, ThreadRange};

use crate::app::App;
use crate::config::CliConfig;

/// Builder for constructing an [`App`].
///
/// - **Required**: the pokemon source
/// - **Optional**: configuration (defaults to [`CliConfig::default`]) and the
///   random source (defaults to a seeded [`PcgRange`] when
///   `config.battle.seed` is set, otherwise [`ThreadRange`])
#[derive(Default)]
pub struct AppBuilder {
    source: Option<Box<dyn PokemonSource>>,
    rng: Option<Box<dyn RangeOracle + Send>>,
    config: Option<CliConfig>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pokemon source (required).
    pub fn source(mut self, source: impl PokemonSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Override the random source used for damage rolls.
    pub fn rng(mut self, rng: impl RangeOracle + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn config(mut self, config: CliConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the App.
    ///
    /// # Errors
    ///
    /// Returns an error if no source was set.
    pub fn build(self) -> Result<App> {
        let source = self
            .source
            .context("Pokemon source is required. Use .source() to set it.")?;

        let config = self.config.unwrap_or_default();

        let rng: Box<dyn RangeOracle + Send> = match (self.rng, config.battle.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => {
                tracing::info!("Using seeded damage rolls: seed={}", seed);
                Box::new(PcgRange::new(seed))
            }
            (None, None) => Box::new(ThreadRange),
        };

        Ok(App {
            source,
            rng,
            config,
        })
    }
}
