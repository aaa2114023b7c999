//! poke-search binary.
//!
//! Composition root: loads configuration, installs logging, builds the one
//! long-lived PokeAPI client, and hands it to the terminal frontend.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p poke-search
//!
//! # Reproducible battles, no narration delay
//! POKE_SEARCH_SEED=7 POKE_SEARCH_PACE_MS=0 cargo run -p poke-search
//! ```

use anyhow::Result;
use client_frontend_cli::{App, CliConfig, logging};
use client_pokeapi::{ApiConfig, PokeApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let api_config = ApiConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&cli_config.log)?;

    tracing::info!("Starting poke-search");
    tracing::info!("PokeAPI endpoint: {}", api_config.base_url);
    tracing::info!("Battle pace: {:?}", cli_config.battle.pace);

    // 3. Build the fetcher once for the process lifetime
    let client = PokeApiClient::new(api_config);

    // 4. Build and run the frontend
    let mut app = App::builder().source(client).config(cli_config).build()?;
    app.run_stdio().await?;

    tracing::info!("poke-search shutdown complete");
    Ok(())
}
