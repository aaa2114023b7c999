//! Interactive menu loop.
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use client_pokeapi::PokemonSource;
use poke_core::{BattleEvent, RangeOracle, battle, ensure_contenders};

use crate::builder::AppBuilder;
use crate::config::CliConfig;
use crate::menu::MenuChoice;

pub const BANNER: &str = "poke-search";
pub const NOT_FOUND: &str = "pokemon not found";
pub const BATTLE_REFUSED: &str = "one or both pokemon not found";
pub const INVALID_CHOICE: &str = "invalid choice";

/// Whether the menu loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Terminal application: reads menu choices and names, prints results.
///
/// The app owns its pokemon source and random source; both are injected
/// through [`AppBuilder`].
pub struct App {
    pub(crate) source: Box<dyn PokemonSource>,
    pub(crate) rng: Box<dyn RangeOracle + Send>,
    pub(crate) config: CliConfig,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Run against the process stdin/stdout until the user exits.
    pub async fn run_stdio(&mut self) -> Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        self.run(stdin, tokio::io::stdout()).await
    }

    /// Run the menu loop until `3` or end of input.
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned. Lookup failures and refused
    /// battles are reported to the user and the loop continues.
    pub async fn run<R, W>(&mut self, input: R, output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut console = Console::new(input, output);
        console.say(BANNER).await?;

        loop {
            console.say("").await?;
            for line in MenuChoice::lines() {
                console.say(&line).await?;
            }

            let Some(line) = console.prompt("choose: ").await? else {
                tracing::debug!("Input closed, leaving menu");
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Search) => self.search(&mut console).await?,
                Some(MenuChoice::Battle) => self.battle(&mut console).await?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    console.say(INVALID_CHOICE).await?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    async fn search<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(name) = console.prompt("pokemon name: ").await? else {
            return Ok(Flow::Exit);
        };

        let entity = self.source.lookup(&name).await;
        if entity.is_unknown() {
            console.say(NOT_FOUND).await?;
        } else {
            tracing::info!(name = entity.name(), "Search hit");
            console.say(&entity.to_string()).await?;
        }

        Ok(Flow::Continue)
    }

    async fn battle<R, W>(&mut self, console: &mut Console<R, W>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let Some(first_name) = console.prompt("pokemon 1 name: ").await? else {
            return Ok(Flow::Exit);
        };
        let mut first = self.source.lookup(&first_name).await;

        let Some(second_name) = console.prompt("pokemon 2 name: ").await? else {
            return Ok(Flow::Exit);
        };
        let mut second = self.source.lookup(&second_name).await;

        if let Err(e) = ensure_contenders(&first, &second) {
            tracing::info!("Battle refused: {}", e);
            console.say(BATTLE_REFUSED).await?;
            return Ok(Flow::Continue);
        }

        tracing::info!("Battle: {} vs {}", first.name(), second.name());
        let log = battle(&mut first, &mut second, &mut self.rng);

        let pace = self.config.battle.pace;
        for event in log {
            match event {
                BattleEvent::Started { .. } | BattleEvent::Fainted { .. } => {
                    console.say("").await?;
                }
                BattleEvent::Attack { .. } => {}
            }
            console.say(&event.to_string()).await?;

            if !matches!(event, BattleEvent::Fainted { .. }) && !pace.is_zero() {
                tokio::time::sleep(pace).await;
            }
        }

        Ok(Flow::Continue)
    }
}

/// Line-oriented reader/writer pair.
struct Console<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }

    /// Write a full line.
    async fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(format!("{text}\n").as_bytes())
            .await
            .context("Failed to write to output")?;
        self.output.flush().await.context("Failed to flush output")
    }

    /// Show `text` without a newline and read the answer. `None` at end of input.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context("Failed to write prompt")?;
        self.output.flush().await.context("Failed to flush output")?;

        let line = self
            .lines
            .next_line()
            .await
            .context("Failed to read input")?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }
}
