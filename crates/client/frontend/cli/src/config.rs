//! CLI configuration.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub battle: BattleConfig,
    pub log: LogConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKE_SEARCH_PACE_MS` - Delay between narrated battle actions (default: 1000)
    /// - `POKE_SEARCH_SEED` - Seed for reproducible battles (default: unset, random)
    /// - `POKE_SEARCH_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("POKE_SEARCH_PACE_MS") {
            config.battle.pace = Duration::from_millis(ms);
        }
        if let Some(seed) = read_env::<u64>("POKE_SEARCH_SEED") {
            config.battle.seed = Some(seed);
        }
        if let Some(dir) = read_env::<PathBuf>("POKE_SEARCH_LOG_DIR") {
            config.log.dir = Some(dir);
        }

        config
    }

    /// Configuration with no narration delay, for tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            battle: BattleConfig {
                pace: Duration::ZERO,
                seed: None,
            },
            log: LogConfig::default(),
        }
    }
}

/// Battle narration settings.
#[derive(Clone, Debug)]
pub struct BattleConfig {
    /// Pause after each narrated action. Purely cosmetic.
    pub pace: Duration,
    /// When set, damage rolls come from a seeded PCG stream.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            pace: Duration::from_millis(1000),
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    /// Overrides the platform log directory.
    pub dir: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
