//! Domain model and rules for poke-search.
//!
//! `poke-core` defines the normalized [`Entity`] that the fetcher produces,
//! the [`RangeOracle`] abstraction over random draws, and the battle
//! simulator that consumes both. Nothing here performs I/O; the pacing of
//! narration and all network access live in the client crates.
pub mod battle;
pub mod entity;
pub mod rng;

pub use battle::{BattleError, BattleEvent, BattleLog, battle, ensure_contenders, roll_damage};
pub use entity::{Entity, UNKNOWN_NAME};
pub use rng::{PcgRange, RangeOracle, ScriptedRange, ThreadRange};
