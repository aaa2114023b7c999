//! Turn-based battle simulation.
//!
//! A battle alternates single attacks between two entities, the first
//! argument always striking first, until one of them faints.
//!
//! # Damage Formula
//!
//! ```text
//! roll   = uniform [attack / 2, attack]   (truncating division)
//! damage = max(roll - defense, 1)
//! ```
//!
//! The floor of 1 guarantees termination: every attack lowers the defender's
//! health by at least one, so there is no round limit.

use core::fmt;

use crate::entity::Entity;
use crate::rng::RangeOracle;

/// Errors raised before a battle starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("{0} is not a valid contender")]
    UnknownContender(String),
}

/// Rejects pairs where either side is the `unknown` sentinel.
///
/// The simulator itself trusts its inputs; callers run this first.
pub fn ensure_contenders(a: &Entity, b: &Entity) -> Result<(), BattleError> {
    for entity in [a, b] {
        if entity.is_unknown() {
            return Err(BattleError::UnknownContender(entity.name().to_string()));
        }
    }
    Ok(())
}

/// A single narrated step of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Started {
        first: String,
        second: String,
    },
    Attack {
        attacker: String,
        defender: String,
        damage: u32,
        /// Defender health after the hit, floored at zero.
        remaining: i32,
    },
    Fainted {
        loser: String,
        winner: String,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Started { first, second } => {
                write!(f, "starting battle: {first} vs {second}")
            }
            BattleEvent::Attack {
                attacker,
                defender,
                damage,
                remaining,
            } => write!(
                f,
                "{attacker} attacks {defender} for {damage} damage. {defender} has {remaining} hp left."
            ),
            BattleEvent::Fainted { loser, winner } => {
                write!(f, "{loser} fainted. {winner} wins!")
            }
        }
    }
}

/// Ordered narration of one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    events: Vec<BattleEvent>,
}

impl BattleLog {
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Winner's name, or `None` when no one fainted (a side started at zero health).
    pub fn winner(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            BattleEvent::Fainted { winner, .. } => Some(winner.as_str()),
            _ => None,
        })
    }

    /// Number of attacks made.
    pub fn attacks(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, BattleEvent::Attack { .. }))
            .count()
    }

    fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}

impl IntoIterator for BattleLog {
    type Item = BattleEvent;
    type IntoIter = std::vec::IntoIter<BattleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Rolls the damage `attacker` deals to `defender`. Always at least 1.
pub fn roll_damage(attacker: &Entity, defender: &Entity, rng: &mut impl RangeOracle) -> u32 {
    let attack = attacker.attack();
    let roll = rng.next_in_range(attack / 2, attack);
    roll.saturating_sub(defender.defense()).max(1)
}

/// Runs a battle to completion, mutating both entities' health.
pub fn battle(a: &mut Entity, b: &mut Entity, rng: &mut impl RangeOracle) -> BattleLog {
    let mut log = BattleLog::default();
    log.push(BattleEvent::Started {
        first: a.name().to_string(),
        second: b.name().to_string(),
    });

    while !a.is_fainted() && !b.is_fainted() {
        if strike(a, b, rng, &mut log) {
            break;
        }
        if strike(b, a, rng, &mut log) {
            break;
        }
    }

    tracing::debug!(
        attacks = log.attacks(),
        winner = ?log.winner(),
        "battle finished"
    );
    log
}

/// One attack. Returns true when the defender fainted.
fn strike(
    attacker: &Entity,
    defender: &mut Entity,
    rng: &mut impl RangeOracle,
    log: &mut BattleLog,
) -> bool {
    let damage = roll_damage(attacker, defender, rng);
    defender.take_damage(damage);
    log.push(BattleEvent::Attack {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        damage,
        remaining: defender.display_health(),
    });

    if defender.is_fainted() {
        log.push(BattleEvent::Fainted {
            loser: defender.name().to_string(),
            winner: attacker.name().to_string(),
        });
        return true;
    }
    false
}
