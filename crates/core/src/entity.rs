//! Normalized combat participant.
//!
//! An [`Entity`] is the flat projection of a creature record fetched from the
//! remote API. Lookup failures are represented by the sentinel returned from
//! [`Entity::unknown`], which must never enter a battle.

use core::fmt;

/// Name carried by the sentinel entity produced for failed lookups.
pub const UNKNOWN_NAME: &str = "unknown";

/// Normalized combat participant.
///
/// All fields except `health` are fixed after construction. `health` is
/// mutated by the battle simulator and may drop below zero internally; use
/// [`Entity::display_health`] for anything user-facing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    name: String,
    type_label: String,
    pub health: i32,
    attack: u32,
    defense: u32,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        type_label: impl Into<String>,
        health: i32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            health,
            attack,
            defense,
        }
    }

    /// Sentinel entity for a failed lookup: `unknown` with every stat zeroed.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_NAME, "", 0, 0, 0)
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_NAME
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comma-joined category tags, possibly empty.
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Health floored at zero.
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn is_fainted(&self) -> bool {
        self.health <= 0
    }

    /// Subtracts `amount` from health without overflowing.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub_unsigned(amount);
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - type: {} - hp: {}, attack: {}, defense: {}",
            self.name, self.type_label, self.health, self.attack, self.defense
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sentinel_has_zeroed_stats() {
        let entity = Entity::unknown();
        assert!(entity.is_unknown());
        assert_eq!(entity.type_label(), "");
        assert_eq!(entity.health, 0);
        assert_eq!(entity.attack(), 0);
        assert_eq!(entity.defense(), 0);
    }

    #[test]
    fn display_health_is_floored_at_zero() {
        let mut entity = Entity::new("pikachu", "electric", 3, 55, 40);
        entity.take_damage(10);
        assert_eq!(entity.health, -7);
        assert_eq!(entity.display_health(), 0);
        assert!(entity.is_fainted());
    }

    #[test]
    fn take_damage_saturates() {
        let mut entity = Entity::new("blissey", "normal", i32::MIN + 1, 10, 10);
        entity.take_damage(u32::MAX);
        assert_eq!(entity.health, i32::MIN);
    }

    #[test]
    fn summary_line_matches_search_output() {
        let entity = Entity::new("bulbasaur", "grass, poison", 45, 49, 49);
        assert_eq!(
            entity.to_string(),
            "bulbasaur - type: grass, poison - hp: 45, attack: 49, defense: 49"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_flat_fields() {
        let entity = Entity::new("eevee", "normal", 55, 55, 50);
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["name"], "eevee");
        assert_eq!(json["health"], 55);
    }
}
