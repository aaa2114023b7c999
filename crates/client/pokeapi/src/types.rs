//! PokeAPI payload types.
//!
//! Only the fields the projection needs are modelled. Every field is
//! optional with `#[serde(default)]`, so a payload that drops or nulls a
//! field still decodes and the affected Entity field falls back to zero or
//! empty. Unknown fields are ignored.

use poke_core::Entity;
use serde::{Deserialize, Serialize};

/// Stat names projected into [`Entity`].
pub const HP_STAT: &str = "hp";
pub const ATTACK_STAT: &str = "attack";
pub const DEFENSE_STAT: &str = "defense";

/// Response body of `GET pokemon/{name}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PokemonResponse {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub types: Option<Vec<TypeSlot>>,

    #[serde(default)]
    pub stats: Option<Vec<StatEntry>>,
}

/// `{ "type": { "name": ... } }` wrapper in the `types` list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TypeSlot {
    #[serde(default, rename = "type")]
    pub kind: Option<NamedResource>,
}

/// `{ "base_stat": n, "stat": { "name": ... } }` entry in the `stats` list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatEntry {
    #[serde(default)]
    pub base_stat: u32,

    #[serde(default)]
    pub stat: Option<NamedResource>,
}

/// Named API resource reference. The `url` sibling is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedResource {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PokemonResponse {
    /// Type names in payload order, joined by `", "`.
    pub fn type_label(&self) -> String {
        self.types
            .iter()
            .flatten()
            .filter_map(|slot| slot.kind.as_ref().and_then(NamedResource::name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Base value of the first stat called `name`, or 0.
    pub fn base_stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .flatten()
            .find(|entry| entry.stat.as_ref().and_then(NamedResource::name) == Some(name))
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }

    /// Projects the nested payload into a flat [`Entity`].
    ///
    /// `requested` is used as the name only when the payload has none.
    pub fn into_entity(self, requested: &str) -> Entity {
        let type_label = self.type_label();
        let health = i32::try_from(self.base_stat(HP_STAT)).unwrap_or(i32::MAX);
        let attack = self.base_stat(ATTACK_STAT);
        let defense = self.base_stat(DEFENSE_STAT);
        let name = self.name.unwrap_or_else(|| requested.to_lowercase());

        Entity::new(name, type_label, health, attack, defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> PokemonResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn projects_types_in_payload_order() {
        let payload = decode(
            r#"{"name":"bulbasaur","types":[
                {"slot":1,"type":{"name":"grass","url":"x"}},
                {"slot":2,"type":{"name":"poison","url":"y"}}
            ]}"#,
        );
        assert_eq!(payload.type_label(), "grass, poison");
    }

    #[test]
    fn missing_or_empty_types_give_empty_label() {
        assert_eq!(decode(r#"{"name":"x"}"#).type_label(), "");
        assert_eq!(decode(r#"{"name":"x","types":[]}"#).type_label(), "");
        assert_eq!(decode(r#"{"name":"x","types":null}"#).type_label(), "");
        assert_eq!(
            decode(r#"{"name":"x","types":[{"type":null},{"type":{"name":"ice"}}]}"#).type_label(),
            "ice"
        );
    }

    #[test]
    fn missing_hp_yields_zero_health() {
        let entity = decode(
            r#"{"name":"ditto","stats":[
                {"base_stat":48,"stat":{"name":"attack"}},
                {"base_stat":48,"stat":{"name":"defense"}}
            ]}"#,
        )
        .into_entity("ditto");
        assert_eq!(entity.health, 0);
        assert_eq!(entity.attack(), 48);
        assert_eq!(entity.defense(), 48);
    }

    #[test]
    fn first_matching_stat_wins() {
        let payload = decode(
            r#"{"stats":[
                {"base_stat":10,"stat":{"name":"hp"}},
                {"base_stat":99,"stat":{"name":"hp"}}
            ]}"#,
        );
        assert_eq!(payload.base_stat(HP_STAT), 10);
        assert_eq!(payload.base_stat("speed"), 0);
    }

    #[test]
    fn falls_back_to_requested_name() {
        let entity = decode("{}").into_entity("MewTwo");
        assert_eq!(entity.name(), "mewtwo");
        assert!(!entity.is_unknown());
    }
}
