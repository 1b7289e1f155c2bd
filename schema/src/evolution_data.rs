// Shapes of the Pokémon data API evolution-chain payload.
// Field names follow the API verbatim so raw JSON deserializes directly.

use serde::{Deserialize, Serialize};

/// A `{name, url}` pair pointing at another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// Top level of `/evolution-chain/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChainResponse {
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of the chain tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub is_baby: bool,
    pub species: NamedApiResource,
    /// How this node is reached from its parent. Empty on the root.
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Trigger conditions for one transition. The API sends every field, mostly
/// as null, so everything here is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub item: Option<NamedApiResource>,
    #[serde(default)]
    pub held_item: Option<NamedApiResource>,
    #[serde(default)]
    pub known_move: Option<NamedApiResource>,
    /// "day", "night" or "" when unconstrained.
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub min_happiness: Option<u32>,
    #[serde(default)]
    pub trigger: Option<NamedApiResource>,
}
