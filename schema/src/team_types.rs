use serde::{Deserialize, Serialize};

/// Number of slots in a team roster.
pub const TEAM_SIZE: usize = 6;

/// One Pokémon placed in a team slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPokemon {
    /// National dex id of the species.
    pub pokemon_id: u32,
    pub name: String,
    #[serde(default)]
    pub sprite_url: String,
    /// Position in the roster, 0..=5.
    pub slot_index: usize,
}
