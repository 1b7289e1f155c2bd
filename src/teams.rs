use crate::errors::{TeamError, TeamResult};
use schema::{TeamPokemon, TEAM_SIZE};
use serde::{Deserialize, Serialize};

/// A user's roster of up to six Pokémon, one per slot.
/// Serialized as a `TeamRecord`; deserializing goes through `from_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamRecord", into = "TeamRecord")]
pub struct Team {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    slots: [Option<TeamPokemon>; TEAM_SIZE],
}

/// Persisted shape of a team: header plus its entries in slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(default)]
    pub entries: Vec<TeamPokemon>,
}

impl TryFrom<TeamRecord> for Team {
    type Error = TeamError;

    fn try_from(record: TeamRecord) -> TeamResult<Self> {
        Team::from_entries(record.id, record.owner_id, record.name, record.entries)
    }
}

impl From<Team> for TeamRecord {
    fn from(team: Team) -> Self {
        TeamRecord {
            id: team.id.clone(),
            owner_id: team.owner_id.clone(),
            name: team.name.clone(),
            entries: team.into_entries(),
        }
    }
}

impl Team {
    /// Create an empty team
    pub fn new(id: String, owner_id: String, name: String) -> Self {
        Team {
            id,
            owner_id,
            name,
            slots: [const { None }; TEAM_SIZE],
        }
    }

    /// Rebuild a team from persisted entries, applying the same rules as
    /// `add_pokemon` to every row.
    pub fn from_entries(
        id: String,
        owner_id: String,
        name: String,
        entries: Vec<TeamPokemon>,
    ) -> TeamResult<Self> {
        let mut team = Team::new(id, owner_id, name);
        for entry in entries {
            let slot = entry.slot_index;
            team.add_pokemon(entry, slot)?;
        }
        Ok(team)
    }

    /// Place `pokemon` in `slot_index`. Never overwrites: an occupied slot has
    /// to be cleared (or replaced) explicitly.
    pub fn add_pokemon(&mut self, mut pokemon: TeamPokemon, slot_index: usize) -> TeamResult<()> {
        if self.is_full() {
            return Err(TeamError::TeamFull);
        }
        if slot_index >= TEAM_SIZE {
            return Err(TeamError::InvalidSlot(slot_index));
        }
        if self.slots[slot_index].is_some() {
            return Err(TeamError::SlotOccupied(slot_index));
        }
        if self.has_pokemon(pokemon.pokemon_id) {
            return Err(TeamError::DuplicatePokemon(pokemon.pokemon_id));
        }

        tracing::debug!(
            "Added {} (#{}) to team {} slot {}",
            pokemon.name,
            pokemon.pokemon_id,
            self.name,
            slot_index
        );
        pokemon.slot_index = slot_index;
        self.slots[slot_index] = Some(pokemon);
        Ok(())
    }

    /// Add to the lowest free slot. Returns the slot used.
    pub fn add_to_first_empty_slot(&mut self, pokemon: TeamPokemon) -> TeamResult<usize> {
        let slot = self.first_empty_slot().ok_or(TeamError::TeamFull)?;
        self.add_pokemon(pokemon, slot)?;
        Ok(slot)
    }

    /// Take the Pokémon out of `slot_index`
    pub fn remove_pokemon(&mut self, slot_index: usize) -> TeamResult<TeamPokemon> {
        if slot_index >= TEAM_SIZE {
            return Err(TeamError::InvalidSlot(slot_index));
        }
        self.slots[slot_index]
            .take()
            .ok_or(TeamError::SlotEmpty(slot_index))
    }

    /// Swap the occupant of `slot_index` for `pokemon`: remove, then add.
    /// Returns the previous occupant. If the add fails the old occupant is
    /// put back and the team is unchanged.
    pub fn replace_pokemon(
        &mut self,
        slot_index: usize,
        pokemon: TeamPokemon,
    ) -> TeamResult<TeamPokemon> {
        let previous = self.remove_pokemon(slot_index)?;
        if let Err(err) = self.add_pokemon(pokemon, slot_index) {
            self.slots[slot_index] = Some(previous);
            return Err(err);
        }
        Ok(previous)
    }

    /// Whether the species is already on the team
    pub fn has_pokemon(&self, pokemon_id: u32) -> bool {
        self.members().any(|p| p.pokemon_id == pokemon_id)
    }

    pub fn get(&self, slot_index: usize) -> Option<&TeamPokemon> {
        self.slots.get(slot_index).and_then(|slot| slot.as_ref())
    }

    /// Occupants in slot order
    pub fn members(&self) -> impl Iterator<Item = &TeamPokemon> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    pub fn len(&self) -> usize {
        self.members().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == TEAM_SIZE
    }

    pub fn empty_slots(&self) -> usize {
        TEAM_SIZE - self.len()
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Entries for persistence, in slot order
    pub fn into_entries(self) -> Vec<TeamPokemon> {
        self.slots.into_iter().flatten().collect()
    }
}
