//! Profile-level bookkeeping for the everyday actions: catching, favoriting,
//! switching pets. Each returns the mission events it produced so callers can
//! hand them to a `MissionTracker`.

use crate::missions::GameEvent;
use crate::progression::{Ledger, LevelUpSummary};
use schema::UserProfile;

/// A fresh level-1 profile with no gold
pub fn new_profile(user_id: &str, username: &str) -> UserProfile {
    UserProfile {
        user_id: user_id.to_string(),
        username: username.to_string(),
        gold: 0,
        xp: 0,
        level: 1,
        equipped: Default::default(),
        stats: Default::default(),
    }
}

/// Details of a caught Pokémon that missions care about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPokemon {
    pub pokemon_id: u32,
    pub types: Vec<String>,
    pub generation: u8,
}

/// Outcome of catching a Pokémon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchResult {
    pub gold_earned: i64,
    pub level_up: LevelUpSummary,
    pub events: Vec<GameEvent>,
}

/// Pay the catch reward and bump the collection counter
pub fn record_catch(profile: &mut UserProfile, ledger: &Ledger, caught: CaughtPokemon) -> CatchResult {
    profile.stats.pokemon_caught += 1;

    let gold_earned = ledger.earn_gold(profile, ledger.config().catch_gold);
    let level_up = ledger.award_xp(profile, ledger.config().catch_xp);

    let mut events = vec![GameEvent::PokemonCaught {
        pokemon_id: caught.pokemon_id,
        types: caught.types,
        generation: caught.generation,
    }];
    events.extend(economy_events(profile, &level_up));

    CatchResult {
        gold_earned: gold_earned + level_up.gold_awarded,
        level_up,
        events,
    }
}

pub fn record_favorite(profile: &mut UserProfile, pokemon_id: u32) -> Vec<GameEvent> {
    profile.stats.favorites += 1;
    vec![GameEvent::FavoriteAdded { pokemon_id }]
}

pub fn record_pet_change(profile: &mut UserProfile, pokemon_id: u32) -> Vec<GameEvent> {
    profile.stats.pet_changes += 1;
    vec![GameEvent::PetChanged { pokemon_id }]
}

/// Level and gold readings after a change, for absolute-reading missions
pub fn economy_events(profile: &UserProfile, level_up: &LevelUpSummary) -> Vec<GameEvent> {
    let mut events = Vec::with_capacity(2);
    if level_up.leveled_up() {
        events.push(GameEvent::LevelReached {
            level: level_up.new_level,
        });
    }
    events.push(GameEvent::GoldEarned {
        total: profile.stats.gold_earned,
    });
    events
}
