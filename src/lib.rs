// In: src/lib.rs

//! Pokedex Progress Rules
//!
//! The game-economy core of a Pokédex collection game: XP and gold
//! bookkeeping, mission progress, team rosters, the cosmetic shop, and
//! evolution chains as served by the public Pokémon data API. Everything here
//! is synchronous and works on records the caller owns; fetching and
//! persisting those records is the caller's business.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod missions;
pub mod profile;
pub mod progression;
pub mod shop;
pub mod teams;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Plain records shared with the persistence layer.
pub use schema::{
    ChainLink,
    EquippedCosmetics,
    EvolutionChainResponse,
    EvolutionDetail,
    ItemCategory,
    LifetimeStats,
    // Missions
    Mission,
    NamedApiResource,
    Rarity,
    RequirementKind,
    ShopItem,
    TeamPokemon,
    UserMission,
    // Profiles
    UserProfile,
    TEAM_SIZE,
};

// --- From this crate's modules (`src/`) ---

pub use config::EconomyConfig;
pub use missions::{
    GameEvent, MissionEvaluator, MissionReward, MissionState, MissionStats, MissionTracker,
    ProgressOutcome,
};
pub use profile::{new_profile, record_catch, CaughtPokemon};
pub use progression::{EvolutionStep, Ledger, LevelUpSummary};
pub use shop::{Inventory, ThemeColor};
pub use teams::Team;

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, GameError, GameResult, MissionError, MissionResult, ShopError,
    ShopResult, TeamError, TeamResult,
};
