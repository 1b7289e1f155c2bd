//! Error types for the progression rules.
//!
//! Each concern gets its own enum so callers can match on exactly the
//! conditions an operation can produce; `GameError` wraps them all.

use thiserror::Error;

/// Main error type for the Pokedex progression rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Team error: {0}")]
    Team(#[from] TeamError),
    #[error("Mission error: {0}")]
    Mission(#[from] MissionError),
    #[error("Shop error: {0}")]
    Shop(#[from] ShopError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from team roster operations. A failed operation leaves the team untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    /// Slot index outside 0..=5
    #[error("Invalid team slot: {0}")]
    InvalidSlot(usize),
    /// Slot already has an occupant; remove or replace it explicitly
    #[error("Team slot {0} is already occupied")]
    SlotOccupied(usize),
    /// All six slots are taken
    #[error("Team is full")]
    TeamFull,
    /// The species is already on the team
    #[error("Pokemon #{0} is already on the team")]
    DuplicatePokemon(u32),
    /// Nothing to remove
    #[error("Team slot {0} is empty")]
    SlotEmpty(usize),
}

/// Errors from claiming mission rewards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    #[error("Unknown mission: {0}")]
    UnknownMission(String),
    #[error("Mission {0} is not completed")]
    NotCompleted(String),
    #[error("Reward for mission {0} was already claimed")]
    AlreadyClaimed(String),
    /// The progress record belongs to a different mission
    #[error("Progress record for {record} does not belong to mission {mission}")]
    MissionMismatch { mission: String, record: String },
}

/// Errors from shop purchases and equipping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("Not enough gold: need {required}, have {available}")]
    InsufficientGold { required: i64, available: i64 },
    #[error("Item {0} is already owned")]
    AlreadyOwned(String),
    #[error("Item {0} is not owned")]
    NotOwned(String),
}

/// Errors loading the economy configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using TeamError
pub type TeamResult<T> = Result<T, TeamError>;

/// Type alias for Results using MissionError
pub type MissionResult<T> = Result<T, MissionError>;

/// Type alias for Results using ShopError
pub type ShopResult<T> = Result<T, ShopError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
