use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// How rare a mission (or shop item) is. Drives the legendary counters.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What a mission counts. Each kind is advanced by a different game event.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RequirementKind {
    #[default]
    FavoriteCount,
    PurchaseCount,
    PetChangeCount,
    CollectionCount,
    TeamCount,
    LevelReached,
    GoldEarned,
    TypeCollectionCount,
    GenerationCollectionCount,
    LegendaryItemEquip,
}

impl RequirementKind {
    /// The stable key used by the remote store for this kind.
    pub fn key(&self) -> &'static str {
        self.into()
    }

    /// Kinds whose progress is an absolute reading (current level, total gold,
    /// team size) rather than a running count of events.
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            RequirementKind::LevelReached | RequirementKind::GoldEarned | RequirementKind::TeamCount
        )
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Immutable mission definition, seeded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    pub requirement_kind: RequirementKind,
    /// Threshold the progress counter has to reach. Zero or negative means the
    /// mission is complete from the start.
    pub requirement_value: i64,
    /// Narrows type/generation collection missions ("fire", "1"). None = any.
    #[serde(default)]
    pub requirement_filter: Option<String>,
    #[serde(default)]
    pub gold_reward: i64,
    #[serde(default)]
    pub xp_reward: i64,
}

/// Per-user progress record for one mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMission {
    pub mission_id: String,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reward_claimed: bool,
}

impl UserMission {
    /// A fresh record with no progress.
    pub fn new(mission_id: impl Into<String>) -> Self {
        Self {
            mission_id: mission_id.into(),
            progress: 0,
            completed: false,
            completed_at: None,
            reward_claimed: false,
        }
    }
}
