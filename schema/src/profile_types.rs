use serde::{Deserialize, Serialize};

/// Item ids equipped in each cosmetic slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedCosmetics {
    pub avatar: Option<String>,
    pub background: Option<String>,
    pub frame: Option<String>,
    pub title: Option<String>,
}

/// Lifetime counters. These never go down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub pokemon_caught: u64,
    pub favorites: u64,
    pub purchases: u64,
    pub pet_changes: u64,
    pub missions_completed: u64,
    pub gold_earned: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    pub gold: i64,
    pub xp: i64,
    /// Cached from `xp`; the ledger keeps it in sync.
    pub level: u32,
    #[serde(default)]
    pub equipped: EquippedCosmetics,
    #[serde(default)]
    pub stats: LifetimeStats,
}
