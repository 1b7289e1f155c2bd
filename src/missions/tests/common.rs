use chrono::{DateTime, TimeZone, Utc};
use schema::{Mission, Rarity, RequirementKind, UserProfile};

/// Builder for mission definitions used across tests
pub struct TestMissionBuilder {
    mission: Mission,
}

impl TestMissionBuilder {
    pub fn new(id: &str, kind: RequirementKind, threshold: i64) -> Self {
        Self {
            mission: Mission {
                id: id.to_string(),
                title: format!("Mission {}", id),
                description: String::new(),
                rarity: Rarity::Common,
                requirement_kind: kind,
                requirement_value: threshold,
                requirement_filter: None,
                gold_reward: 0,
                xp_reward: 0,
            },
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.mission.rarity = rarity;
        self
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.mission.requirement_filter = Some(filter.to_string());
        self
    }

    pub fn with_rewards(mut self, gold: i64, xp: i64) -> Self {
        self.mission.gold_reward = gold;
        self.mission.xp_reward = xp;
        self
    }

    pub fn build(self) -> Mission {
        self.mission
    }
}

pub fn test_profile() -> UserProfile {
    UserProfile {
        user_id: "user-1".to_string(),
        username: "ash".to_string(),
        gold: 0,
        xp: 0,
        level: 1,
        equipped: Default::default(),
        stats: Default::default(),
    }
}

/// Fixed clock values so completion stamps can be compared
pub fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap()
}
