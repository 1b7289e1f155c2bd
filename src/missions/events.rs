use super::progress::{MissionReward, MissionState, ProgressOutcome};
use super::stats::MissionStats;
use super::MissionEvaluator;
use crate::errors::{MissionError, MissionResult};
use crate::progression::Ledger;
use chrono::{DateTime, Utc};
use schema::{Mission, RequirementKind, UserMission, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Things a player does that can move mission progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PokemonCaught {
        pokemon_id: u32,
        /// Lowercase type names, e.g. ["grass", "poison"]
        types: Vec<String>,
        generation: u8,
    },
    FavoriteAdded { pokemon_id: u32 },
    ItemPurchased { item_id: String },
    PetChanged { pokemon_id: u32 },
    /// A Pokémon joined the team; `team_size` is the roster size afterwards
    TeamMemberAdded { pokemon_id: u32, team_size: usize },
    LevelReached { level: u32 },
    /// Lifetime gold earned after the change
    GoldEarned { total: i64 },
    LegendaryItemEquipped { item_id: String },
}

/// How an event moves a mission of a given kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    By(i64),
    To(i64),
}

fn advance_for(mission: &Mission, event: &GameEvent) -> Option<Advance> {
    use GameEvent::*;
    use RequirementKind as Kind;

    let filter = mission.requirement_filter.as_deref().map(str::trim);

    match (mission.requirement_kind, event) {
        (Kind::FavoriteCount, FavoriteAdded { .. }) => Some(Advance::By(1)),
        (Kind::PurchaseCount, ItemPurchased { .. }) => Some(Advance::By(1)),
        (Kind::PetChangeCount, PetChanged { .. }) => Some(Advance::By(1)),
        (Kind::CollectionCount, PokemonCaught { .. }) => Some(Advance::By(1)),
        (Kind::TeamCount, TeamMemberAdded { team_size, .. }) => {
            Some(Advance::To(*team_size as i64))
        }
        (Kind::LevelReached, LevelReached { level }) => Some(Advance::To(i64::from(*level))),
        (Kind::GoldEarned, GoldEarned { total }) => Some(Advance::To(*total)),
        (Kind::TypeCollectionCount, PokemonCaught { types, .. }) => match filter {
            None | Some("") => Some(Advance::By(1)),
            Some(wanted) => types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(wanted))
                .then_some(Advance::By(1)),
        },
        (Kind::GenerationCollectionCount, PokemonCaught { generation, .. }) => match filter {
            None | Some("") => Some(Advance::By(1)),
            Some(wanted) => match wanted.parse::<u8>() {
                Ok(wanted) => (wanted == *generation).then_some(Advance::By(1)),
                Err(_) => {
                    tracing::warn!(
                        "Mission {} has unreadable generation filter '{}'",
                        mission.id,
                        wanted
                    );
                    None
                }
            },
        },
        (Kind::LegendaryItemEquip, LegendaryItemEquipped { .. }) => Some(Advance::By(1)),
        _ => None,
    }
}

/// One user's missions and progress records, kept together so events can be
/// routed to every mission they affect.
#[derive(Debug, Clone, Default)]
pub struct MissionTracker {
    evaluator: MissionEvaluator,
    missions: Vec<Mission>,
    records: BTreeMap<String, UserMission>,
}

impl MissionTracker {
    /// Records whose mission is not in `missions` are dropped.
    pub fn new(missions: Vec<Mission>, records: Vec<UserMission>) -> Self {
        let mut by_id = BTreeMap::new();
        for record in records {
            if missions.iter().any(|m| m.id == record.mission_id) {
                by_id.insert(record.mission_id.clone(), record);
            } else {
                tracing::warn!("Dropping progress for unknown mission {}", record.mission_id);
            }
        }

        Self {
            evaluator: MissionEvaluator,
            missions,
            records: by_id,
        }
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn record(&self, mission_id: &str) -> Option<&UserMission> {
        self.records.get(mission_id)
    }

    pub fn mission(&self, mission_id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == mission_id)
    }

    pub fn state(&self, mission_id: &str) -> Option<MissionState> {
        let mission = self.mission(mission_id)?;
        Some(self.evaluator.evaluate(mission, self.record(mission_id)))
    }

    pub fn completion_percentage(&self, mission_id: &str) -> Option<f64> {
        let mission = self.mission(mission_id)?;
        Some(
            self.evaluator
                .completion_percentage(mission, self.record(mission_id)),
        )
    }

    /// Feed one event to every mission it affects. Returns the ids of the
    /// missions this event completed.
    pub fn apply(&mut self, event: &GameEvent, now: DateTime<Utc>) -> Vec<String> {
        let mut completed = Vec::new();

        for mission in &self.missions {
            let Some(advance) = advance_for(mission, event) else {
                continue;
            };

            let record = self
                .records
                .entry(mission.id.clone())
                .or_insert_with(|| UserMission::new(mission.id.clone()));

            let outcome = match advance {
                Advance::By(delta) => self.evaluator.record_progress(mission, record, delta, now),
                Advance::To(value) => self.evaluator.record_value(mission, record, value, now),
            };

            if let ProgressOutcome::Completed { .. } = outcome {
                completed.push(mission.id.clone());
            }
        }

        completed
    }

    /// Claim the reward for a completed mission
    pub fn claim(
        &mut self,
        mission_id: &str,
        profile: &mut UserProfile,
        ledger: &Ledger,
        now: DateTime<Utc>,
    ) -> MissionResult<MissionReward> {
        let mission = self
            .missions
            .iter()
            .find(|m| m.id == mission_id)
            .ok_or_else(|| MissionError::UnknownMission(mission_id.to_string()))?;

        let record = self
            .records
            .entry(mission.id.clone())
            .or_insert_with(|| UserMission::new(mission.id.clone()));

        self.evaluator
            .claim_reward(mission, record, profile, ledger, now)
    }

    pub fn stats(&self) -> MissionStats {
        self.evaluator.stats(
            self.missions
                .iter()
                .map(|m| (m, self.records.get(&m.id))),
        )
    }

    /// Hand the records back for persistence, in mission id order
    pub fn into_records(self) -> Vec<UserMission> {
        self.records.into_values().collect()
    }
}
