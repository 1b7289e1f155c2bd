use super::MissionEvaluator;
use crate::errors::{MissionError, MissionResult};
use crate::progression::{Ledger, LevelUpSummary};
use chrono::{DateTime, Utc};
use schema::{Mission, UserMission, UserProfile};

/// Where a user stands on one mission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionState {
    /// No progress record exists yet
    NotStarted,
    InProgress { progress: i64 },
    /// `completed_at` is None only for missions that were complete from the
    /// start (threshold of zero or less) and never had an event recorded
    Completed { completed_at: Option<DateTime<Utc>> },
}

impl MissionState {
    pub fn is_completed(&self) -> bool {
        matches!(self, MissionState::Completed { .. })
    }
}

/// Result of feeding one event into a progress record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    /// Nothing changed (already completed, or no effective delta)
    Unchanged,
    Advanced { progress: i64 },
    /// This event completed the mission
    Completed { completed_at: DateTime<Utc> },
}

/// What a claimed reward paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionReward {
    pub gold: i64,
    pub xp: i64,
    pub level_up: LevelUpSummary,
}

impl MissionEvaluator {
    /// Current state of `mission` for a user, given their record if any
    pub fn evaluate(&self, mission: &Mission, record: Option<&UserMission>) -> MissionState {
        let threshold = mission.requirement_value;
        let completed_at = record.and_then(|r| r.completed_at);

        if threshold <= 0 {
            return MissionState::Completed { completed_at };
        }

        match record {
            None => MissionState::NotStarted,
            Some(r) if r.completed || r.progress >= threshold => {
                MissionState::Completed { completed_at }
            }
            Some(r) => MissionState::InProgress {
                progress: r.progress,
            },
        }
    }

    /// Add `delta` to a counting mission. Progress is capped at the threshold,
    /// and once completed the record never changes again.
    pub fn record_progress(
        &self,
        mission: &Mission,
        record: &mut UserMission,
        delta: i64,
        now: DateTime<Utc>,
    ) -> ProgressOutcome {
        let target = record.progress.saturating_add(delta.max(0));
        self.advance_to(mission, record, target, now)
    }

    /// Raise an absolute-reading mission (level, total gold, team size) to
    /// `value`. Lower readings never reduce progress.
    pub fn record_value(
        &self,
        mission: &Mission,
        record: &mut UserMission,
        value: i64,
        now: DateTime<Utc>,
    ) -> ProgressOutcome {
        let target = record.progress.max(value);
        self.advance_to(mission, record, target, now)
    }

    fn advance_to(
        &self,
        mission: &Mission,
        record: &mut UserMission,
        target: i64,
        now: DateTime<Utc>,
    ) -> ProgressOutcome {
        if record.completed {
            return ProgressOutcome::Unchanged;
        }

        let threshold = mission.requirement_value;
        if threshold <= 0 {
            // Complete from the start; the first event only stamps it
            return self.complete(mission, record, now);
        }

        if record.progress >= threshold {
            // Stale row: the counter already covers the threshold
            record.progress = threshold;
            return self.complete(mission, record, now);
        }

        let progress = target.min(threshold);
        if progress <= record.progress {
            return ProgressOutcome::Unchanged;
        }

        record.progress = progress;
        if progress >= threshold {
            return self.complete(mission, record, now);
        }

        tracing::debug!(
            "Mission {} progress {}/{}",
            mission.id,
            progress,
            threshold
        );
        ProgressOutcome::Advanced { progress }
    }

    fn complete(
        &self,
        mission: &Mission,
        record: &mut UserMission,
        now: DateTime<Utc>,
    ) -> ProgressOutcome {
        record.completed = true;
        record.completed_at = Some(now);
        tracing::info!("Mission {} ({}) completed", mission.id, mission.title);
        ProgressOutcome::Completed { completed_at: now }
    }

    /// progress / threshold, clamped to [0, 1]. Missions with a threshold of
    /// zero or less report 0.0.
    pub fn completion_percentage(&self, mission: &Mission, record: Option<&UserMission>) -> f64 {
        let threshold = mission.requirement_value;
        if threshold <= 0 {
            return 0.0;
        }
        let progress = record.map(|r| r.progress).unwrap_or(0);
        (progress as f64 / threshold as f64).clamp(0.0, 1.0)
    }

    /// Pay out a completed mission's gold and XP, exactly once.
    pub fn claim_reward(
        &self,
        mission: &Mission,
        record: &mut UserMission,
        profile: &mut UserProfile,
        ledger: &Ledger,
        now: DateTime<Utc>,
    ) -> MissionResult<MissionReward> {
        if record.mission_id != mission.id {
            return Err(MissionError::MissionMismatch {
                mission: mission.id.clone(),
                record: record.mission_id.clone(),
            });
        }
        if !self.evaluate(mission, Some(record)).is_completed() {
            return Err(MissionError::NotCompleted(mission.id.clone()));
        }
        if record.reward_claimed {
            return Err(MissionError::AlreadyClaimed(mission.id.clone()));
        }

        if !record.completed {
            self.complete(mission, record, now);
        }
        record.reward_claimed = true;

        let gold = ledger.earn_gold(profile, mission.gold_reward);
        let level_up = ledger.award_xp(profile, mission.xp_reward);
        profile.stats.missions_completed += 1;

        Ok(MissionReward {
            gold,
            xp: mission.xp_reward.max(0),
            level_up,
        })
    }
}
