use super::MissionEvaluator;
use schema::{Mission, Rarity, UserMission};

/// Summary of one user's missions. Recomputed from scratch on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MissionStats {
    pub completed: usize,
    pub remaining: usize,
    pub total: usize,
    /// completed / total in [0, 1]; 0 when there are no missions
    pub completion_percentage: f64,
    pub legendary_completed: usize,
}

impl MissionEvaluator {
    /// Reduce (mission, record) pairs into `MissionStats`
    pub fn stats<'a, I>(&self, pairs: I) -> MissionStats
    where
        I: IntoIterator<Item = (&'a Mission, Option<&'a UserMission>)>,
    {
        let mut stats = MissionStats::default();

        for (mission, record) in pairs {
            stats.total += 1;
            if self.evaluate(mission, record).is_completed() {
                stats.completed += 1;
                if mission.rarity == Rarity::Legendary {
                    stats.legendary_completed += 1;
                }
            }
        }

        stats.remaining = stats.total - stats.completed;
        if stats.total > 0 {
            stats.completion_percentage = stats.completed as f64 / stats.total as f64;
        }
        stats
    }
}
