pub mod events;
pub mod progress;
pub mod requirement;
pub mod stats;

#[cfg(test)]
mod tests;

pub use events::{GameEvent, MissionTracker};
pub use progress::{MissionReward, MissionState, ProgressOutcome};
pub use requirement::{parse_rarity, parse_requirement_kind};
pub use stats::MissionStats;

/// Rules for mission progress, completion and rewards. Stateless; every
/// method works on records the caller owns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionEvaluator;
