use crate::config::EconomyConfig;
use crate::errors::{ShopError, ShopResult};
use schema::UserProfile;

/// What happened to a profile's level after an XP award
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpSummary {
    pub previous_level: u32,
    pub new_level: u32,
    /// Gold paid out for every level gained
    pub gold_awarded: i64,
}

impl LevelUpSummary {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.previous_level
    }

    pub fn levels_gained(&self) -> u32 {
        self.new_level.saturating_sub(self.previous_level)
    }
}

/// Gold and XP bookkeeping. Pure arithmetic over the economy constants,
/// plus the few mutations a profile is allowed: earn, spend, gain XP.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: EconomyConfig,
}

impl Ledger {
    pub fn new(config: EconomyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    fn xp_per_level(&self) -> i64 {
        self.config.xp_per_level.max(1)
    }

    /// Level for a given XP total: max(1, xp / xp_per_level), floor division.
    /// Negative XP counts as 0.
    pub fn level_for_xp(&self, xp: i64) -> u32 {
        let steps = xp.max(0) / self.xp_per_level();
        u32::try_from(steps).unwrap_or(u32::MAX).max(1)
    }

    /// Gold paid for reaching `level`: the flat amount, plus the 5th-level
    /// bonus on multiples of 5, plus the 10th-level bonus on multiples of 10.
    /// Both bonuses stack on a level like 10 or 20.
    pub fn gold_reward_for_level(&self, level: u32) -> i64 {
        let level = level.max(1);
        let mut reward = self.config.gold_per_level;
        if level % 5 == 0 {
            reward += self.config.milestone_5_bonus;
        }
        if level % 10 == 0 {
            reward += self.config.milestone_10_bonus;
        }
        reward
    }

    /// Total gold for every level in `(from, to]`, summed in closed form.
    pub fn gold_for_levels(&self, from: u32, to: u32) -> i64 {
        if to <= from {
            return 0;
        }
        let multiples = |step: u32| i64::from(to / step - from / step);
        let levels = i64::from(to - from);

        levels
            .saturating_mul(self.config.gold_per_level)
            .saturating_add(multiples(5).saturating_mul(self.config.milestone_5_bonus))
            .saturating_add(multiples(10).saturating_mul(self.config.milestone_10_bonus))
    }

    /// Lowest XP total at which `level` is reached. Level 1 starts at 0.
    pub fn xp_for_level(&self, level: u32) -> i64 {
        if level <= 1 {
            0
        } else {
            i64::from(level).saturating_mul(self.xp_per_level())
        }
    }

    /// XP still missing before the next level
    pub fn xp_to_next_level(&self, xp: i64) -> i64 {
        let xp = xp.max(0);
        let next = self.level_for_xp(xp).saturating_add(1);
        (self.xp_for_level(next) - xp).max(0)
    }

    /// Fraction of the current level already covered, in [0, 1]
    pub fn level_progress(&self, xp: i64) -> f64 {
        let xp = xp.max(0);
        let level = self.level_for_xp(xp);
        let floor = self.xp_for_level(level);
        let ceiling = self.xp_for_level(level.saturating_add(1));
        let span = ceiling - floor;
        if span <= 0 {
            return 0.0;
        }
        ((xp - floor) as f64 / span as f64).clamp(0.0, 1.0)
    }

    /// Add XP to a profile, recompute its level and pay the gold for every
    /// level gained along the way.
    pub fn award_xp(&self, profile: &mut UserProfile, xp: i64) -> LevelUpSummary {
        let previous_level = profile.level.max(1);
        profile.xp = profile.xp.max(0).saturating_add(xp.max(0));

        let new_level = self.level_for_xp(profile.xp).max(previous_level);
        let gold_awarded = self.gold_for_levels(previous_level, new_level);

        profile.level = new_level;
        if gold_awarded > 0 {
            self.earn_gold(profile, gold_awarded);
        }
        if new_level > previous_level {
            tracing::info!(
                "{} reached level {} (+{} gold)",
                profile.username,
                new_level,
                gold_awarded
            );
        }

        LevelUpSummary {
            previous_level,
            new_level,
            gold_awarded,
        }
    }

    /// Credit gold to a profile. Negative amounts are ignored.
    /// Returns the amount actually credited.
    pub fn earn_gold(&self, profile: &mut UserProfile, amount: i64) -> i64 {
        let amount = amount.max(0);
        profile.gold = profile.gold.saturating_add(amount);
        profile.stats.gold_earned = profile.stats.gold_earned.saturating_add(amount);
        amount
    }

    /// Debit gold. Fails without touching the profile if the balance is short.
    pub fn spend_gold(&self, profile: &mut UserProfile, amount: i64) -> ShopResult<()> {
        let amount = amount.max(0);
        if profile.gold < amount {
            return Err(ShopError::InsufficientGold {
                required: amount,
                available: profile.gold,
            });
        }
        profile.gold -= amount;
        Ok(())
    }
}
