//! Economy constants, loadable from a RON file.
//!
//! ```ron
//! (
//!     xp_per_level: 100,
//!     gold_per_level: 50,
//! )
//! ```
//!
//! Any field left out keeps its default.

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_XP_PER_LEVEL: i64 = 100;
const DEFAULT_GOLD_PER_LEVEL: i64 = 50;
const DEFAULT_MILESTONE_5_BONUS: i64 = 100;
const DEFAULT_MILESTONE_10_BONUS: i64 = 250;
const DEFAULT_CATCH_XP: i64 = 10;
const DEFAULT_CATCH_GOLD: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// XP per level step; level = max(1, xp / xp_per_level)
    pub xp_per_level: i64,
    /// Flat gold paid for reaching any level
    pub gold_per_level: i64,
    /// Extra gold on every 5th level
    pub milestone_5_bonus: i64,
    /// Extra gold on every 10th level, stacked on top of the 5th-level bonus
    pub milestone_10_bonus: i64,
    /// XP for catching a Pokémon
    pub catch_xp: i64,
    /// Gold for catching a Pokémon
    pub catch_gold: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            xp_per_level: DEFAULT_XP_PER_LEVEL,
            gold_per_level: DEFAULT_GOLD_PER_LEVEL,
            milestone_5_bonus: DEFAULT_MILESTONE_5_BONUS,
            milestone_10_bonus: DEFAULT_MILESTONE_10_BONUS,
            catch_xp: DEFAULT_CATCH_XP,
            catch_gold: DEFAULT_CATCH_GOLD,
        }
    }
}

impl EconomyConfig {
    /// Parse a config from RON text
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        let config: EconomyConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a RON file on disk
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&text)?;
        tracing::info!("Loaded economy config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.xp_per_level <= 0 {
            return Err(ConfigError::Invalid(format!(
                "xp_per_level must be positive, got {}",
                self.xp_per_level
            )));
        }
        let negative = [
            ("gold_per_level", self.gold_per_level),
            ("milestone_5_bonus", self.milestone_5_bonus),
            ("milestone_10_bonus", self.milestone_10_bonus),
            ("catch_xp", self.catch_xp),
            ("catch_gold", self.catch_gold),
        ]
        .into_iter()
        .find(|(_, value)| *value < 0);

        match negative {
            Some((field, value)) => Err(ConfigError::Invalid(format!(
                "{} must not be negative, got {}",
                field, value
            ))),
            None => Ok(()),
        }
    }
}
