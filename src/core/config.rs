//! Engine configuration with documented constants
//!
//! All tunable game-balance numbers are collected here with explanations
//! of their purpose. Engines receive a borrowed config explicitly; there
//! is no global instance, which keeps every engine testable in isolation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Configuration for the rule engines
///
/// Defaults reproduce the live game's balance. Changing them shifts
/// pacing: how fast practitioners level, how often they can mine, and
/// how expensive worlds are to develop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === CULTIVATION ===
    /// Minimum power gained per cultivate action
    pub cultivate_gain_min: u64,

    /// Maximum power gained per cultivate action
    ///
    /// The actual gain is drawn uniformly from [min, max].
    pub cultivate_gain_max: u64,

    /// Hard ceiling on spiritual power
    ///
    /// Gains saturate at this value rather than wrapping. This is an
    /// anti-overflow policy inherited from the persisted column width,
    /// not a balance rule, and must not be removed.
    pub spiritual_power_cap: u64,

    /// Cultivation points earned per unit of power gained (divisor)
    ///
    /// At 10, a gain of 87 power yields 8 points.
    pub cultivation_points_divisor: u64,

    // === MINING ===
    /// Seconds a practitioner must wait between mining actions
    ///
    /// Administrators bypass the cooldown entirely.
    pub mining_cooldown_secs: i64,

    /// Flat stone yield before the level component
    pub mining_base_yield: u64,

    /// Additional guaranteed yield per mining level
    pub mining_yield_per_level: u64,

    /// Upper bound of the random bonus, per mining level
    ///
    /// A level-4 miner rolls a bonus in [0, 40].
    pub mining_bonus_per_level: u64,

    /// Experience earned per successful mining action
    pub mining_experience_gain: u64,

    /// Experience required per level to advance (level * step)
    ///
    /// Experience resets to zero on level-up, so each level is a fresh
    /// climb that takes longer than the last.
    pub mining_level_up_step: u64,

    // === WORLDS ===
    /// Experience a world earns from every successful upgrade
    pub world_experience_per_upgrade: u64,

    /// Experience required per world level to advance (level * step)
    pub world_level_up_step: u64,

    /// Stability gained when a world levels up (capped at 100)
    pub world_level_up_stability_bonus: u32,

    /// Stability lost each time a special ability is invoked
    pub ability_stability_cost: u32,

    /// Floor on the stone cost of conquering an unowned world
    ///
    /// The real cost is max(floor, total_power / 2), so weak worlds
    /// still cost something.
    pub conquest_min_cost: u64,

    /// Spiritual power required to explore, per point of danger level
    pub exploration_energy_per_danger: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Cultivation
            cultivate_gain_min: 50,
            cultivate_gain_max: 200,
            spiritual_power_cap: 999_999_999,
            cultivation_points_divisor: 10,

            // Mining (2 hour cooldown)
            mining_cooldown_secs: 7200,
            mining_base_yield: 50,
            mining_yield_per_level: 25,
            mining_bonus_per_level: 10,
            mining_experience_gain: 10,
            mining_level_up_step: 100,

            // Worlds
            world_experience_per_upgrade: 100,
            world_level_up_step: 500,
            world_level_up_stability_bonus: 10,
            ability_stability_cost: 10,
            conquest_min_cost: 5000,
            exploration_energy_per_danger: 50,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file, falling back to defaults for
    /// any field the file omits
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&text).map_err(|e| EngineError::ConfigError(e.to_string()))?;
        config.validate().map_err(EngineError::ConfigError)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.cultivate_gain_min > self.cultivate_gain_max {
            return Err(format!(
                "cultivate_gain_min ({}) must be <= cultivate_gain_max ({})",
                self.cultivate_gain_min, self.cultivate_gain_max
            ));
        }

        if self.cultivate_gain_max > self.spiritual_power_cap {
            return Err("cultivate_gain_max must not exceed spiritual_power_cap".into());
        }

        if self.mining_cooldown_secs < 0 {
            return Err("mining_cooldown_secs must not be negative".into());
        }

        if self.cultivation_points_divisor == 0 {
            return Err("cultivation_points_divisor must be positive".into());
        }

        if self.mining_level_up_step == 0 || self.world_level_up_step == 0 {
            return Err("level-up steps must be positive".into());
        }

        Ok(())
    }
}
