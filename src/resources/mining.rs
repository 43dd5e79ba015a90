//! Time-gated spirit stone mining

use rand::Rng;

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::EpochSeconds;

/// Outcome of one mining trip
#[derive(Debug, Clone, PartialEq)]
pub struct Mining {
    pub stones_mined: u64,
    pub experience_gained: u64,
    /// Experience after the trip; zero when a level-up reset it
    pub new_experience: u64,
    pub new_level: u32,
    pub leveled_up: bool,
    /// Cooldown anchor the caller must persist
    pub mined_at: EpochSeconds,
}

/// Mine spirit stones once, respecting the cooldown
///
/// Yield is `base + level * per_level` plus a uniform bonus in
/// `[0, level * bonus_per_level]`. Each trip grants fixed experience;
/// reaching `level * level_up_step` raises the level and resets the
/// experience to zero. Exempt callers skip the cooldown check but still
/// refresh the anchor.
pub fn mine<R: Rng>(
    config: &EngineConfig,
    now: EpochSeconds,
    last_mining: Option<EpochSeconds>,
    mining_level: u32,
    mining_experience: u64,
    is_exempt: bool,
    rng: &mut R,
) -> Result<Mining> {
    if !is_exempt {
        if let Some(last) = last_mining {
            let elapsed = now - last;
            if elapsed < config.mining_cooldown_secs {
                return Err(EngineError::MiningCooldown {
                    remaining_seconds: config.mining_cooldown_secs - elapsed,
                });
            }
        }
    }

    let level = mining_level as u64;
    let bonus = rng.gen_range(0..=level * config.mining_bonus_per_level);
    let stones = config.mining_base_yield + level * config.mining_yield_per_level + bonus;

    let mut new_level = mining_level;
    let mut new_experience = mining_experience + config.mining_experience_gain;
    let threshold = level * config.mining_level_up_step;
    let leveled_up = new_experience >= threshold;
    if leveled_up {
        new_level += 1;
        new_experience = 0;
    }

    Ok(Mining {
        stones_mined: stones,
        experience_gained: config.mining_experience_gain,
        new_experience,
        new_level,
        leveled_up,
        mined_at: now,
    })
}
