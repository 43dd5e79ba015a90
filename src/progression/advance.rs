//! Stage advancement and the cultivate action

use rand::Rng;

use crate::core::config::EngineConfig;
use crate::progression::achievements::AchievementDraft;
use crate::stages::{StageName, StageTable, SubStage};

/// Outcome of checking a practitioner against the stage ladder
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    /// New stage to persist, or None when no transition occurred
    pub new_level: Option<StageName>,
    pub achievement: Option<AchievementDraft>,
}

impl Advance {
    fn none() -> Self {
        Self {
            new_level: None,
            achievement: None,
        }
    }
}

/// Advance a practitioner's stage if their power has outgrown it
///
/// Transitions one step at a time: the caller applies the new level and
/// may call again if power spans several stages. The terminal stage
/// (Tản Tiên Viên Mãn) never transitions and never errors. A stored or
/// computed stage missing from the table is logged and skipped rather
/// than crashing, which shields legacy free-text level strings.
pub fn advance(table: &StageTable, level: &StageName, power: u64) -> Advance {
    let Some(bounds) = table.get(level) else {
        tracing::warn!(stage = %level, "stored cultivation stage missing from table, skipping advance");
        return Advance::none();
    };

    if power < bounds.max_power {
        return Advance::none();
    }

    let Some(target) = level.successor() else {
        // Terminal stage: power past the top of the ladder is fine
        return Advance::none();
    };

    if table.get(&target).is_none() {
        tracing::warn!(stage = %target, "computed cultivation stage missing from table, skipping advance");
        return Advance::none();
    }

    let achievement = match level.sub {
        SubStage::Layer(9) => AchievementDraft::fulfilled(level.major),
        SubStage::Layer(_) => AchievementDraft::layer_advance(level, &target),
        SubStage::Fulfilled => AchievementDraft::breakthrough(level.major, target.major),
    };

    Advance {
        new_level: Some(target),
        achievement: Some(achievement),
    }
}

/// Outcome of a single cultivate action
#[derive(Debug, Clone, PartialEq)]
pub struct Cultivate {
    /// Power actually applied after the saturating clamp
    pub power_gained: u64,
    pub new_power: u64,
    pub points_gained: u64,
    pub new_level: Option<StageName>,
    pub achievement: Option<AchievementDraft>,
}

/// One cultivation session: roll a power gain, clamp, then check the ladder
///
/// The raw roll is uniform in [gain_min, gain_max]. The applied gain is
/// clamped so spiritual power never exceeds the configured cap; the add
/// saturates, it never wraps.
pub fn cultivate<R: Rng>(
    table: &StageTable,
    config: &EngineConfig,
    level: &StageName,
    power: u64,
    rng: &mut R,
) -> Cultivate {
    let roll = rng.gen_range(config.cultivate_gain_min..=config.cultivate_gain_max);
    let headroom = config.spiritual_power_cap.saturating_sub(power);
    let gain = roll.min(headroom);
    let new_power = power + gain;

    let outcome = advance(table, level, new_power);

    Cultivate {
        power_gained: gain,
        new_power,
        points_gained: gain / config.cultivation_points_divisor,
        new_level: outcome.new_level,
        achievement: outcome.achievement,
    }
}
