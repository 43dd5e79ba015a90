//! Conquering unowned worlds

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{EpochSeconds, PractitionerId};
use crate::progression::achievements::AchievementDraft;
use crate::world::state::WorldState;

/// Summary of a successful conquest
#[derive(Debug, Clone, PartialEq)]
pub struct Conquest {
    /// Stones the caller must deduct
    pub cost_stones: u64,
    /// Power the caller must deduct (battle attrition, a third of the
    /// world's power)
    pub power_spent: u64,
    pub achievement: AchievementDraft,
    pub conquered_at: EpochSeconds,
}

/// Take ownership of an unowned world
///
/// Costs max(config floor, total_power / 2) stones and requires the
/// world's full power score; a third of that power is spent in the
/// fighting. The conquered world gains 50 production but loses 20
/// stability (never dropping below 50).
pub fn conquer(
    config: &EngineConfig,
    world: &mut WorldState,
    actor: PractitionerId,
    stones_available: u64,
    power_available: u64,
    now: EpochSeconds,
) -> Result<Conquest> {
    if world.owner.is_some() {
        return Err(EngineError::WorldAlreadyOwned);
    }

    let world_power = world.total_power();
    let cost = config.conquest_min_cost.max(world_power / 2);

    if stones_available < cost {
        return Err(EngineError::InsufficientStones {
            required: cost,
            available: stones_available,
        });
    }
    if power_available < world_power {
        return Err(EngineError::InsufficientPower {
            required: world_power,
            available: power_available,
        });
    }

    world.owner = Some(actor);
    world.production += 50;
    world.stability = world.stability.saturating_sub(20).max(50);

    Ok(Conquest {
        cost_stones: cost,
        power_spent: world_power / 3,
        achievement: AchievementDraft::conquest(&world.name, world_power),
        conquered_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WorldId;
    use crate::progression::achievements::Rarity;

    fn world() -> WorldState {
        WorldState::new(WorldId::new(), "Hoang Vực", "Ma Cảnh")
    }

    #[test]
    fn test_conquer_transfers_ownership() {
        let config = EngineConfig::default();
        let mut w = world();
        let actor = PractitionerId::new();
        let power = w.total_power();

        let outcome = conquer(&config, &mut w, actor, 1_000_000, power, 42).unwrap();
        assert_eq!(w.owner, Some(actor));
        assert_eq!(outcome.power_spent, power / 3);
        assert!(outcome.cost_stones >= 5000);
        assert_eq!(w.stability, 80);
    }

    #[test]
    fn test_owned_world_cannot_be_conquered() {
        let config = EngineConfig::default();
        let mut w = world();
        w.owner = Some(PractitionerId::new());

        let err = conquer(&config, &mut w, PractitionerId::new(), u64::MAX, u64::MAX, 0)
            .unwrap_err();
        assert!(matches!(err, EngineError::WorldAlreadyOwned));
    }

    #[test]
    fn test_conquest_requires_full_world_power() {
        let config = EngineConfig::default();
        let mut w = world();
        let power = w.total_power();

        let err = conquer(&config, &mut w, PractitionerId::new(), u64::MAX, power - 1, 0)
            .unwrap_err();
        assert!(matches!(err, EngineError::InsufficientPower { .. }));
        assert!(w.owner.is_none());
    }

    #[test]
    fn test_weak_world_achievement_is_rare() {
        let config = EngineConfig::default();
        let mut w = world();
        // Default world power is well under the epic threshold
        assert!(w.total_power() <= 10_000);
        let outcome = conquer(&config, &mut w, PractitionerId::new(), u64::MAX, u64::MAX, 0)
            .unwrap();
        assert_eq!(outcome.achievement.rarity, Rarity::Rare);
    }

    #[test]
    fn test_low_stability_raised_to_floor() {
        let config = EngineConfig::default();
        let mut w = world();
        w.stability = 30;
        conquer(&config, &mut w, PractitionerId::new(), u64::MAX, u64::MAX, 0).unwrap();
        assert_eq!(w.stability, 50);
    }
}
