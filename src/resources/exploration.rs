//! Exploring an owned world for stones and rare materials

use rand::Rng;

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{EpochSeconds, PractitionerId};
use crate::world::state::WorldState;

/// Outcome of one exploration trip
#[derive(Debug, Clone, PartialEq)]
pub struct Exploration {
    /// Spiritual power the caller must deduct
    pub energy_cost: u64,
    pub stones_gained: u64,
    /// Rare materials found; already added to the world's stockpile
    pub rare_materials: u64,
}

/// Explore an owned world
///
/// Costs `danger_level * energy_per_danger` spiritual power. Stones come
/// out uniform in `[base, 2*base]` with `base = production / 10`. Rare
/// materials drop with probability `(richness + density) / 200` and go
/// straight into the world's stockpile, 1 to 3 at a time.
pub fn explore<R: Rng>(
    config: &EngineConfig,
    world: &mut WorldState,
    actor: PractitionerId,
    power_available: u64,
    now: EpochSeconds,
    rng: &mut R,
) -> Result<Exploration> {
    if world.owner != Some(actor) {
        return Err(EngineError::NotOwner);
    }

    let energy_cost = world.danger_level as u64 * config.exploration_energy_per_danger;
    if power_available < energy_cost {
        return Err(EngineError::InsufficientPower {
            required: energy_cost,
            available: power_available,
        });
    }

    let base = world.production / 10;
    let stones = rng.gen_range(base..=base * 2);

    let rare_chance =
        (world.resource_richness + world.spiritual_density) as f64 / 200.0;
    let rare_materials = if rng.gen_bool(rare_chance.min(1.0)) {
        rng.gen_range(1..=3u64)
    } else {
        0
    };
    world.rare_materials += rare_materials;
    world.last_explored = Some(now);

    Ok(Exploration {
        energy_cost,
        stones_gained: stones,
        rare_materials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WorldId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn owned_world(actor: PractitionerId) -> WorldState {
        let mut world = WorldState::new(WorldId::new(), "Vạn Thú Sơn", "Linh Giới");
        world.owner = Some(actor);
        world
    }

    #[test]
    fn test_non_owner_cannot_explore() {
        let config = EngineConfig::default();
        let mut world = owned_world(PractitionerId::new());
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err =
            explore(&config, &mut world, PractitionerId::new(), u64::MAX, 0, &mut rng)
                .unwrap_err();
        assert!(matches!(err, EngineError::NotOwner));
    }

    #[test]
    fn test_energy_cost_follows_danger() {
        let config = EngineConfig::default();
        let actor = PractitionerId::new();
        let mut world = owned_world(actor);
        world.danger_level = 7;
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = explore(&config, &mut world, actor, 349, 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientPower { required: 350, .. }
        ));

        let outcome = explore(&config, &mut world, actor, 350, 0, &mut rng).unwrap();
        assert_eq!(outcome.energy_cost, 350);
    }

    #[test]
    fn test_stone_reward_range() {
        let config = EngineConfig::default();
        let actor = PractitionerId::new();
        let mut world = owned_world(actor);
        world.production = 400;
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        for _ in 0..100 {
            let outcome = explore(&config, &mut world, actor, u64::MAX, 0, &mut rng).unwrap();
            assert!(outcome.stones_gained >= 40 && outcome.stones_gained <= 80);
        }
    }

    #[test]
    fn test_saturated_world_always_drops_rare_materials() {
        let config = EngineConfig::default();
        let actor = PractitionerId::new();
        let mut world = owned_world(actor);
        world.resource_richness = 100;
        world.spiritual_density = 100;
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let outcome = explore(&config, &mut world, actor, u64::MAX, 99, &mut rng).unwrap();
        assert!(outcome.rare_materials >= 1 && outcome.rare_materials <= 3);
        assert_eq!(world.rare_materials, outcome.rare_materials);
        assert_eq!(world.last_explored, Some(99));
    }
}
