//! Harvesting an owned world's production

use rand::Rng;

use crate::core::error::{EngineError, Result};
use crate::core::types::PractitionerId;
use crate::world::state::WorldState;

/// Outcome of one harvest; special resources are already credited to
/// the world's stockpiles
#[derive(Debug, Clone, PartialEq)]
pub struct Harvest {
    pub stones_gained: u64,
    pub spiritual_herbs: u64,
    pub essence_crystals: u64,
    pub ancient_artifacts: u64,
    pub multiplier: f64,
}

/// Harvest an owned world
///
/// Base take is the daily income, or raw production when no income has
/// been established yet. Resource multiplication doubles it, time
/// acceleration adds half again, and each market level adds 10%.
/// Highly developed worlds also yield special resources. The world gains
/// 10 experience and logs one special event per harvest.
pub fn harvest<R: Rng>(
    world: &mut WorldState,
    actor: PractitionerId,
    rng: &mut R,
) -> Result<Harvest> {
    if world.owner != Some(actor) {
        return Err(EngineError::NotOwner);
    }

    let base = if world.daily_income > 0 {
        world.daily_income
    } else {
        world.production
    };

    let mut multiplier = 1.0;
    if world.resource_multiplication {
        multiplier *= 2.0;
    }
    if world.time_acceleration {
        multiplier *= 1.5;
    }
    if world.market_level > 0 {
        multiplier *= 1.0 + world.market_level as f64 * 0.1;
    }
    let stones = (base as f64 * multiplier) as u64;

    let mut outcome = Harvest {
        stones_gained: stones,
        spiritual_herbs: 0,
        essence_crystals: 0,
        ancient_artifacts: 0,
        multiplier,
    };

    if world.resource_richness >= 80 {
        outcome.spiritual_herbs = rng.gen_range(1..=(world.resource_richness as u64 / 20));
        world.spiritual_herbs += outcome.spiritual_herbs;
    }
    if world.spiritual_density >= 90 {
        outcome.essence_crystals = rng.gen_range(1..=(world.spiritual_density as u64 / 30));
        world.essence_crystals += outcome.essence_crystals;
    }
    if world.world_level >= 5 {
        outcome.ancient_artifacts = rng.gen_range(0..=(world.world_level as u64 / 5));
        world.ancient_artifacts += outcome.ancient_artifacts;
    }

    world.world_experience += 10;
    world.special_events += 1;

    Ok(outcome)
}
