//! Special world abilities
//!
//! Abilities are unlocked by one-shot upgrades and can then be invoked
//! repeatedly; every invocation drains 10 world stability.

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::PractitionerId;
use crate::world::state::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    /// Burst of cultivation speed: +10% of the invoker's current power
    TimeAcceleration,
    /// Opens the gate for a trade windfall: world_level * 1000 stones
    DimensionalGate,
    /// Mass cultivation session; requires the auto-cultivation upgrade
    MassCultivation,
}

impl AbilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityKind::TimeAcceleration => "time_acceleration",
            AbilityKind::DimensionalGate => "dimensional_gate",
            AbilityKind::MassCultivation => "mass_cultivation",
        }
    }
}

/// Rewards from one ability invocation; all deltas for the caller to apply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivatedAbility {
    pub power_gained: u64,
    pub stones_gained: u64,
    pub points_gained: u64,
    pub new_stability: u32,
}

/// Invoke an unlocked special ability on an owned world
pub fn activate_ability(
    config: &EngineConfig,
    world: &mut WorldState,
    kind: AbilityKind,
    actor: PractitionerId,
    current_power: u64,
) -> Result<ActivatedAbility> {
    if world.owner != Some(actor) {
        return Err(EngineError::NotOwner);
    }

    let mut outcome = ActivatedAbility::default();
    match kind {
        AbilityKind::TimeAcceleration if world.time_acceleration => {
            outcome.power_gained = current_power / 10;
        }
        AbilityKind::DimensionalGate if world.dimensional_gate => {
            outcome.stones_gained = world.world_level as u64 * 1000;
        }
        AbilityKind::MassCultivation if world.auto_cultivation => {
            outcome.power_gained = (world.cultivation_bonus * 500.0) as u64;
            outcome.points_gained = world.enlightenment_spots as u64 * 100;
        }
        _ => return Err(EngineError::AbilityUnavailable(kind.as_str())),
    }

    world.stability = world.stability.saturating_sub(config.ability_stability_cost);
    outcome.new_stability = world.stability;
    Ok(outcome)
}
