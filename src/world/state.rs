//! World snapshot
//!
//! Percentage-like attributes live in [0, 100]; the capped helpers below
//! are the only mutation paths the upgrade effects use for them. One-shot
//! ability flags only ever flip false to true.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::types::{EpochSeconds, PractitionerId, WorldId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub id: WorldId,
    pub name: String,
    /// Flavor classification: Linh Giới, Ma Cảnh, Thiên Giới, ...
    pub world_type: String,
    pub owner: Option<PractitionerId>,

    // Environment (0-100 unless noted)
    pub spiritual_density: u32,
    pub resource_richness: u32,
    pub stability: u32,
    pub barrier_strength: u32,
    /// 1-10
    pub danger_level: u32,

    // Development
    pub guardian_level: u32,
    pub market_level: u32,
    pub infrastructure_level: u32,
    /// 0-10
    pub development_level: u32,
    /// 0-10
    pub climate_control: u32,
    /// 0-10
    pub ecosystem_diversity: u32,
    pub enlightenment_spots: u32,

    // Cultivation environment
    /// Multiplier on cultivation in this world, capped at 3.0
    pub cultivation_bonus: f64,
    /// Chance bonus for breakthroughs, capped at 0.5
    pub breakthrough_chance: f64,
    pub time_flow_rate: f64,

    // Economy
    /// Spiritual stones produced per day
    pub production: u64,
    pub daily_income: u64,
    pub population_limit: u64,
    pub trade_routes: u32,
    pub successful_defenses: u32,

    // One-shot special abilities
    pub dimensional_gate: bool,
    pub time_acceleration: bool,
    pub auto_cultivation: bool,
    pub resource_multiplication: bool,

    // Special resource stockpiles
    pub spiritual_herbs: u64,
    pub essence_crystals: u64,
    pub ancient_artifacts: u64,
    pub rare_materials: u64,

    // Progression bookkeeping
    pub world_level: u32,
    pub world_experience: u64,
    pub total_upgrades: u32,
    pub special_events: u32,
    pub last_upgraded: Option<EpochSeconds>,
    pub last_explored: Option<EpochSeconds>,
}

impl WorldState {
    /// A freshly opened world with baseline attributes
    pub fn new(id: WorldId, name: impl Into<String>, world_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            world_type: world_type.into(),
            owner: None,
            spiritual_density: 50,
            resource_richness: 50,
            stability: 100,
            barrier_strength: 0,
            danger_level: 1,
            guardian_level: 0,
            market_level: 0,
            infrastructure_level: 1,
            development_level: 1,
            climate_control: 0,
            ecosystem_diversity: 0,
            enlightenment_spots: 0,
            cultivation_bonus: 1.0,
            breakthrough_chance: 0.0,
            time_flow_rate: 1.0,
            production: 100,
            daily_income: 0,
            population_limit: 100,
            trade_routes: 0,
            successful_defenses: 0,
            dimensional_gate: false,
            time_acceleration: false,
            auto_cultivation: false,
            resource_multiplication: false,
            spiritual_herbs: 0,
            essence_crystals: 0,
            ancient_artifacts: 0,
            rare_materials: 0,
            world_level: 1,
            world_experience: 0,
            total_upgrades: 0,
            special_events: 0,
            last_upgraded: None,
            last_explored: None,
        }
    }

    /// Aggregate power score, used for conquest costs and rankings
    pub fn total_power(&self) -> u64 {
        self.world_level as u64 * 1000
            + self.spiritual_density as u64 * 10
            + self.resource_richness as u64 * 10
            + self.barrier_strength as u64 * 20
            + self.guardian_level as u64 * 500
            + self.market_level as u64 * 300
            + self.infrastructure_level as u64 * 200
            + self.production
    }

    /// Add to a percentage attribute, capped at 100
    pub(crate) fn raise_pct(value: u32, amount: u32) -> u32 {
        (value + amount).min(100)
    }
}

/// Open a practitioner's one free world
///
/// Each practitioner may open a single world without paying for it;
/// starting attributes are rolled rather than fixed so free worlds
/// differ. The caller marks `free_world_opening_used` after persisting.
pub fn open_free_world<R: Rng>(
    name: &str,
    world_type: &str,
    owner: PractitionerId,
    already_used: bool,
    rng: &mut R,
) -> Result<WorldState> {
    if already_used {
        return Err(EngineError::FreeOpeningUsed);
    }
    let name = name.trim();
    if name.chars().count() < 3 {
        return Err(EngineError::InvalidWorldName(name.to_string()));
    }

    let mut world = WorldState::new(WorldId::new(), name, world_type);
    world.owner = Some(owner);
    world.spiritual_density = rng.gen_range(40..=80);
    world.danger_level = rng.gen_range(1..=3);
    world.resource_richness = rng.gen_range(30..=70);
    world.production = rng.gen_range(100..=300);
    Ok(world)
}
