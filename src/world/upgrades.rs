//! World upgrade catalog
//!
//! Fourteen upgrade kinds, each with a base cost, an explicit related
//! attribute for cost scaling, and an effect. Dispatch is an exhaustive
//! match over the kind enum, so adding a variant without wiring its cost
//! and effect fails to compile. Maxed and already-active checks reject
//! before any cost is charged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::EpochSeconds;
use crate::world::state::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    SpiritualDensity,
    ResourceRichness,
    WorldLevel,
    BarrierStrength,
    GuardianLevel,
    CultivationBonus,
    MarketLevel,
    Infrastructure,
    ClimateControl,
    EnlightenmentSpots,
    DimensionalGate,
    TimeAcceleration,
    AutoCultivation,
    ResourceMultiplication,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 14] = [
        UpgradeKind::SpiritualDensity,
        UpgradeKind::ResourceRichness,
        UpgradeKind::WorldLevel,
        UpgradeKind::BarrierStrength,
        UpgradeKind::GuardianLevel,
        UpgradeKind::CultivationBonus,
        UpgradeKind::MarketLevel,
        UpgradeKind::Infrastructure,
        UpgradeKind::ClimateControl,
        UpgradeKind::EnlightenmentSpots,
        UpgradeKind::DimensionalGate,
        UpgradeKind::TimeAcceleration,
        UpgradeKind::AutoCultivation,
        UpgradeKind::ResourceMultiplication,
    ];

    /// Wire identifier, as sent by clients
    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::SpiritualDensity => "spiritual_density",
            UpgradeKind::ResourceRichness => "resource_richness",
            UpgradeKind::WorldLevel => "world_level",
            UpgradeKind::BarrierStrength => "barrier_strength",
            UpgradeKind::GuardianLevel => "guardian_level",
            UpgradeKind::CultivationBonus => "cultivation_bonus",
            UpgradeKind::MarketLevel => "market_level",
            UpgradeKind::Infrastructure => "infrastructure",
            UpgradeKind::ClimateControl => "climate_control",
            UpgradeKind::EnlightenmentSpots => "enlightenment_spots",
            UpgradeKind::DimensionalGate => "dimensional_gate",
            UpgradeKind::TimeAcceleration => "time_acceleration",
            UpgradeKind::AutoCultivation => "auto_cultivation",
            UpgradeKind::ResourceMultiplication => "resource_multiplication",
        }
    }

    /// Base cost in spiritual stones, before level scaling
    pub fn base_cost(&self) -> u64 {
        match self {
            UpgradeKind::SpiritualDensity => 1000,
            UpgradeKind::ResourceRichness => 1000,
            UpgradeKind::WorldLevel => 2000,
            UpgradeKind::BarrierStrength => 1500,
            UpgradeKind::GuardianLevel => 2500,
            UpgradeKind::CultivationBonus => 3000,
            UpgradeKind::MarketLevel => 2000,
            UpgradeKind::Infrastructure => 2500,
            UpgradeKind::ClimateControl => 1800,
            UpgradeKind::EnlightenmentSpots => 3500,
            UpgradeKind::DimensionalGate => 10_000,
            UpgradeKind::TimeAcceleration => 15_000,
            UpgradeKind::AutoCultivation => 20_000,
            UpgradeKind::ResourceMultiplication => 25_000,
        }
    }

    /// The attribute that scales this upgrade's cost, as an explicit
    /// table rather than a naming convention
    fn related_attribute(&self, world: &WorldState) -> u64 {
        match self {
            UpgradeKind::WorldLevel => world.world_level as u64,
            UpgradeKind::GuardianLevel => world.guardian_level as u64,
            UpgradeKind::MarketLevel => world.market_level as u64,
            UpgradeKind::Infrastructure => world.infrastructure_level as u64,
            _ => 0,
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpgradeKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        UpgradeKind::ALL
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| EngineError::InvalidUpgrade(s.to_string()))
    }
}

/// Cost of applying the given upgrade to the given world
///
/// `base_cost * multiplier`, where the multiplier grows with the world
/// level plus the upgrade's related attribute.
pub fn upgrade_cost(world: &WorldState, kind: UpgradeKind) -> u64 {
    let multiplier = (world.world_level as u64 + kind.related_attribute(world)) / 2 + 1;
    kind.base_cost() * multiplier
}

/// Successful upgrade summary, returned for the caller to persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOutcome {
    pub kind: UpgradeKind,
    /// Stones the caller must deduct from the owner
    pub cost: u64,
    /// Localized label for the user-facing message
    pub display_name: String,
    /// True when the secondary experience layer also leveled the world
    pub world_leveled_up: bool,
}

/// Apply one upgrade to a world snapshot
///
/// Rejection order: maxed/already-active first (never charge for a
/// no-op), then funds. On success the world additionally gains upgrade
/// bookkeeping and 100 experience; crossing `world_level * 500`
/// experience levels the world up in the same call (experience resets,
/// stability +10 capped at 100). The caller deducts `cost` and persists
/// the mutated snapshot atomically.
pub fn apply_upgrade(
    config: &EngineConfig,
    world: &mut WorldState,
    kind: UpgradeKind,
    stones_available: u64,
    now: EpochSeconds,
) -> Result<UpgradeOutcome> {
    check_applicable(world, kind)?;

    let cost = upgrade_cost(world, kind);
    if stones_available < cost {
        return Err(EngineError::InsufficientStones {
            required: cost,
            available: stones_available,
        });
    }

    let display_name = apply_effect(world, kind);

    world.total_upgrades += 1;
    world.last_upgraded = Some(now);
    world.world_experience += config.world_experience_per_upgrade;

    let mut world_leveled_up = false;
    if world.world_experience >= world.world_level as u64 * config.world_level_up_step {
        world.world_level += 1;
        world.world_experience = 0;
        world.stability = WorldState::raise_pct(world.stability, config.world_level_up_stability_bonus);
        world_leveled_up = true;
    }

    Ok(UpgradeOutcome {
        kind,
        cost,
        display_name,
        world_leveled_up,
    })
}

fn check_applicable(world: &WorldState, kind: UpgradeKind) -> Result<()> {
    match kind {
        UpgradeKind::SpiritualDensity if world.spiritual_density >= 100 => {
            Err(EngineError::AlreadyMaxed {
                attribute: "spiritual_density",
            })
        }
        UpgradeKind::ResourceRichness if world.resource_richness >= 100 => {
            Err(EngineError::AlreadyMaxed {
                attribute: "resource_richness",
            })
        }
        UpgradeKind::BarrierStrength if world.barrier_strength >= 100 => {
            Err(EngineError::AlreadyMaxed {
                attribute: "barrier_strength",
            })
        }
        UpgradeKind::DimensionalGate if world.dimensional_gate => Err(EngineError::AlreadyActive {
            ability: "dimensional_gate",
        }),
        UpgradeKind::TimeAcceleration if world.time_acceleration => {
            Err(EngineError::AlreadyActive {
                ability: "time_acceleration",
            })
        }
        UpgradeKind::AutoCultivation if world.auto_cultivation => Err(EngineError::AlreadyActive {
            ability: "auto_cultivation",
        }),
        UpgradeKind::ResourceMultiplication if world.resource_multiplication => {
            Err(EngineError::AlreadyActive {
                ability: "resource_multiplication",
            })
        }
        _ => Ok(()),
    }
}

fn apply_effect(world: &mut WorldState, kind: UpgradeKind) -> String {
    match kind {
        UpgradeKind::SpiritualDensity => {
            world.spiritual_density = WorldState::raise_pct(world.spiritual_density, 10);
            "Mật Độ Linh Khí".to_string()
        }
        UpgradeKind::ResourceRichness => {
            world.resource_richness = WorldState::raise_pct(world.resource_richness, 10);
            "Độ Phong Phú Tài Nguyên".to_string()
        }
        UpgradeKind::WorldLevel => {
            world.world_level += 1;
            world.world_experience = 0;
            world.population_limit += 50;
            world.daily_income += world.world_level as u64 * 100;
            format!("Cấp Thế Giới (Lv.{})", world.world_level)
        }
        UpgradeKind::BarrierStrength => {
            world.barrier_strength = WorldState::raise_pct(world.barrier_strength, 15);
            "Sức Mạnh Kết Giới".to_string()
        }
        UpgradeKind::GuardianLevel => {
            world.guardian_level += 1;
            world.successful_defenses += world.guardian_level;
            format!("Thủ Hộ Thần (Lv.{})", world.guardian_level)
        }
        UpgradeKind::CultivationBonus => {
            world.cultivation_bonus = (world.cultivation_bonus + 0.2).min(3.0);
            world.breakthrough_chance = (world.breakthrough_chance + 0.05).min(0.5);
            "Bonus Tu Luyện".to_string()
        }
        UpgradeKind::MarketLevel => {
            world.market_level += 1;
            world.trade_routes += 2;
            world.daily_income += world.market_level as u64 * 200;
            format!("Chợ Búa (Lv.{})", world.market_level)
        }
        UpgradeKind::Infrastructure => {
            world.infrastructure_level += 1;
            world.development_level = (world.development_level + 1).min(10);
            world.population_limit += 100;
            format!("Cơ Sở Hạ Tầng (Lv.{})", world.infrastructure_level)
        }
        UpgradeKind::ClimateControl => {
            world.climate_control = (world.climate_control + 1).min(10);
            world.ecosystem_diversity = (world.ecosystem_diversity + 1).min(10);
            "Kiểm Soát Khí Hậu".to_string()
        }
        UpgradeKind::EnlightenmentSpots => {
            world.enlightenment_spots += 1;
            world.cultivation_bonus += 0.1;
            "Điểm Ngộ Đạo".to_string()
        }
        UpgradeKind::DimensionalGate => {
            world.dimensional_gate = true;
            world.trade_routes += 10;
            "Cổng Không Gian".to_string()
        }
        UpgradeKind::TimeAcceleration => {
            world.time_acceleration = true;
            world.time_flow_rate = 2.0;
            world.cultivation_bonus += 0.5;
            "Tăng Tốc Thời Gian".to_string()
        }
        UpgradeKind::AutoCultivation => {
            world.auto_cultivation = true;
            world.cultivation_bonus += 1.0;
            "Tự Động Tu Luyện".to_string()
        }
        UpgradeKind::ResourceMultiplication => {
            world.resource_multiplication = true;
            world.production *= 2;
            world.daily_income *= 2;
            "Nhân Tài Nguyên".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WorldId;

    fn world() -> WorldState {
        WorldState::new(WorldId::new(), "Thanh Vân Giới", "Linh Giới")
    }

    #[test]
    fn test_kind_round_trips_wire_ids() {
        for kind in UpgradeKind::ALL {
            assert_eq!(kind.as_str().parse::<UpgradeKind>().unwrap(), kind);
        }
        assert!(matches!(
            "teleporter".parse::<UpgradeKind>(),
            Err(EngineError::InvalidUpgrade(_))
        ));
    }

    #[test]
    fn test_cost_scales_with_related_attribute() {
        let mut w = world();
        // Level 1 world, guardian 0: multiplier (1+0)/2 + 1 = 1
        assert_eq!(upgrade_cost(&w, UpgradeKind::GuardianLevel), 2500);
        w.guardian_level = 5;
        // (1+5)/2 + 1 = 4
        assert_eq!(upgrade_cost(&w, UpgradeKind::GuardianLevel), 10_000);
        // Unrelated attribute does not move density cost
        assert_eq!(upgrade_cost(&w, UpgradeKind::SpiritualDensity), 1000);
    }

    #[test]
    fn test_maxed_density_rejected_without_charge() {
        let config = EngineConfig::default();
        let mut w = world();
        w.spiritual_density = 100;
        let before = w.clone();

        let err = apply_upgrade(&config, &mut w, UpgradeKind::SpiritualDensity, 1_000_000, 0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyMaxed { .. }));
        assert!(err.is_precondition());
        // Rejection leaves the snapshot untouched: no experience, no
        // upgrade count, nothing for the caller to charge
        assert_eq!(w.world_experience, before.world_experience);
        assert_eq!(w.total_upgrades, before.total_upgrades);
    }

    #[test]
    fn test_insufficient_stones_rejected() {
        let config = EngineConfig::default();
        let mut w = world();
        let err =
            apply_upgrade(&config, &mut w, UpgradeKind::SpiritualDensity, 10, 0).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientStones { required: 1000, .. }));
        assert_eq!(w.total_upgrades, 0);
    }

    #[test]
    fn test_world_level_upgrade_effects() {
        let config = EngineConfig::default();
        let mut w = world();
        let population = w.population_limit;
        let income = w.daily_income;

        let outcome =
            apply_upgrade(&config, &mut w, UpgradeKind::WorldLevel, 1_000_000, 0).unwrap();
        assert_eq!(w.world_level, 2);
        assert_eq!(w.population_limit, population + 50);
        assert_eq!(w.daily_income, income + 200);
        assert_eq!(outcome.display_name, "Cấp Thế Giới (Lv.2)");
    }

    #[test]
    fn test_density_caps_at_one_hundred() {
        let config = EngineConfig::default();
        let mut w = world();
        w.spiritual_density = 95;
        apply_upgrade(&config, &mut w, UpgradeKind::SpiritualDensity, 1_000_000, 0).unwrap();
        assert_eq!(w.spiritual_density, 100);
    }

    #[test]
    fn test_one_shot_gate_activates_once() {
        let config = EngineConfig::default();
        let mut w = world();

        apply_upgrade(&config, &mut w, UpgradeKind::DimensionalGate, 1_000_000, 0).unwrap();
        assert!(w.dimensional_gate);
        assert_eq!(w.trade_routes, 10);

        let err = apply_upgrade(&config, &mut w, UpgradeKind::DimensionalGate, 1_000_000, 0)
            .unwrap_err();
        assert!(matches!(err, EngineError::AlreadyActive { .. }));
        assert_eq!(w.trade_routes, 10);
    }

    #[test]
    fn test_secondary_level_up_fires_in_same_call() {
        let config = EngineConfig::default();
        let mut w = world();
        w.world_experience = 400;
        w.stability = 85;

        // +100 experience crosses level 1's 500 threshold
        let outcome =
            apply_upgrade(&config, &mut w, UpgradeKind::SpiritualDensity, 1_000_000, 7).unwrap();
        assert!(outcome.world_leveled_up);
        assert_eq!(w.world_level, 2);
        assert_eq!(w.world_experience, 0);
        assert_eq!(w.stability, 95);
        assert_eq!(w.last_upgraded, Some(7));
    }

    #[test]
    fn test_resource_multiplication_doubles_economy() {
        let config = EngineConfig::default();
        let mut w = world();
        w.daily_income = 300;

        apply_upgrade(&config, &mut w, UpgradeKind::ResourceMultiplication, 1_000_000, 0)
            .unwrap();
        assert_eq!(w.production, 200);
        assert_eq!(w.daily_income, 600);
        assert!(w.resource_multiplication);
    }
}
