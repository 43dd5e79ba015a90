//! Integration tests for world ownership and development
//!
//! Covers the conquest-upgrade-ability lifecycle against one world,
//! including the secondary world level-up layer and harvest scaling.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dao_engine::core::config::EngineConfig;
use dao_engine::core::error::EngineError;
use dao_engine::core::types::{PractitionerId, WorldId};
use dao_engine::resources::{explore, harvest};
use dao_engine::world::{
    activate_ability, apply_upgrade, conquer, upgrade_cost, AbilityKind, UpgradeKind, WorldState,
};

fn conquered_world(actor: PractitionerId) -> WorldState {
    let config = EngineConfig::default();
    let mut world = WorldState::new(WorldId::new(), "Thanh Vân Giới", "Linh Giới");
    conquer(&config, &mut world, actor, u64::MAX, u64::MAX, 0).unwrap();
    world
}

#[test]
fn test_upgrade_bookkeeping_accumulates() {
    let config = EngineConfig::default();
    let actor = PractitionerId::new();
    let mut world = conquered_world(actor);

    let mut spent = 0u64;
    // 100 exp per upgrade, level 1 needs 500: the fifth upgrade levels up
    for i in 1..=5u32 {
        let outcome =
            apply_upgrade(&config, &mut world, UpgradeKind::BarrierStrength, u64::MAX, i as i64)
                .unwrap();
        spent += outcome.cost;
        assert_eq!(world.total_upgrades, i);
        assert_eq!(outcome.world_leveled_up, i == 5);
    }

    assert_eq!(world.world_level, 2);
    assert_eq!(world.world_experience, 0);
    assert!(spent > 0);
    assert_eq!(world.last_upgraded, Some(5));
    // Conquest dropped stability to 80; the level-up adds 10 back
    assert_eq!(world.stability, 90);
}

#[test]
fn test_cost_rises_as_the_world_develops() {
    let config = EngineConfig::default();
    let actor = PractitionerId::new();
    let mut world = conquered_world(actor);

    let early = upgrade_cost(&world, UpgradeKind::GuardianLevel);
    for _ in 0..4 {
        apply_upgrade(&config, &mut world, UpgradeKind::GuardianLevel, u64::MAX, 0).unwrap();
    }
    let late = upgrade_cost(&world, UpgradeKind::GuardianLevel);
    assert!(late > early, "cost should scale: {early} -> {late}");
}

#[test]
fn test_maxed_attribute_rejects_before_charging() {
    let config = EngineConfig::default();
    let actor = PractitionerId::new();
    let mut world = conquered_world(actor);
    world.spiritual_density = 100;

    // Even with no stones at all, the maxed check must fire first
    let err = apply_upgrade(&config, &mut world, UpgradeKind::SpiritualDensity, 0, 0).unwrap_err();
    assert!(matches!(err, EngineError::AlreadyMaxed { .. }));
    assert_eq!(world.total_upgrades, 0);
}

#[test]
fn test_one_shot_ability_unlock_then_use() {
    let config = EngineConfig::default();
    let actor = PractitionerId::new();
    let mut world = conquered_world(actor);

    // Locked before the upgrade
    let err = activate_ability(&config, &mut world, AbilityKind::DimensionalGate, actor, 0)
        .unwrap_err();
    assert!(matches!(err, EngineError::AbilityUnavailable(_)));

    apply_upgrade(&config, &mut world, UpgradeKind::DimensionalGate, u64::MAX, 0).unwrap();
    assert!(world.dimensional_gate);

    // Second purchase rejected, but activation now works repeatedly
    let err = apply_upgrade(&config, &mut world, UpgradeKind::DimensionalGate, u64::MAX, 0)
        .unwrap_err();
    assert!(matches!(err, EngineError::AlreadyActive { .. }));

    let stability_before = world.stability;
    let outcome =
        activate_ability(&config, &mut world, AbilityKind::DimensionalGate, actor, 0).unwrap();
    assert_eq!(outcome.stones_gained, world.world_level as u64 * 1000);
    assert_eq!(world.stability, stability_before - 10);
}

#[test]
fn test_multiplication_compounds_into_harvest() {
    let config = EngineConfig::default();
    let actor = PractitionerId::new();
    let mut world = conquered_world(actor);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let base = harvest(&mut world, actor, &mut rng).unwrap().stones_gained;

    apply_upgrade(&config, &mut world, UpgradeKind::ResourceMultiplication, u64::MAX, 0).unwrap();
    let doubled = harvest(&mut world, actor, &mut rng).unwrap().stones_gained;

    // The upgrade doubles production and income, and the harvest
    // multiplier doubles again on top
    assert!(doubled >= base * 2);
    assert_eq!(world.special_events, 2);
}

#[test]
fn test_exploration_rewards_flow_into_the_world() {
    let config = EngineConfig::default();
    let actor = PractitionerId::new();
    let mut world = conquered_world(actor);
    world.resource_richness = 100;
    world.spiritual_density = 100;
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let trip = explore(&config, &mut world, actor, 10_000, 777, &mut rng).unwrap();
    assert_eq!(trip.energy_cost, 50);
    assert!(trip.rare_materials >= 1);
    assert_eq!(world.rare_materials, trip.rare_materials);
    assert_eq!(world.last_explored, Some(777));
}

#[test]
fn test_unknown_upgrade_id_is_rejected() {
    let err = "celestial_cannon".parse::<UpgradeKind>().unwrap_err();
    assert!(matches!(err, EngineError::InvalidUpgrade(_)));

    let kind: UpgradeKind = "spiritual_density".parse().unwrap();
    assert_eq!(kind, UpgradeKind::SpiritualDensity);
}
