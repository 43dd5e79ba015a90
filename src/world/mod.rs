//! Ownable worlds: state, upgrade catalog, conquest, special abilities
//!
//! A world is a resource-generating entity with ~30 upgradeable
//! attributes. Upgrades are instantaneous cost/effect applications from a
//! static catalog; every success also feeds a secondary world-level
//! progression layer.

pub mod abilities;
pub mod conquest;
pub mod state;
pub mod upgrades;

pub use abilities::{activate_ability, AbilityKind, ActivatedAbility};
pub use conquest::{conquer, Conquest};
pub use state::{open_free_world, WorldState};
pub use upgrades::{apply_upgrade, upgrade_cost, UpgradeKind, UpgradeOutcome};
