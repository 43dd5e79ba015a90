//! Dao Engine - rule engine for a cultivation game
//!
//! Pure, stateless game logic: stage progression, resource generation,
//! world upgrades, and guild war estimation. Engines take plain-data
//! snapshots and return results plus side-effect records (stat deltas,
//! achievement drafts); the surrounding request layer persists them.

pub mod advisor;
pub mod conflict;
pub mod core;
pub mod progression;
pub mod resources;
pub mod stages;
pub mod world;
