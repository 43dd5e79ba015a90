//! Resource Engine
//!
//! Stone mining on a cooldown, plus the per-world gathering actions
//! (exploration and harvest). Like the progression engines, everything
//! here computes deltas against caller-owned snapshots.

pub mod exploration;
pub mod harvest;
pub mod mining;

pub use exploration::{explore, Exploration};
pub use harvest::{harvest, Harvest};
pub use mining::{mine, Mining};
