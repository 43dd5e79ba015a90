//! Practitioner snapshot
//!
//! A read-only view of the persisted player row. Engines consume this
//! and return deltas; they never write it back themselves.

use serde::{Deserialize, Serialize};

use crate::core::types::{EpochSeconds, GuildId, PractitionerId};
use crate::stages::StageName;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: PractitionerId,
    pub level: StageName,
    pub spiritual_power: u64,
    pub cultivation_points: u64,

    // Resources
    pub spiritual_stones: u64,
    pub pills: u32,
    pub artifacts: u32,

    // Social standing
    pub reputation: i64,
    pub karma: i64,
    pub guild: Option<GuildId>,

    // Mining
    pub mining_level: u32,
    pub mining_experience: u64,
    pub last_mining: Option<EpochSeconds>,

    // Flags
    pub is_admin: bool,
    pub free_world_opening_used: bool,
}

impl Practitioner {
    /// A fresh practitioner with the starting loadout
    pub fn new(id: PractitionerId) -> Self {
        Self {
            id,
            level: StageName::first(),
            spiritual_power: 100,
            cultivation_points: 0,
            spiritual_stones: 1000,
            pills: 5,
            artifacts: 1,
            reputation: 0,
            karma: 0,
            guild: None,
            mining_level: 1,
            mining_experience: 0,
            last_mining: None,
            is_admin: false,
            free_world_opening_used: false,
        }
    }

    /// Mining cooldown does not apply to administrators
    pub fn mining_exempt(&self) -> bool {
        self.is_admin
    }
}
