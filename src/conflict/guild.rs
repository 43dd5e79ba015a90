//! Guild snapshot and aggregate power

use serde::{Deserialize, Serialize};

use crate::core::types::GuildId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildSnapshot {
    pub id: GuildId,
    pub name: String,
    pub level: u32,
    /// Spirit stones in the guild vault
    pub treasury: u64,
    pub territory_count: u32,
    /// Sum of member spiritual power, for rankings
    pub member_power: u64,
}

impl GuildSnapshot {
    pub fn new(id: GuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            treasury: 0,
            territory_count: 1,
            member_power: 0,
        }
    }

    /// War-relevant power score
    pub fn aggregate_power(&self) -> u64 {
        self.level as u64 * 1000 + self.treasury + self.territory_count as u64 * 500
    }
}
