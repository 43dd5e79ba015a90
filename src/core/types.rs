//! Core identifier types shared across the engines

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for practitioners (player characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PractitionerId(pub Uuid);

impl PractitionerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PractitionerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for ownable worlds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub Uuid);

impl WorldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for guilds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildId(pub Uuid);

impl GuildId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GuildId {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock seconds since the Unix epoch.
///
/// Engines never read the clock themselves; callers pass the current
/// time in, which keeps every operation deterministic under test.
pub type EpochSeconds = i64;
