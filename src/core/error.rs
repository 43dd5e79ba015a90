use thiserror::Error;

/// Engine error taxonomy.
///
/// Validation errors mean the input itself is malformed (unknown stage
/// name, unknown upgrade identifier). Precondition errors mean the input
/// was well-formed but the action is not currently allowed; callers
/// translate these directly into user-facing messages.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown cultivation stage: {0}")]
    UnknownStage(String),

    #[error("Unknown upgrade type: {0}")]
    InvalidUpgrade(String),

    #[error("Mining on cooldown: {remaining_seconds}s remaining")]
    MiningCooldown { remaining_seconds: i64 },

    #[error("{attribute} is already at maximum")]
    AlreadyMaxed { attribute: &'static str },

    #[error("{ability} is already active")]
    AlreadyActive { ability: &'static str },

    #[error("Insufficient spiritual stones: need {required}, have {available}")]
    InsufficientStones { required: u64, available: u64 },

    #[error("Insufficient spiritual power: need {required}, have {available}")]
    InsufficientPower { required: u64, available: u64 },

    #[error("Actor does not own this world")]
    NotOwner,

    #[error("World already has an owner")]
    WorldAlreadyOwned,

    #[error("Free world opening already used")]
    FreeOpeningUsed,

    #[error("World name too short: {0:?}")]
    InvalidWorldName(String),

    #[error("Ability not available: {0}")]
    AbilityUnavailable(&'static str),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Advisor error: {0}")]
    AdvisorError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl EngineError {
    /// True for errors that reject an otherwise well-formed action
    /// (cooldowns, caps, funds, ownership) rather than malformed input.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            EngineError::MiningCooldown { .. }
                | EngineError::AlreadyMaxed { .. }
                | EngineError::AlreadyActive { .. }
                | EngineError::InsufficientStones { .. }
                | EngineError::InsufficientPower { .. }
                | EngineError::NotOwner
                | EngineError::WorldAlreadyOwned
                | EngineError::FreeOpeningUsed
                | EngineError::AbilityUnavailable(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
