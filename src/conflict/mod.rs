//! Conflict Estimator
//!
//! Guild aggregate power and the randomized guild-war forecast.

pub mod estimator;
pub mod guild;

pub use estimator::{estimate_war, CasualtyEstimate, WarPrediction};
pub use guild::GuildSnapshot;
