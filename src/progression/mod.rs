//! Cultivation progression engine
//!
//! Decides stage transitions from accumulated spiritual power and emits
//! achievement drafts as data. Nothing here touches storage; the caller
//! persists the new level and inserts the drafts in one transaction.

pub mod achievements;
pub mod advance;
pub mod practitioner;

pub use achievements::{AchievementCategory, AchievementDraft, Rarity};
pub use advance::{advance, cultivate, Advance, Cultivate};
pub use practitioner::Practitioner;
