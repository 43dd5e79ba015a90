//! Achievement drafts
//!
//! Engines emit drafts; the persistence layer turns each into an
//! append-only achievement row. Titles and descriptions follow the live
//! game's Vietnamese templates.

use serde::{Deserialize, Serialize};

use crate::stages::{MajorStage, StageName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Cultivation,
    Conquest,
}

/// An achievement waiting to be persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub rarity: Rarity,
}

impl AchievementDraft {
    /// Ordinary layer-to-layer progress within a major stage
    pub fn layer_advance(from: &StageName, to: &StageName) -> Self {
        Self {
            title: format!("Tiến Bộ {}", from.major.display_name()),
            description: format!("Từ {} lên {}", from, to),
            category: AchievementCategory::Cultivation,
            rarity: Rarity::Common,
        }
    }

    /// Reaching the fulfilled layer of a major stage
    pub fn fulfilled(major: MajorStage) -> Self {
        Self {
            title: format!("Viên Mãn {}", major.display_name()),
            description: format!(
                "Đạt tới viên mãn cảnh giới {}",
                major.display_name()
            ),
            category: AchievementCategory::Cultivation,
            rarity: Rarity::Rare,
        }
    }

    /// Breaking through from a fulfilled stage into the next major stage
    pub fn breakthrough(from: MajorStage, to: MajorStage) -> Self {
        Self {
            title: format!("Đại Đột Phá {}", from.display_name()),
            description: format!(
                "Viên mãn {}, đột phá lên {}",
                from.display_name(),
                to.display_name()
            ),
            category: AchievementCategory::Cultivation,
            rarity: Rarity::Legendary,
        }
    }

    /// Taking ownership of an unowned world
    ///
    /// Epic above 10,000 world power, Rare otherwise.
    pub fn conquest(world_name: &str, world_power: u64) -> Self {
        Self {
            title: format!("Chinh Phục {}", world_name),
            description: format!(
                "Đã chinh phục thành công thế giới {} với sức mạnh {}",
                world_name, world_power
            ),
            category: AchievementCategory::Conquest,
            rarity: if world_power > 10_000 {
                Rarity::Epic
            } else {
                Rarity::Rare
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conquest_rarity_scales_with_power() {
        assert_eq!(
            AchievementDraft::conquest("Linh Giới", 9_000).rarity,
            Rarity::Rare
        );
        assert_eq!(
            AchievementDraft::conquest("Linh Giới", 50_000).rarity,
            Rarity::Epic
        );
    }

    #[test]
    fn test_draft_wire_format() {
        let draft = AchievementDraft::conquest("Linh Giới", 9_000);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["rarity"], "rare");
        assert_eq!(json["category"], "conquest");
        assert_eq!(json["title"], "Chinh Phục Linh Giới");
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Legendary > Rarity::Epic);
        assert!(Rarity::Epic > Rarity::Rare);
        assert!(Rarity::Rare > Rarity::Common);
    }
}
