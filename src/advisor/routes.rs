//! Expedition route planning

use serde::Serialize;

const SUPPLIES: [&str; 4] = [
    "Đan dược hồi phục",
    "Pháp bảo phòng thủ",
    "Linh thạch dự phòng",
    "Bùa hộ mạng",
];

const WAYPOINTS: [[&str; 3]; 5] = [
    ["Rừng Tre Xanh", "Suối Linh Tuyền", "Đồi Hoa Lan"],
    ["Thung Lũng Sương Mù", "Hang Dơi Máu", "Đỉnh Núi Kiếm"],
    ["Sa Mạc Cát Vàng", "Đền Cổ Bỏ Hoang", "Hồ Nước Độc"],
    ["Rừng Quỷ Dữ", "Thành Phố Ma", "Cổng Địa Ngục"],
    ["Thiên Đình", "Cung Điện Rồng", "Vực Sâu Vô Đáy"],
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpeditionPlan {
    pub difficulty: u32,
    pub waypoints: Vec<&'static str>,
    pub min_hours: u32,
    pub max_hours: u32,
    pub recommended_supplies: Vec<&'static str>,
    /// Percent chance of meeting a spirit beast of this difficulty tier
    pub beast_encounter_pct: u32,
    /// Percent chance of finding a heaven-grade treasure
    pub treasure_chance_pct: u32,
}

/// Plan an expedition route for a difficulty tier
///
/// Tiers run 1 to 5; anything outside that range plans the tier-1
/// route, matching how unknown tiers were always treated.
pub fn plan_expedition(difficulty: u32) -> ExpeditionPlan {
    let tier = if (1..=5).contains(&difficulty) {
        difficulty
    } else {
        1
    };

    ExpeditionPlan {
        difficulty: tier,
        waypoints: WAYPOINTS[tier as usize - 1].to_vec(),
        min_hours: tier * 6,
        max_hours: tier * 8,
        recommended_supplies: SUPPLIES.to_vec(),
        beast_encounter_pct: 30,
        treasure_chance_pct: tier * 15,
    }
}
