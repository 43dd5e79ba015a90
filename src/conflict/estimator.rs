//! Guild war forecasting
//!
//! Deliberately noisy: each side's power is fuzzed before comparison, so
//! repeated estimates for the same pairing disagree. Callers treat this
//! as an oracle's guess, not a resolution.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasualtyEstimate {
    Medium,
    High,
}

impl CasualtyEstimate {
    /// Label used in player-facing reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CasualtyEstimate::Medium => "Trung bình",
            CasualtyEstimate::High => "Cao",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarPrediction {
    /// Win chance for side one, percent, one decimal
    pub win_probability_1: f64,
    /// Always exactly `100.0 - win_probability_1`
    pub win_probability_2: f64,
    pub duration_days: u32,
    pub casualty_estimate: CasualtyEstimate,
}

/// Forecast a war between two powers
///
/// Each side is scaled by an independent uniform factor in [0.8, 1.2]
/// before comparison. The favored side's edge is worth up to 40 points
/// over the 50/50 baseline, clamped to [10, 90]. Casualties read Medium
/// when the fuzzed gap stays under 20% of the larger side, High
/// otherwise.
pub fn estimate_war<R: Rng>(power1: u64, power2: u64, rng: &mut R) -> WarPrediction {
    let p1 = power1 as f64 * rng.gen_range(0.8..=1.2);
    let p2 = power2 as f64 * rng.gen_range(0.8..=1.2);
    let duration_days = rng.gen_range(3..=14);

    if p1 <= 0.0 && p2 <= 0.0 {
        return WarPrediction {
            win_probability_1: 50.0,
            win_probability_2: 50.0,
            duration_days,
            casualty_estimate: CasualtyEstimate::Medium,
        };
    }

    let raw = if p1 > p2 {
        (50.0 + (p1 - p2) / p1 * 40.0).min(90.0)
    } else {
        (50.0 - (p2 - p1) / p2 * 40.0).max(10.0)
    };
    // Tenths keep the pair summing to exactly 100.0
    let win1 = (raw * 10.0).round() / 10.0;

    let larger = p1.max(p2);
    let casualty_estimate = if (p1 - p2).abs() < larger * 0.2 {
        CasualtyEstimate::Medium
    } else {
        CasualtyEstimate::High
    };

    WarPrediction {
        win_probability_1: win1,
        win_probability_2: 100.0 - win1,
        duration_days,
        casualty_estimate,
    }
}
