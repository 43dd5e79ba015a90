//! Deterministic oracle: fortunes, advice, weather

use rand::Rng;
use serde::Serialize;

use crate::progression::practitioner::Practitioner;
use crate::stages::{progress_fraction, StageName, StageTable};

const FORTUNES: [&str; 8] = [
    "Hôm nay là ngày tốt lành cho việc đột phá cảnh giới!",
    "Nên tránh tu luyện công pháp mạnh trong 3 ngày tới.",
    "Có cơ hội gặp được cao nhân chỉ điểm đạo pháp.",
    "Thiên kiếp sắp tới, cần chuẩn bị tâm lý và tài nguyên.",
    "Vận mệnh thuận lợi cho việc luyện đan dược.",
    "Thích hợp khám phá bí cảnh tìm kiếm cơ duyên.",
    "Nên tập trung vào tu luyện thần thức.",
    "Có thể gặp phải tiểu nhân, cần cảnh giác.",
];

const WEATHER_CONDITIONS: [&str; 5] = [
    "Linh Khí Dồi Dào - Tu luyện tăng 20%",
    "Thiên Lôi Tụ Tập - Nguy hiểm tăng nhưng breakthrough dễ hơn",
    "Âm Dương Thái Cực - Cân bằng hoàn hảo cho tu luyện",
    "Ma Khí Xâm Nhập - Tu luyện chậm nhưng tăng kháng ma",
    "Thiên Nhiên Linh Khí - Tăng cường khả năng hấp thụ linh khí",
];

/// Daily fortune, a deterministic function of the practitioner and the
/// day of month
///
/// Same inputs, same fortune: the randomness players perceive comes
/// entirely from the calendar.
pub fn fortune(power: u64, karma: i64, reputation: i64, day_of_month: u32) -> &'static str {
    let index = (power % 7
        + karma.rem_euclid(5) as u64
        + reputation.rem_euclid(3) as u64
        + day_of_month as u64 % 8)
        % FORTUNES.len() as u64;
    FORTUNES[index as usize]
}

/// Progress-based cultivation hints
///
/// An unknown stored stage falls back to the first stage's bounds
/// rather than erroring, matching the tolerant advance path.
pub fn cultivation_advice(table: &StageTable, practitioner: &Practitioner) -> Vec<&'static str> {
    let mut advice = Vec::new();

    let bounds = table
        .get(&practitioner.level)
        .or_else(|| table.get(&StageName::first()));
    let progress = match bounds {
        Some(bounds) => progress_fraction(bounds, practitioner.spiritual_power),
        None => 1.0,
    };

    if progress < 0.3 {
        advice.push("Nên tập trung tu luyện cơ bản để tăng nền tảng.");
    } else if progress < 0.7 {
        advice.push("Có thể bắt đầu học các thuật pháp cao cấp hơn.");
    } else {
        advice.push("Chuẩn bị đột phá lên tầng cao hơn!");
    }

    if practitioner.spiritual_stones < 500 {
        advice.push("Cần tích lũy thêm linh thạch cho tu luyện.");
    }
    if practitioner.pills < 3 {
        advice.push("Nên luyện hoặc mua thêm đan dược.");
    }
    if practitioner.guild.is_none() {
        advice.push("Tham gia môn phái sẽ có nhiều cơ hội tu luyện hơn.");
    }

    advice
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherForecast {
    pub current: &'static str,
    pub tomorrow: &'static str,
    pub weekly_trend: &'static str,
}

/// Spiritual-energy weather report
pub fn weather_forecast<R: Rng>(rng: &mut R) -> WeatherForecast {
    WeatherForecast {
        current: WEATHER_CONDITIONS[rng.gen_range(0..WEATHER_CONDITIONS.len())],
        tomorrow: WEATHER_CONDITIONS[rng.gen_range(0..WEATHER_CONDITIONS.len())],
        weekly_trend: "Linh khí sẽ dồi dào trong tuần tới",
    }
}
