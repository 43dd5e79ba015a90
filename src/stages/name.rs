//! Structured stage names
//!
//! The original data model stored cultivation levels as display strings
//! and advanced them by substring replacement, which breaks the moment
//! display text changes. Here the major stage is an enum, the sub-stage a
//! discriminated union, and the display form is derived.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;

/// The ten major cultivation stages, in ascending order of power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MajorStage {
    LuyenKhi,
    TrucCo,
    KetDan,
    NguyenAnh,
    HoaThan,
    LuyenHu,
    HopThe,
    DaiThua,
    DoKiep,
    TanTien,
}

impl MajorStage {
    /// All major stages in canonical ascending order
    pub const ALL: [MajorStage; 10] = [
        MajorStage::LuyenKhi,
        MajorStage::TrucCo,
        MajorStage::KetDan,
        MajorStage::NguyenAnh,
        MajorStage::HoaThan,
        MajorStage::LuyenHu,
        MajorStage::HopThe,
        MajorStage::DaiThua,
        MajorStage::DoKiep,
        MajorStage::TanTien,
    ];

    /// The display name used in achievements and the persisted level string
    pub fn display_name(&self) -> &'static str {
        match self {
            MajorStage::LuyenKhi => "Luyện Khí",
            MajorStage::TrucCo => "Trúc Cơ",
            MajorStage::KetDan => "Kết Đan",
            MajorStage::NguyenAnh => "Nguyên Anh",
            MajorStage::HoaThan => "Hóa Thần",
            MajorStage::LuyenHu => "Luyện Hư",
            MajorStage::HopThe => "Hợp Thể",
            MajorStage::DaiThua => "Đại Thừa",
            MajorStage::DoKiep => "Độ Kiếp",
            MajorStage::TanTien => "Tản Tiên",
        }
    }

    /// Power range [min, max) covered by this major stage
    pub fn bounds(&self) -> (u64, u64) {
        match self {
            MajorStage::LuyenKhi => (0, 10_000),
            MajorStage::TrucCo => (10_000, 50_000),
            MajorStage::KetDan => (50_000, 200_000),
            MajorStage::NguyenAnh => (200_000, 1_000_000),
            MajorStage::HoaThan => (1_000_000, 5_000_000),
            MajorStage::LuyenHu => (5_000_000, 20_000_000),
            MajorStage::HopThe => (20_000_000, 100_000_000),
            MajorStage::DaiThua => (100_000_000, 500_000_000),
            MajorStage::DoKiep => (500_000_000, 2_000_000_000),
            MajorStage::TanTien => (2_000_000_000, 10_000_000_000),
        }
    }

    /// The next major stage, or None at the top of the ladder
    pub fn next(&self) -> Option<MajorStage> {
        let idx = MajorStage::ALL.iter().position(|m| m == self)?;
        MajorStage::ALL.get(idx + 1).copied()
    }
}

/// Position within a major stage: nine numbered layers, then fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubStage {
    /// Numbered layer, 1 through 9 ("Tầng N")
    Layer(u8),
    /// Terminal layer before breaking through to the next major stage
    /// ("Viên Mãn")
    Fulfilled,
}

/// A fully-qualified cultivation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageName {
    pub major: MajorStage,
    pub sub: SubStage,
}

impl StageName {
    pub fn new(major: MajorStage, sub: SubStage) -> Self {
        Self { major, sub }
    }

    /// The stage every new practitioner starts at
    pub fn first() -> Self {
        Self::new(MajorStage::LuyenKhi, SubStage::Layer(1))
    }

    /// True at Tản Tiên Viên Mãn, where no further transition exists
    pub fn is_terminal(&self) -> bool {
        self.major == MajorStage::TanTien && self.sub == SubStage::Fulfilled
    }

    /// The stage reached by a single breakthrough, or None when terminal
    ///
    /// Layers advance within the major stage; the ninth layer fulfills;
    /// a fulfilled stage breaks through to layer 1 of the next major.
    pub fn successor(&self) -> Option<StageName> {
        match self.sub {
            SubStage::Layer(i) if i < 9 => {
                Some(StageName::new(self.major, SubStage::Layer(i + 1)))
            }
            SubStage::Layer(_) => Some(StageName::new(self.major, SubStage::Fulfilled)),
            SubStage::Fulfilled => self
                .major
                .next()
                .map(|next| StageName::new(next, SubStage::Layer(1))),
        }
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            SubStage::Layer(i) => write!(f, "{} Tầng {}", self.major.display_name(), i),
            SubStage::Fulfilled => write!(f, "{} Viên Mãn", self.major.display_name()),
        }
    }
}

impl FromStr for StageName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for major in MajorStage::ALL {
            let Some(rest) = s.strip_prefix(major.display_name()) else {
                continue;
            };
            let rest = rest.trim_start();
            if rest == "Viên Mãn" {
                return Ok(StageName::new(major, SubStage::Fulfilled));
            }
            if let Some(layer) = rest.strip_prefix("Tầng ") {
                if let Ok(i @ 1..=9) = layer.trim().parse::<u8>() {
                    return Ok(StageName::new(major, SubStage::Layer(i)));
                }
            }
        }
        Err(EngineError::UnknownStage(s.to_string()))
    }
}
