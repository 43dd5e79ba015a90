//! Cultivation stage catalog
//!
//! Ten major stages span the power scale from Luyện Khí (0) to Tản Tiên
//! (10 billion). Each major stage is split into nine numbered layers plus
//! a fulfilled ("Viên Mãn") layer, for 100 named stages in total.
//!
//! Stage identity is a structured value, not a display string. The legacy
//! store keeps stages as free text, so `StageName` also parses the display
//! form back at the boundary.

pub mod name;
pub mod table;

pub use name::{MajorStage, StageName, SubStage};
pub use table::{progress_fraction, StageBounds, StageTable};
