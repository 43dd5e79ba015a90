//! Stage lookup table
//!
//! Maps each of the 100 named stages to its power range. Within a major
//! stage with bounds (lo, hi), step = (hi - lo) / 10; layers 1..9 each
//! span one step and the fulfilled layer absorbs the integer-division
//! remainder up to hi, so the ten sub-ranges partition [lo, hi) exactly.

use ahash::AHashMap;

use crate::stages::name::{MajorStage, StageName, SubStage};

/// Power range [min_power, max_power) of a single stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageBounds {
    pub min_power: u64,
    pub max_power: u64,
}

impl StageBounds {
    pub fn contains(&self, power: u64) -> bool {
        power >= self.min_power && power < self.max_power
    }
}

/// Immutable catalog of all cultivation stages
#[derive(Debug, Clone)]
pub struct StageTable {
    entries: AHashMap<StageName, StageBounds>,
    /// All stages in ascending power order, for range scans
    ordered: Vec<StageName>,
}

impl StageTable {
    pub fn new() -> Self {
        let mut entries = AHashMap::new();
        let mut ordered = Vec::with_capacity(100);

        for major in MajorStage::ALL {
            let (lo, hi) = major.bounds();
            let step = (hi - lo) / 10;

            for i in 1..=9u8 {
                let name = StageName::new(major, SubStage::Layer(i));
                let bounds = StageBounds {
                    min_power: lo + (i as u64 - 1) * step,
                    max_power: lo + i as u64 * step,
                };
                entries.insert(name, bounds);
                ordered.push(name);
            }

            // Fulfilled layer takes the remainder up to the major bound
            let name = StageName::new(major, SubStage::Fulfilled);
            entries.insert(
                name,
                StageBounds {
                    min_power: lo + 9 * step,
                    max_power: hi,
                },
            );
            ordered.push(name);
        }

        Self { entries, ordered }
    }

    pub fn get(&self, name: &StageName) -> Option<&StageBounds> {
        self.entries.get(name)
    }

    /// Look up a stage by its persisted display string
    pub fn get_by_str(&self, level: &str) -> Option<(StageName, &StageBounds)> {
        let name: StageName = level.parse().ok()?;
        self.entries.get(&name).map(|b| (name, b))
    }

    /// The unique stage whose [min, max) range contains the given power,
    /// or None above the top of the ladder
    pub fn stage_for_power(&self, power: u64) -> Option<StageName> {
        self.ordered
            .iter()
            .find(|name| self.entries[name].contains(power))
            .copied()
    }

    /// All stages in ascending power order
    pub fn iter_ordered(&self) -> impl Iterator<Item = (StageName, &StageBounds)> {
        self.ordered.iter().map(move |n| (*n, &self.entries[n]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StageTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of the way through a stage, in [0.0, 1.0]
///
/// Defined as 1.0 for a degenerate zero-width range so callers never
/// divide by zero on a collapsed stage.
pub fn progress_fraction(bounds: &StageBounds, power: u64) -> f64 {
    let range = bounds.max_power - bounds.min_power;
    if range == 0 {
        return 1.0;
    }
    let into = power.saturating_sub(bounds.min_power);
    (into as f64 / range as f64).min(1.0)
}
