// File: crates/tally-core/src/axis.rs
// Summary: Axis model with titles, ranges and tick policies.

use crate::grid::{integer_ticks, unit_ticks};

/// Upper bound on y-axis tick intervals for count axes.
const MAX_COUNT_INTERVALS: usize = 6;
/// Head-room above the tallest bar, as a fraction of its height.
const COUNT_MARGIN: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Integer ticks at a "nice" step, no fractional labels.
    Integer,
    /// A tick at every integer in range.
    EveryUnit,
    /// One text tick per category, at positions 0, 1, 2, ...
    Categories(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Ticks::Integer }
    }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Count axis from 0 to just above `max_count`; `[0, 1]` when nothing is counted.
    pub fn counts(label: impl Into<String>, max_count: u64) -> Self {
        let max = if max_count == 0 { 1.0 } else { max_count as f64 * (1.0 + COUNT_MARGIN) };
        Self::new(label, 0.0, max)
    }

    /// Fixed integer range `[lo, hi]` ticked at every unit, independent of the data.
    pub fn units(label: impl Into<String>, lo: u32, hi: u32) -> Self {
        Self::new(label, lo as f64, hi as f64).with_ticks(Ticks::EveryUnit)
    }

    /// Categorical axis: category `i` sits at x = i.
    pub fn categories(label: impl Into<String>, names: Vec<String>) -> Self {
        let (min, max) = if names.is_empty() { (0.0, 1.0) } else { (-0.6, names.len() as f64 - 0.4) };
        Self::new(label, min, max).with_ticks(Ticks::Categories(names))
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Tick positions (in axis units) with their label text.
    pub fn tick_marks(&self) -> Vec<(f64, String)> {
        match &self.ticks {
            Ticks::Integer => integer_ticks(self.min, self.max, MAX_COUNT_INTERVALS)
                .into_iter()
                .map(|v| (v as f64, v.to_string()))
                .collect(),
            Ticks::EveryUnit => unit_ticks(self.min.ceil() as i64, self.max.floor() as i64)
                .into_iter()
                .map(|v| (v as f64, v.to_string()))
                .collect(),
            Ticks::Categories(names) => names
                .iter()
                .enumerate()
                .map(|(i, n)| (i as f64, n.clone()))
                .collect(),
        }
    }
}
