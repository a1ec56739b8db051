//! Stage-storage table rows and the ordered curve.

use serde::{Deserialize, Serialize};

/// One row of the stage-storage table.
///
/// `height` is the water-surface elevation, `area` the planimetric area
/// of the inundated cell set at that elevation, and `volume` the water
/// volume impounded below the surface. Units follow the DEM: metres in,
/// square/cubic metres out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Inundated surface area.
    pub area: f64,
    /// Water-surface elevation.
    pub height: f64,
    /// Impounded volume.
    pub volume: f64,
}

/// The ordered stage-storage curve.
///
/// Rows are strictly increasing in height by exactly one vertical step,
/// starting at the seed/minimum elevation with a zero row
/// (`area == volume == 0`). Area and volume are monotonically
/// non-decreasing. The sweep engine is the only producer; consumers
/// (table and graph writers) treat the curve as read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StageCurve {
    /// Rows in sweep order.
    pub records: Vec<StageRecord>,
}

impl StageCurve {
    /// Pre-allocate a curve expected to hold `n` rows.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            records: Vec::with_capacity(n),
        }
    }

    /// Append a row.
    ///
    /// Debug builds assert the ordering invariants (strictly increasing
    /// height, non-decreasing area and volume) against the previous row.
    pub fn push(&mut self, record: StageRecord) {
        if let Some(prev) = self.records.last() {
            debug_assert!(record.height > prev.height);
            debug_assert!(record.area >= prev.area);
            debug_assert!(record.volume >= prev.volume);
        }
        self.records.push(record);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the curve has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last row, if any.
    pub fn last(&self) -> Option<&StageRecord> {
        self.records.last()
    }

    /// Heights column, in row order.
    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.height)
    }

    /// Areas column, in row order.
    pub fn areas(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.area)
    }

    /// Volumes column, in row order.
    pub fn volumes(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.volume)
    }
}
