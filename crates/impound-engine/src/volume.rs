//! Incremental area/volume integration across the elevation sweep.

use impound_core::StageRecord;

/// Running area and volume totals carried across the sweep.
///
/// Volume advances incrementally: previously wet cells contribute the
/// rise since the last level, newly wet cells contribute their initial
/// depth. The inundated set is never re-integrated from scratch, so the
/// cost per level is proportional to the delta, not the whole set.
/// Totals accumulate in `f64`.
#[derive(Clone, Debug)]
pub struct VolumeAccumulator {
    cell_area: f64,
    wet_cells: usize,
    volume: f64,
    level: Option<f64>,
}

impl VolumeAccumulator {
    /// Start an empty accumulator for cells of the given area.
    pub fn new(cell_area: f64) -> Self {
        Self {
            cell_area,
            wet_cells: 0,
            volume: 0.0,
            level: None,
        }
    }

    /// Advance the water surface to `level`, admit the newly wet cells
    /// (`(flat_index, elevation)` pairs), and emit the row for this
    /// level.
    ///
    /// The first call with an empty delta yields the mandatory zero row
    /// at the baseline elevation.
    pub fn advance(&mut self, level: f64, delta: &[(usize, f64)]) -> StageRecord {
        if let Some(prev) = self.level {
            self.volume += self.wet_cells as f64 * (level - prev) * self.cell_area;
        }
        for &(_, z) in delta {
            self.volume += (level - z) * self.cell_area;
        }
        self.wet_cells += delta.len();
        self.level = Some(level);
        StageRecord {
            area: self.wet_cells as f64 * self.cell_area,
            height: level,
            volume: self.volume,
        }
    }

    /// Number of wet cells after the last `advance`.
    pub fn wet_cells(&self) -> usize {
        self.wet_cells
    }
}
