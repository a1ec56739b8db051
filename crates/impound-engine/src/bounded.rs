//! Polygon-mode connectivity: one-pass elevation filter over the
//! drainage-area interior.

use impound_core::Polygon;
use impound_raster::Dem;

use crate::error::SweepError;

/// The cached drainage-area interior for bounded mode.
///
/// Construction performs the single polygon-intersection pass over the
/// cells under the polygon's bounding box, keeps `(flat_index,
/// elevation)` for every non-NoData cell whose center lies inside, and
/// sorts the survivors by elevation. Raising the level is then a cursor
/// advance over the sorted list — no traversal, no connectivity: two
/// disjoint basins inside the boundary both fill.
#[derive(Debug)]
pub struct BoundedRegion {
    /// Interior cells sorted ascending by elevation.
    cells: Vec<(usize, f64)>,
    cursor: usize,
    candidates_tested: u64,
}

impl BoundedRegion {
    /// Select and sort the polygon interior.
    ///
    /// Fails with [`SweepError::DrainageOutsideDem`] when the polygon's
    /// bounding box misses the raster extent,
    /// [`SweepError::EmptyDrainageRegion`] when no cell center falls
    /// inside the ring, and [`SweepError::DrainageAllNoData`] when the
    /// interior holds only NoData.
    pub fn new(dem: &dyn Dem, polygon: &Polygon) -> Result<Self, SweepError> {
        let (min_x, min_y, max_x, max_y) = polygon.bounding_box();
        let extent = dem.extent();
        if max_x < extent.min_x || min_x > extent.max_x || max_y < extent.min_y
            || min_y > extent.max_y
        {
            return Err(SweepError::DrainageOutsideDem);
        }

        let t = dem.transform();
        let rows = dem.rows();
        let cols = dem.cols();
        // Clip the bounding box to the grid in cell space.
        let col_lo = (((min_x - t.origin_x) / t.cell_width).floor().max(0.0)) as u32;
        let col_hi = ((((max_x - t.origin_x) / t.cell_width).ceil()).min(cols as f64)) as u32;
        let row_lo = (((t.origin_y - max_y) / t.cell_height).floor().max(0.0)) as u32;
        let row_hi = ((((t.origin_y - min_y) / t.cell_height).ceil()).min(rows as f64)) as u32;

        let mut cells = Vec::new();
        let mut candidates_tested = 0u64;
        let mut interior = 0usize;
        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                candidates_tested += 1;
                let (cx, cy) = dem.cell_center(row, col);
                if !polygon.contains(cx, cy) {
                    continue;
                }
                interior += 1;
                if let Some(z) = dem.sample(row, col)? {
                    cells.push((row as usize * cols as usize + col as usize, z));
                }
            }
        }
        if interior == 0 {
            return Err(SweepError::EmptyDrainageRegion);
        }
        if cells.is_empty() {
            return Err(SweepError::DrainageAllNoData);
        }
        cells.sort_unstable_by(|a, b| a.1.total_cmp(&b.1));
        Ok(Self {
            cells,
            cursor: 0,
            candidates_tested,
        })
    }

    /// Lowest interior elevation — the sweep baseline.
    pub fn min_elevation(&self) -> f64 {
        self.cells[0].1
    }

    /// Highest interior elevation — the sweep ceiling.
    pub fn max_elevation(&self) -> f64 {
        self.cells[self.cells.len() - 1].1
    }

    /// Number of usable interior cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the interior holds no cells. Construction rejects empty
    /// interiors, so this only turns up `false`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raise the water surface to `level` and return the newly admitted
    /// cells as `(flat_index, elevation)` pairs. Strict threshold, as in
    /// flood mode.
    pub fn raise_to(&mut self, level: f64) -> &[(usize, f64)] {
        let start = self.cursor;
        while self.cursor < self.cells.len() && self.cells[self.cursor].1 < level {
            self.cursor += 1;
        }
        &self.cells[start..self.cursor]
    }

    /// Returns `true` once every interior cell is wet.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.cells.len()
    }

    /// Cells examined during the selection pass.
    pub fn candidates_tested(&self) -> u64 {
        self.candidates_tested
    }

    /// Cells admitted so far.
    pub fn cells_wetted(&self) -> u64 {
        self.cursor as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impound_test_utils::{dem_from_grid, flat_dem, NODATA};

    fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon {
        Polygon::new(vec![
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ])
        .unwrap()
    }

    #[test]
    fn selects_interior_cells_only() {
        // 4x4 unit grid, polygon covering the central 2x2 block.
        let dem = dem_from_grid(4, 4, 1.0, &(0..16).map(f64::from).collect::<Vec<_>>());
        let region = BoundedRegion::new(&dem, &square(1.0, 1.0, 3.0, 3.0)).unwrap();
        assert_eq!(region.len(), 4);
        assert!(!region.is_empty());
        assert_eq!(region.min_elevation(), 5.0);
        assert_eq!(region.max_elevation(), 10.0);
    }

    #[test]
    fn raise_to_advances_in_elevation_order() {
        let dem = dem_from_grid(2, 2, 1.0, &[3.0, 1.0, 2.0, 0.0]);
        let mut region = BoundedRegion::new(&dem, &square(-1.0, -1.0, 3.0, 3.0)).unwrap();
        assert!(region.raise_to(0.0).is_empty());
        let admitted: Vec<f64> = region.raise_to(2.5).iter().map(|&(_, z)| z).collect();
        assert_eq!(admitted, vec![0.0, 1.0, 2.0]);
        assert!(!region.is_exhausted());
        assert_eq!(region.raise_to(10.0).len(), 1);
        assert!(region.is_exhausted());
        assert_eq!(region.cells_wetted(), 4);
    }

    #[test]
    fn polygon_outside_extent() {
        let dem = flat_dem(2, 2, 0.0);
        let err = BoundedRegion::new(&dem, &square(10.0, 10.0, 12.0, 12.0)).unwrap_err();
        assert_eq!(err, SweepError::DrainageOutsideDem);
    }

    #[test]
    fn polygon_between_cell_centers() {
        // Overlaps the extent but traps no cell center.
        let dem = flat_dem(2, 2, 0.0);
        let err = BoundedRegion::new(&dem, &square(0.8, 0.8, 1.2, 1.2)).unwrap_err();
        assert_eq!(err, SweepError::EmptyDrainageRegion);
    }

    #[test]
    fn all_nodata_interior() {
        let dem = dem_from_grid(2, 2, 1.0, &[NODATA; 4]);
        let err = BoundedRegion::new(&dem, &square(-1.0, -1.0, 3.0, 3.0)).unwrap_err();
        assert_eq!(err, SweepError::DrainageAllNoData);
    }

    #[test]
    fn nodata_cells_are_excluded_not_fatal() {
        let dem = dem_from_grid(2, 2, 1.0, &[1.0, NODATA, 2.0, NODATA]);
        let region = BoundedRegion::new(&dem, &square(-1.0, -1.0, 3.0, 3.0)).unwrap();
        assert_eq!(region.len(), 2);
    }

    #[test]
    fn selection_pass_is_bounded_by_clipped_box() {
        let dem = flat_dem(10, 10, 0.0);
        let region = BoundedRegion::new(&dem, &square(0.0, 6.0, 4.0, 10.0)).unwrap();
        // The pass never looks past the clipped bounding box.
        assert!(region.candidates_tested() <= 25);
    }
}
