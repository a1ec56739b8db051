//! Point-mode connectivity: priority flood from the outlet cell.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use impound_raster::{Connectivity, Dem};
use ordered_float::OrderedFloat;

use crate::error::SweepError;

/// The expanding flood frontier for outlet (point-seed) mode.
///
/// Cells sit in a min-heap keyed by their own elevation. Raising the
/// water level pops every frontier cell strictly below the new surface;
/// each newly wet cell discovers its unvisited neighbours, which join
/// the frontier keyed by their elevations. Water therefore only spreads
/// through cells that are themselves under water, and the inundated set
/// grows monotonically across levels.
///
/// The `visited` bitmap lives for the whole sweep, so every cell is
/// discovered and drowned at most once no matter how many levels the
/// sweep takes. NoData cells are marked visited on discovery but never
/// enter the frontier: they are impassable barriers.
#[derive(Debug)]
pub struct FloodFront {
    rows: u32,
    cols: u32,
    connectivity: Connectivity,
    seed_elevation: f64,
    visited: Vec<bool>,
    frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
    cells_visited: u64,
    cells_wetted: u64,
}

impl FloodFront {
    /// Seed the frontier at cell `(row, col)`.
    ///
    /// Fails with [`SweepError::SeedIsNoData`] if the seed cell holds
    /// NoData.
    pub fn new(
        dem: &dyn Dem,
        connectivity: Connectivity,
        row: u32,
        col: u32,
    ) -> Result<Self, SweepError> {
        let seed_elevation = dem
            .sample(row, col)?
            .ok_or(SweepError::SeedIsNoData { row, col })?;
        let rows = dem.rows();
        let cols = dem.cols();
        let mut visited = vec![false; dem.cell_count()];
        let idx = row as usize * cols as usize + col as usize;
        visited[idx] = true;
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((OrderedFloat(seed_elevation), idx)));
        Ok(Self {
            rows,
            cols,
            connectivity,
            seed_elevation,
            visited,
            frontier,
            cells_visited: 1,
            cells_wetted: 0,
        })
    }

    /// Elevation of the seed cell — the sweep baseline.
    pub fn seed_elevation(&self) -> f64 {
        self.seed_elevation
    }

    /// Raise the water surface to `level` and return the newly wet
    /// cells as `(flat_index, elevation)` pairs.
    ///
    /// Wetness is strict: a cell whose elevation equals the surface
    /// holds zero depth and stays on the frontier.
    pub fn raise_to(
        &mut self,
        level: f64,
        dem: &dyn Dem,
    ) -> Result<Vec<(usize, f64)>, SweepError> {
        let mut delta = Vec::new();
        while let Some(&Reverse((z, idx))) = self.frontier.peek() {
            let z = z.into_inner();
            if z >= level {
                break;
            }
            self.frontier.pop();
            self.cells_wetted += 1;
            delta.push((idx, z));

            let row = (idx / self.cols as usize) as u32;
            let col = (idx % self.cols as usize) as u32;
            for (nr, nc) in self
                .connectivity
                .neighbours(row, col, self.rows, self.cols)
            {
                let nidx = nr as usize * self.cols as usize + nc as usize;
                if self.visited[nidx] {
                    continue;
                }
                self.visited[nidx] = true;
                self.cells_visited += 1;
                if let Some(nz) = dem.sample(nr, nc)? {
                    self.frontier.push(Reverse((OrderedFloat(nz), nidx)));
                }
            }
        }
        Ok(delta)
    }

    /// Returns `true` once every reachable cell is wet.
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Elevation of the lowest still-dry frontier cell, if any.
    pub fn next_elevation(&self) -> Option<f64> {
        self.frontier.peek().map(|Reverse((z, _))| z.into_inner())
    }

    /// Distinct cells examined so far (seed, frontier discoveries, and
    /// NoData barriers).
    pub fn cells_visited(&self) -> u64 {
        self.cells_visited
    }

    /// Cells drowned so far.
    pub fn cells_wetted(&self) -> u64 {
        self.cells_wetted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impound_test_utils::{bowl_dem, dem_from_grid, NODATA};

    #[test]
    fn seed_nodata_is_fatal() {
        let dem = dem_from_grid(2, 2, 1.0, &[0.0, NODATA, 0.0, 0.0]);
        let err = FloodFront::new(&dem, Connectivity::Four, 0, 1).unwrap_err();
        assert_eq!(err, SweepError::SeedIsNoData { row: 0, col: 1 });
    }

    #[test]
    fn strict_threshold_keeps_equal_elevation_cells_dry() {
        let dem = bowl_dem(3, 1.0); // center 0, rim 1
        let mut front = FloodFront::new(&dem, Connectivity::Four, 1, 1).unwrap();
        assert_eq!(front.seed_elevation(), 0.0);

        // At the seed elevation nothing is wet, not even the seed.
        assert!(front.raise_to(0.0, &dem).unwrap().is_empty());
        // Just above it, only the seed drowns.
        let delta = front.raise_to(0.5, &dem).unwrap();
        assert_eq!(delta, vec![(4, 0.0)]);
    }

    #[test]
    fn flood_respects_connectivity_barriers() {
        // A NoData wall splits the grid; the right column is unreachable.
        let dem = dem_from_grid(
            3,
            3,
            1.0,
            &[
                0.0, NODATA, 0.0, //
                0.0, NODATA, 0.0, //
                0.0, NODATA, 0.0,
            ],
        );
        let mut front = FloodFront::new(&dem, Connectivity::Four, 0, 0).unwrap();
        let delta = front.raise_to(10.0, &dem).unwrap();
        let wet: Vec<usize> = delta.iter().map(|&(i, _)| i).collect();
        assert_eq!(wet.len(), 3);
        assert!(wet.contains(&0) && wet.contains(&3) && wet.contains(&6));
        assert!(front.is_exhausted());
    }

    #[test]
    fn diagonal_gap_needs_eight_connectivity() {
        // Two low corners touch only diagonally across a high ridge.
        let dem = dem_from_grid(
            2,
            2,
            1.0,
            &[
                0.0, 9.0, //
                9.0, 0.0,
            ],
        );
        let mut four = FloodFront::new(&dem, Connectivity::Four, 0, 0).unwrap();
        assert_eq!(four.raise_to(1.0, &dem).unwrap().len(), 1);

        let mut eight = FloodFront::new(&dem, Connectivity::Eight, 0, 0).unwrap();
        let wet8 = eight.raise_to(1.0, &dem).unwrap();
        assert_eq!(wet8.len(), 2); // water leaks through the corner
    }

    #[test]
    fn each_cell_visited_once_across_many_levels() {
        let dem = bowl_dem(9, 1.0);
        let mut front = FloodFront::new(&dem, Connectivity::Four, 4, 4).unwrap();
        for i in 1..=40 {
            front.raise_to(i as f64 * 0.1, &dem).unwrap();
        }
        assert!(front.cells_visited() <= dem.cell_count() as u64);
        assert!(front.cells_wetted() <= front.cells_visited());
    }
}
