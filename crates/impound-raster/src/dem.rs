//! The read-only elevation source the sweep engine computes over.

use crate::error::RasterError;
use crate::transform::{Extent, GridTransform};

/// A read-only digital elevation model, queryable by cell.
///
/// `sample` returns `Ok(None)` for NoData cells; the engine treats
/// those as impassable barriers and excludes them from area and volume.
/// Every `Some` elevation must be finite — non-finite source values are
/// NoData, never data (an infinite elevation has no water level above
/// it, so the sweep could not terminate).
/// The fallible return is the seam through which a source that becomes
/// unreadable mid-sweep aborts the computation — implementations backed
/// by resident memory never fail, mocks and streaming sources can.
///
/// Implementations must be consistent for the duration of one
/// computation: the engine may sample any cell any number of times and
/// assumes repeated samples agree.
pub trait Dem {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// World/cell transform.
    fn transform(&self) -> GridTransform;

    /// Elevation at `(row, col)`, or `None` for NoData.
    fn sample(&self, row: u32, col: u32) -> Result<Option<f64>, RasterError>;

    /// Total cell count.
    fn cell_count(&self) -> usize {
        self.rows() as usize * self.cols() as usize
    }

    /// Planimetric area of one cell.
    fn cell_area(&self) -> f64 {
        self.transform().cell_area()
    }

    /// World-coordinate extent of the raster.
    fn extent(&self) -> Extent {
        self.transform().extent(self.rows(), self.cols())
    }

    /// Cell containing the world coordinate `(x, y)`.
    fn world_to_cell(&self, x: f64, y: f64) -> Result<(u32, u32), RasterError> {
        self.transform().world_to_cell(x, y, self.rows(), self.cols())
    }

    /// World coordinates of the center of cell `(row, col)`.
    fn cell_center(&self, row: u32, col: u32) -> (f64, f64) {
        self.transform().cell_center(row, col)
    }

    /// Maximum elevation over the whole raster, `None` if every cell is
    /// NoData. Full scan; callers that need it repeatedly should cache.
    fn max_elevation(&self) -> Result<Option<f64>, RasterError> {
        let mut max: Option<f64> = None;
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if let Some(z) = self.sample(row, col)? {
                    max = Some(match max {
                        Some(m) => m.max(z),
                        None => z,
                    });
                }
            }
        }
        Ok(max)
    }
}
