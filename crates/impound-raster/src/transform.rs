//! World/cell coordinate mapping for north-up rasters.

use std::fmt;

use crate::error::RasterError;

/// Axis-aligned raster extent in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Western edge.
    pub min_x: f64,
    /// Southern edge.
    pub min_y: f64,
    /// Eastern edge.
    pub max_x: f64,
    /// Northern edge.
    pub max_y: f64,
}

impl Extent {
    /// Inclusive containment test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Width of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// North-up affine transform between world and cell coordinates.
///
/// `(origin_x, origin_y)` is the outer corner of cell `(0, 0)` — the
/// top-left of the raster. Rows advance south (decreasing y), columns
/// advance east (increasing x). Both cell dimensions are stored
/// positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    /// Easting of the top-left corner.
    pub origin_x: f64,
    /// Northing of the top-left corner.
    pub origin_y: f64,
    /// Cell width in world units.
    pub cell_width: f64,
    /// Cell height in world units.
    pub cell_height: f64,
}

impl GridTransform {
    /// Build a transform, rejecting non-positive or non-finite cell sizes.
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self, RasterError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(cell_width) || !positive(cell_height) {
            return Err(RasterError::NonPositiveCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
        })
    }

    /// Square transform with the top-left corner at the world origin.
    pub fn square(cell_size: f64, rows: u32) -> Result<Self, RasterError> {
        Self::new(0.0, rows as f64 * cell_size, cell_size, cell_size)
    }

    /// Planimetric area of one cell.
    pub fn cell_area(&self) -> f64 {
        self.cell_width * self.cell_height
    }

    /// World coordinates of the center of cell `(row, col)`.
    pub fn cell_center(&self, row: u32, col: u32) -> (f64, f64) {
        (
            self.origin_x + (col as f64 + 0.5) * self.cell_width,
            self.origin_y - (row as f64 + 0.5) * self.cell_height,
        )
    }

    /// Extent of a `rows x cols` raster under this transform.
    pub fn extent(&self, rows: u32, cols: u32) -> Extent {
        Extent {
            min_x: self.origin_x,
            min_y: self.origin_y - rows as f64 * self.cell_height,
            max_x: self.origin_x + cols as f64 * self.cell_width,
            max_y: self.origin_y,
        }
    }

    /// Cell containing the world coordinate `(x, y)` (floor semantics).
    ///
    /// Coordinates outside the `rows x cols` grid fail with
    /// [`RasterError::CoordOutOfBounds`]; the eastern and southern edges
    /// are exclusive. Non-finite coordinates are outside every extent.
    pub fn world_to_cell(
        &self,
        x: f64,
        y: f64,
        rows: u32,
        cols: u32,
    ) -> Result<(u32, u32), RasterError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RasterError::CoordOutOfBounds {
                x,
                y,
                extent: self.extent(rows, cols),
            });
        }
        let col = ((x - self.origin_x) / self.cell_width).floor();
        let row = ((self.origin_y - y) / self.cell_height).floor();
        if col < 0.0 || col >= cols as f64 || row < 0.0 || row >= rows as f64 {
            return Err(RasterError::CoordOutOfBounds {
                x,
                y,
                extent: self.extent(rows, cols),
            });
        }
        Ok((row as u32, col as u32))
    }
}
