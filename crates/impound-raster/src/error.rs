//! Error types for raster construction and access.

use std::fmt;

use crate::transform::Extent;

/// Errors arising from raster construction or cell access.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterError {
    /// Attempted to construct a raster with zero rows or columns.
    EmptyRaster,
    /// The elevation buffer does not match `rows * cols`.
    DataLengthMismatch {
        /// Expected number of samples.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },
    /// Cell width or height is zero, negative, or non-finite.
    NonPositiveCellSize {
        /// The offending cell width.
        width: f64,
        /// The offending cell height.
        height: f64,
    },
    /// A `(row, col)` index lies outside the grid.
    CellOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A world coordinate lies outside the raster extent.
    CoordOutOfBounds {
        /// Easting of the coordinate.
        x: f64,
        /// Northing of the coordinate.
        y: f64,
        /// The raster extent that does not contain it.
        extent: Extent,
    },
    /// The raster source failed to produce a sample.
    ReadFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRaster => write!(f, "raster must have at least one cell"),
            Self::DataLengthMismatch { expected, actual } => {
                write!(f, "elevation buffer has {actual} samples, expected {expected}")
            }
            Self::NonPositiveCellSize { width, height } => {
                write!(f, "cell size {width} x {height} is not positive and finite")
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "cell ({row}, {col}) out of bounds: {rows} x {cols} grid")
            }
            Self::CoordOutOfBounds { x, y, extent } => {
                write!(f, "coordinate ({x}, {y}) outside raster extent {extent}")
            }
            Self::ReadFailed { reason } => write!(f, "raster read failed: {reason}"),
        }
    }
}

impl std::error::Error for RasterError {}
