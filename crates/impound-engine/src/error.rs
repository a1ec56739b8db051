//! Error types for the sweep engine.

use std::error::Error;
use std::fmt;

use impound_raster::RasterError;

/// Errors from a single stage-curve computation.
///
/// All variants are terminal for the invocation: the engine performs no
/// retries, and every pre-sweep condition is checked before any sweep
/// state exists.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepError {
    /// The vertical step is zero, negative, or non-finite.
    InvalidStep {
        /// The rejected step value.
        value: f64,
    },
    /// The caller-supplied maximum level is non-finite.
    InvalidMaxLevel {
        /// The rejected value.
        value: f64,
    },
    /// The outlet coordinate lies outside the DEM extent.
    SeedOutsideDem {
        /// Easting of the outlet.
        x: f64,
        /// Northing of the outlet.
        y: f64,
    },
    /// The outlet cell holds NoData.
    SeedIsNoData {
        /// Row of the seed cell.
        row: u32,
        /// Column of the seed cell.
        col: u32,
    },
    /// The drainage polygon does not intersect the DEM extent.
    DrainageOutsideDem,
    /// The drainage polygon contains no cell centers.
    EmptyDrainageRegion,
    /// Every cell inside the drainage polygon holds NoData.
    DrainageAllNoData,
    /// The raster failed during the computation; no curve is produced.
    Raster(RasterError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStep { value } => {
                write!(f, "vertical step must be positive and finite, got {value}")
            }
            Self::InvalidMaxLevel { value } => {
                write!(f, "maximum level must be finite, got {value}")
            }
            Self::SeedOutsideDem { x, y } => {
                write!(f, "outlet ({x}, {y}) lies outside the DEM extent")
            }
            Self::SeedIsNoData { row, col } => {
                write!(f, "outlet cell ({row}, {col}) is NoData")
            }
            Self::DrainageOutsideDem => {
                write!(f, "drainage polygon does not intersect the DEM extent")
            }
            Self::EmptyDrainageRegion => {
                write!(f, "drainage polygon contains no cell centers")
            }
            Self::DrainageAllNoData => {
                write!(f, "every cell inside the drainage polygon is NoData")
            }
            Self::Raster(e) => write!(f, "raster: {e}"),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for SweepError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}
