//! Fully resident in-memory DEM.

use crate::dem::Dem;
use crate::error::RasterError;
use crate::transform::GridTransform;

/// A DEM held entirely in memory as a row-major `f64` buffer.
///
/// NoData is matched by bit-equality against the optional sentinel;
/// non-finite samples (NaN or infinite) are always NoData regardless of
/// the sentinel, so every elevation the engine sees is finite. Sampling
/// never fails once construction has validated the buffer.
#[derive(Clone, Debug)]
pub struct MemoryDem {
    rows: u32,
    cols: u32,
    transform: GridTransform,
    nodata: Option<f64>,
    data: Vec<f64>,
}

impl MemoryDem {
    /// Build a DEM from a row-major elevation buffer.
    ///
    /// Fails on zero dimensions or a buffer whose length is not
    /// `rows * cols`.
    pub fn new(
        rows: u32,
        cols: u32,
        transform: GridTransform,
        nodata: Option<f64>,
        data: Vec<f64>,
    ) -> Result<Self, RasterError> {
        if rows == 0 || cols == 0 {
            return Err(RasterError::EmptyRaster);
        }
        let expected = rows as usize * cols as usize;
        if data.len() != expected {
            return Err(RasterError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            transform,
            nodata,
            data,
        })
    }

    /// The NoData sentinel, if any.
    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// The raw row-major elevation buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    fn index(&self, row: u32, col: u32) -> Result<usize, RasterError> {
        if row >= self.rows || col >= self.cols {
            return Err(RasterError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }
}

impl Dem for MemoryDem {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn transform(&self) -> GridTransform {
        self.transform
    }

    fn sample(&self, row: u32, col: u32) -> Result<Option<f64>, RasterError> {
        let v = self.data[self.index(row, col)?];
        if !v.is_finite() {
            return Ok(None);
        }
        if let Some(sentinel) = self.nodata {
            if v.to_bits() == sentinel.to_bits() {
                return Ok(None);
            }
        }
        Ok(Some(v))
    }
}
