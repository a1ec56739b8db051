//! Test fixtures and mock DEMs for impound development.
//!
//! Provides synthetic terrain builders ([`flat_dem`], [`bowl_dem`],
//! [`dem_from_grid`]) and instrumented [`Dem`] wrappers
//! ([`CountingDem`], [`FailingDem`]) for error-path and cost-bound
//! testing.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};

use impound_raster::{Dem, GridTransform, MemoryDem, RasterError};

/// Conventional GIS NoData sentinel used by all fixtures.
pub const NODATA: f64 = -9999.0;

/// A uniform-elevation DEM with unit cells, top-left at the origin.
pub fn flat_dem(rows: u32, cols: u32, z: f64) -> MemoryDem {
    dem_from_grid(rows, cols, 1.0, &vec![z; rows as usize * cols as usize])
}

/// Build a unit-origin DEM from explicit row-major values.
///
/// Cells are `cell x cell` world units; the sentinel is [`NODATA`].
pub fn dem_from_grid(rows: u32, cols: u32, cell: f64, values: &[f64]) -> MemoryDem {
    let transform = GridTransform::new(0.0, rows as f64 * cell, cell, cell).unwrap();
    MemoryDem::new(rows, cols, transform, Some(NODATA), values.to_vec()).unwrap()
}

/// A square bowl: elevation is the Chebyshev distance from the center
/// cell, so the pit deepens toward the middle and the rim is the border.
///
/// `n` should be odd so the bowl has a single bottom cell.
pub fn bowl_dem(n: u32, cell: f64) -> MemoryDem {
    let c = (n / 2) as i64;
    let values: Vec<f64> = (0..n as i64)
        .flat_map(|r| (0..n as i64).map(move |col| (r - c).abs().max((col - c).abs()) as f64))
        .collect();
    dem_from_grid(n, n, cell, &values)
}

/// Wraps a DEM and counts every `sample` call.
///
/// Lets tests assert total raster traffic, cross-checking the engine's
/// own visit metrics.
pub struct CountingDem<D> {
    inner: D,
    samples: AtomicUsize,
}

impl<D: Dem> CountingDem<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            samples: AtomicUsize::new(0),
        }
    }

    /// Number of `sample` calls observed so far.
    pub fn samples(&self) -> usize {
        self.samples.load(Ordering::Relaxed)
    }
}

impl<D: Dem> Dem for CountingDem<D> {
    fn rows(&self) -> u32 {
        self.inner.rows()
    }

    fn cols(&self) -> u32 {
        self.inner.cols()
    }

    fn transform(&self) -> GridTransform {
        self.inner.transform()
    }

    fn sample(&self, row: u32, col: u32) -> Result<Option<f64>, RasterError> {
        self.samples.fetch_add(1, Ordering::Relaxed);
        self.inner.sample(row, col)
    }
}

/// Fails deterministically after a configurable number of successful
/// samples.
///
/// Useful for testing that a read failure mid-sweep aborts the
/// computation without producing a partial curve. The counter is
/// atomic because `sample` takes `&self`.
pub struct FailingDem<D> {
    inner: D,
    succeed_count: usize,
    call_count: AtomicUsize,
}

impl<D: Dem> FailingDem<D> {
    /// Create a DEM that serves `succeed_count` samples then fails.
    pub fn new(inner: D, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }
}

impl<D: Dem> Dem for FailingDem<D> {
    fn rows(&self) -> u32 {
        self.inner.rows()
    }

    fn cols(&self) -> u32 {
        self.inner.cols()
    }

    fn transform(&self) -> GridTransform {
        self.inner.transform()
    }

    fn sample(&self, row: u32, col: u32) -> Result<Option<f64>, RasterError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(RasterError::ReadFailed {
                reason: format!("injected failure after {} samples", self.succeed_count),
            });
        }
        self.inner.sample(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bowl_is_deepest_at_center() {
        let dem = bowl_dem(5, 1.0);
        assert_eq!(dem.sample(2, 2).unwrap(), Some(0.0));
        assert_eq!(dem.sample(0, 0).unwrap(), Some(2.0));
        assert_eq!(dem.sample(2, 0).unwrap(), Some(2.0));
        assert_eq!(dem.sample(1, 1).unwrap(), Some(1.0));
    }

    #[test]
    fn counting_dem_counts() {
        let dem = CountingDem::new(flat_dem(2, 2, 0.0));
        dem.sample(0, 0).unwrap();
        dem.sample(1, 1).unwrap();
        assert_eq!(dem.samples(), 2);
    }

    #[test]
    fn failing_dem_fails_on_schedule() {
        let dem = FailingDem::new(flat_dem(2, 2, 0.0), 1);
        assert!(dem.sample(0, 0).is_ok());
        assert!(matches!(
            dem.sample(0, 1),
            Err(RasterError::ReadFailed { .. })
        ));
    }
}
