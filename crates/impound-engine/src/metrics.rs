//! Per-invocation performance metrics for the sweep engine.
//!
//! [`SweepMetrics`] captures counters for a single stage-curve
//! computation. The cell counters are the instrumentation backing the
//! linear-cost guarantee: across a whole sweep each raster cell is
//! visited at most once, independent of the number of levels.

/// Counters collected during a single stage-curve computation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepMetrics {
    /// Number of elevation levels emitted (rows in the curve).
    pub levels: u64,
    /// Distinct cells examined: flood-fill frontier discoveries plus the
    /// seed, or polygon candidate cells tested. Bounded by the cell
    /// count of the raster, never by `levels x cells`.
    pub cells_visited: u64,
    /// Cells that ended up under water (admitted to the inundated set).
    pub cells_wetted: u64,
    /// Wall-clock time for the whole computation, in microseconds.
    pub sweep_us: u64,
}
