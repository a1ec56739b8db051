//! The elevation sweep: orchestrates connectivity and volume
//! accumulation into the finished stage-storage curve.

use std::time::Instant;

use impound_core::{PlotDescriptor, Seed, StageCurve};
use impound_raster::Dem;

use crate::bounded::BoundedRegion;
use crate::config::SweepConfig;
use crate::error::SweepError;
use crate::flood::FloodFront;
use crate::metrics::SweepMetrics;
use crate::volume::VolumeAccumulator;

/// Result of one stage-curve computation.
///
/// The plot descriptor is built from the finished curve, so the table
/// and the graph a caller exports can never disagree.
#[derive(Clone, Debug)]
pub struct StageSweep {
    /// The ordered stage-storage table.
    pub curve: StageCurve,
    /// Graph description derived from `curve`.
    pub plot: PlotDescriptor,
    /// Counters for this invocation.
    pub metrics: SweepMetrics,
}

/// Compute the stage-storage curve for `seed` over `dem`.
///
/// Sweeps the water surface upward from the seed (outlet cell or
/// polygon minimum) elevation in steps of `config.step`, emitting one
/// row per level starting with the mandatory zero row at the baseline.
/// The sweep stops once the level reaches the terrain maximum of the
/// relevant extent (the whole DEM in outlet mode, the polygon interior
/// in drainage mode) or exceeds `config.max_level`.
///
/// Any raster failure aborts the whole computation; a partial curve is
/// never returned.
pub fn build_stage_curve(
    dem: &dyn Dem,
    seed: &Seed,
    config: &SweepConfig,
) -> Result<StageSweep, SweepError> {
    config.validate()?;
    let start = Instant::now();
    let (curve, mut metrics) = match seed {
        Seed::Outlet { x, y } => sweep_outlet(dem, *x, *y, config)?,
        Seed::Drainage(polygon) => sweep_drainage(dem, polygon, config)?,
    };
    metrics.sweep_us = start.elapsed().as_micros() as u64;
    let plot = PlotDescriptor::from_curve(&curve);
    Ok(StageSweep {
        curve,
        plot,
        metrics,
    })
}

fn sweep_outlet(
    dem: &dyn Dem,
    x: f64,
    y: f64,
    config: &SweepConfig,
) -> Result<(StageCurve, SweepMetrics), SweepError> {
    let (row, col) = dem
        .world_to_cell(x, y)
        .map_err(|_| SweepError::SeedOutsideDem { x, y })?;
    let mut front = FloodFront::new(dem, config.connectivity, row, col)?;
    let baseline = front.seed_elevation();
    // The flood can climb to the highest terrain it can reach.
    let ceiling = dem.max_elevation()?.unwrap_or(baseline);

    let mut acc = VolumeAccumulator::new(dem.cell_area());
    let mut curve = StageCurve::default();
    let mut metrics = SweepMetrics::default();

    curve.push(acc.advance(baseline, &[]));
    metrics.levels = 1;

    for i in 1u64.. {
        let level = baseline + i as f64 * config.step;
        if config.max_level.is_some_and(|max| level > max) {
            break;
        }
        let delta = front.raise_to(level, dem)?;
        curve.push(acc.advance(level, &delta));
        metrics.levels += 1;
        // Stop once the surface has reached the highest reachable
        // terrain; exhaustion ends walled-off basins sooner.
        if level >= ceiling || front.is_exhausted() {
            break;
        }
    }
    metrics.cells_visited = front.cells_visited();
    metrics.cells_wetted = front.cells_wetted();
    Ok((curve, metrics))
}

fn sweep_drainage(
    dem: &dyn Dem,
    polygon: &impound_core::Polygon,
    config: &SweepConfig,
) -> Result<(StageCurve, SweepMetrics), SweepError> {
    let mut region = BoundedRegion::new(dem, polygon)?;
    let baseline = region.min_elevation();
    let ceiling = region.max_elevation();

    let mut acc = VolumeAccumulator::new(dem.cell_area());
    let mut curve = StageCurve::default();
    let mut metrics = SweepMetrics::default();

    curve.push(acc.advance(baseline, &[]));
    metrics.levels = 1;

    for i in 1u64.. {
        let level = baseline + i as f64 * config.step;
        if config.max_level.is_some_and(|max| level > max) {
            break;
        }
        let delta = region.raise_to(level);
        curve.push(acc.advance(level, delta));
        metrics.levels += 1;
        if level >= ceiling || region.is_exhausted() {
            break;
        }
    }
    metrics.cells_visited = region.candidates_tested();
    metrics.cells_wetted = region.cells_wetted();
    Ok((curve, metrics))
}
