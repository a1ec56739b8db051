//! Impound: stage-storage curve computation for reservoirs and
//! depressions on DEM rasters.
//!
//! Given an elevation raster and either an outlet point or a
//! drainage-area polygon, impound sweeps the water surface upward in
//! fixed vertical steps and reports, per level, the inundated area and
//! impounded volume — the stage-storage curve — plus a plot descriptor
//! and writers for a delimited table and an interactive HTML graph.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all impound sub-crates; adding `impound` as a single dependency is
//! sufficient for most users.
//!
//! # Quick start
//!
//! ```rust
//! use impound::prelude::*;
//!
//! // A 3x3 DEM, elevation 0 everywhere except a 1-unit-deep pit.
//! let mut values = vec![0.0; 9];
//! values[4] = -1.0;
//! let transform = GridTransform::new(0.0, 3.0, 1.0, 1.0).unwrap();
//! let dem = MemoryDem::new(3, 3, transform, None, values).unwrap();
//!
//! // Outlet at the pit, 1 m vertical step.
//! let (x, y) = dem.cell_center(1, 1);
//! let seed = Seed::Outlet { x, y };
//! let config = SweepConfig { step: 1.0, ..Default::default() };
//!
//! let result = build_stage_curve(&dem, &seed, &config).unwrap();
//! assert_eq!(result.curve.len(), 2);
//! assert_eq!(result.curve.records[1].volume, 1.0);
//!
//! // Export both renderings of the same curve.
//! let table = impound::export::table_string(&result.curve);
//! assert!(table.starts_with("Area (m2),Height (m),Volume (m3)"));
//! let html = impound::export::html_string(&result.plot).unwrap();
//! assert!(html.contains("Plotly.newPlot"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `impound-core` | Stage records, curve, plot descriptor, seed, polygon |
//! | [`raster`] | `impound-raster` | `Dem` trait, `MemoryDem`, transform, connectivity |
//! | [`engine`] | `impound-engine` | The elevation-sweep engine and its configuration |
//! | [`export`] | `impound-export` | Delimited table and HTML graph writers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`impound-core`).
///
/// The stage-storage table ([`model::StageCurve`]), the plot descriptor
/// built from it, and the seed model ([`model::Seed`],
/// [`model::Polygon`]).
pub use impound_core as model;

/// DEM raster access (`impound-raster`).
///
/// The read-only [`raster::Dem`] trait, the resident
/// [`raster::MemoryDem`], world/cell transforms, and the
/// [`raster::Connectivity`] neighbour rule.
pub use impound_raster as raster;

/// The elevation-sweep engine (`impound-engine`).
///
/// [`engine::build_stage_curve`] is the single computation entry
/// point; [`engine::SweepConfig`] selects step, ceiling, and
/// connectivity.
pub use impound_engine as engine;

/// Table and graph writers (`impound-export`).
///
/// [`export::write_table`] and [`export::write_html`] render the two
/// always-consistent views of a finished curve.
pub use impound_export as export;

/// Common imports for typical impound usage.
///
/// ```rust
/// use impound::prelude::*;
/// ```
pub mod prelude {
    pub use impound_core::{
        GeomError, PlotDescriptor, PlotSeries, Polygon, Seed, StageCurve, StageRecord,
    };
    pub use impound_engine::{
        build_stage_curve, StageSweep, SweepConfig, SweepError, SweepMetrics,
    };
    pub use impound_export::{write_html, write_table};
    pub use impound_raster::{Connectivity, Dem, Extent, GridTransform, MemoryDem, RasterError};
}
