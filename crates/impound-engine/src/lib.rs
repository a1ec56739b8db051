//! Elevation-sweep engine computing stage-storage curves.
//!
//! Drives a fixed-step elevation sweep over a DEM from an outlet point
//! (priority flood) or inside a drainage polygon (elevation filter),
//! accumulating inundated area and impounded volume per level. The
//! entry point is [`build_stage_curve`]; everything it returns is built
//! from the data model in `impound-core`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bounded;
mod config;
mod error;
mod flood;
mod metrics;
mod sweep;
mod volume;

pub use bounded::BoundedRegion;
pub use config::SweepConfig;
pub use error::SweepError;
pub use flood::FloodFront;
pub use metrics::SweepMetrics;
pub use sweep::{build_stage_curve, StageSweep};
pub use volume::VolumeAccumulator;
