//! DEM raster access layer for the impound stage-storage toolkit.
//!
//! Exposes the read-only [`Dem`] trait the sweep engine computes over,
//! a fully resident [`MemoryDem`] implementation, the north-up
//! [`GridTransform`] between world and cell coordinates, and the
//! [`Connectivity`] neighbour rule (4- or 8-connected, chosen once per
//! computation).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod connectivity;
mod dem;
mod error;
mod grid;
mod transform;

pub use connectivity::Connectivity;
pub use dem::Dem;
pub use error::RasterError;
pub use grid::MemoryDem;
pub use transform::{Extent, GridTransform};
