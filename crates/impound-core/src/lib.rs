//! Core data model for the impound stage-storage toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the types exchanged between the sweep engine and its callers: the
//! stage-storage table ([`StageRecord`], [`StageCurve`]), the plot
//! descriptor built from it ([`PlotDescriptor`]), and the seed model
//! ([`Seed`], [`Polygon`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod geom;
mod plot;
mod record;
mod seed;

pub use error::GeomError;
pub use geom::Polygon;
pub use plot::{PlotDescriptor, PlotSeries};
pub use record::{StageCurve, StageRecord};
pub use seed::Seed;
