//! Seed selection: outlet point or drainage-area boundary.

use crate::geom::Polygon;

/// Where the sweep starts.
///
/// Exactly one seed kind exists per computation — the enum makes the
/// outlet/drainage mutual exclusion a type-level fact, so the engine
/// never has to arbitrate between both being supplied. Callers that
/// collect both inputs must resolve the conflict before constructing a
/// `Seed`.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// An outlet point in DEM coordinates; flood-fill mode.
    Outlet {
        /// Easting of the outlet.
        x: f64,
        /// Northing of the outlet.
        y: f64,
    },
    /// A drainage-area boundary; bounded (filter) mode.
    Drainage(Polygon),
}
