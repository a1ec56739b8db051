//! Error types for the core data model.

use std::fmt;

/// Errors arising from geometry construction.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A polygon ring needs at least three distinct vertices.
    TooFewVertices {
        /// Number of distinct vertices supplied.
        count: usize,
    },
    /// A vertex coordinate is NaN or infinite.
    NonFiniteVertex {
        /// Index of the offending vertex in the input ring.
        index: usize,
    },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 distinct vertices, got {count}")
            }
            Self::NonFiniteVertex { index } => {
                write!(f, "polygon vertex {index} is not finite")
            }
        }
    }
}

impl std::error::Error for GeomError {}
