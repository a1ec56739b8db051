//! Sweep configuration and validation.

use impound_raster::Connectivity;

use crate::error::SweepError;

/// Configuration for one stage-curve computation.
///
/// `validate()` runs before any raster access; an invalid step or
/// maximum level fails fast with no sweep state created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// Vertical step between successive water-surface elevations.
    /// Must be positive and finite.
    pub step: f64,
    /// Optional ceiling on the water-surface elevation; the sweep stops
    /// once the next level would exceed it. `None` sweeps to the
    /// terrain maximum.
    pub max_level: Option<f64>,
    /// Neighbour rule for flood-fill traversal, fixed for the whole
    /// computation. Ignored in drainage-polygon mode.
    pub connectivity: Connectivity,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            max_level: None,
            connectivity: Connectivity::default(),
        }
    }
}

impl SweepConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SweepError::InvalidStep { value: self.step });
        }
        if let Some(max) = self.max_level {
            if !max.is_finite() {
                return Err(SweepError::InvalidMaxLevel { value: max });
            }
        }
        Ok(())
    }
}
