//! Plot descriptor built from a finished stage-storage curve.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::StageCurve;

/// One plotted series: paired x/y columns with a display label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Legend label.
    pub label: String,
    /// X values (water-surface elevation).
    pub x: Vec<f64>,
    /// Y values (area or volume).
    pub y: Vec<f64>,
}

/// In-memory description of the stage-storage graph.
///
/// Built from a [`StageCurve`] only, so the exported table and the
/// exported graph can never disagree. Series iterate in insertion
/// order: area first, volume second.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotDescriptor {
    /// Figure title.
    pub title: String,
    /// Shared x-axis label.
    pub x_label: String,
    /// Series keyed by a stable name (`"area"`, `"volume"`).
    pub series: IndexMap<String, PlotSeries>,
}

impl PlotDescriptor {
    /// Series key for the area-vs-height curve.
    pub const AREA: &'static str = "area";
    /// Series key for the volume-vs-height curve.
    pub const VOLUME: &'static str = "volume";

    /// Build the two-series descriptor (area and volume against height)
    /// from a finished curve.
    pub fn from_curve(curve: &StageCurve) -> Self {
        let heights: Vec<f64> = curve.heights().collect();
        let mut series = IndexMap::with_capacity(2);
        series.insert(
            Self::AREA.to_string(),
            PlotSeries {
                label: "Area (m2)".to_string(),
                x: heights.clone(),
                y: curve.areas().collect(),
            },
        );
        series.insert(
            Self::VOLUME.to_string(),
            PlotSeries {
                label: "Volume (m3)".to_string(),
                x: heights,
                y: curve.volumes().collect(),
            },
        );
        Self {
            title: "Stage-storage curve".to_string(),
            x_label: "Height (m)".to_string(),
            series,
        }
    }
}
