//! Shared terrain builders for the impound benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use impound_raster::{GridTransform, MemoryDem};

/// A paraboloid bowl: deepest at the center, rising toward the border.
///
/// Produces smooth terrain so the flood frontier grows a little at
/// every level, which is the representative workload for the sweep.
pub fn paraboloid_dem(n: u32, cell: f64) -> MemoryDem {
    let c = (n as f64 - 1.0) / 2.0;
    let scale = 10.0 / (c * c).max(1.0);
    let values: Vec<f64> = (0..n)
        .flat_map(|r| {
            (0..n).map(move |col| {
                let dr = r as f64 - c;
                let dc = col as f64 - c;
                (dr * dr + dc * dc) * scale
            })
        })
        .collect();
    let transform = GridTransform::new(0.0, n as f64 * cell, cell, cell).unwrap();
    MemoryDem::new(n, n, transform, None, values).unwrap()
}
