//! Property suites for the sweep invariants over random terrain.

use impound_core::{Polygon, Seed};
use impound_engine::{build_stage_curve, SweepConfig};
use impound_raster::{Connectivity, Dem};
use impound_test_utils::dem_from_grid;
use proptest::prelude::*;

fn arb_connectivity() -> impl Strategy<Value = Connectivity> {
    prop_oneof![Just(Connectivity::Four), Just(Connectivity::Eight)]
}

proptest! {
    #[test]
    fn outlet_sweep_invariants(
        rows in 1u32..7,
        cols in 1u32..7,
        values in proptest::collection::vec(-10.0f64..10.0, 49),
        step in 0.1f64..3.0,
        seed_r in 0u32..7,
        seed_c in 0u32..7,
        connectivity in arb_connectivity(),
    ) {
        let n = (rows * cols) as usize;
        let dem = dem_from_grid(rows, cols, 1.0, &values[..n]);
        let (x, y) = dem.cell_center(seed_r % rows, seed_c % cols);
        let config = SweepConfig { step, max_level: None, connectivity };

        let out = build_stage_curve(&dem, &Seed::Outlet { x, y }, &config).unwrap();
        let records = &out.curve.records;

        // Zero row at the seed elevation.
        prop_assert!(!records.is_empty());
        prop_assert_eq!(records[0].area, 0.0);
        prop_assert_eq!(records[0].volume, 0.0);

        // Gap-free ladder, monotone storage.
        for pair in records.windows(2) {
            prop_assert!((pair[1].height - pair[0].height - step).abs() < 1e-9);
            prop_assert!(pair[1].area >= pair[0].area);
            prop_assert!(pair[1].volume >= pair[0].volume);
        }

        // Visits bounded by the cell count, not the level count.
        prop_assert!(out.metrics.cells_visited <= n as u64);
        prop_assert_eq!(out.metrics.levels, records.len() as u64);

        // Identical inputs reproduce the identical curve.
        let again = build_stage_curve(&dem, &Seed::Outlet { x, y }, &config).unwrap();
        prop_assert_eq!(&again.curve, &out.curve);
    }

    #[test]
    fn drainage_sweep_invariants(
        rows in 1u32..7,
        cols in 1u32..7,
        values in proptest::collection::vec(-10.0f64..10.0, 49),
        step in 0.1f64..3.0,
    ) {
        let n = (rows * cols) as usize;
        let dem = dem_from_grid(rows, cols, 1.0, &values[..n]);
        let extent = dem.extent();
        let polygon = Polygon::new(vec![
            (extent.min_x - 1.0, extent.min_y - 1.0),
            (extent.max_x + 1.0, extent.min_y - 1.0),
            (extent.max_x + 1.0, extent.max_y + 1.0),
            (extent.min_x - 1.0, extent.max_y + 1.0),
        ]).unwrap();
        let config = SweepConfig { step, max_level: None, connectivity: Connectivity::Four };

        let out = build_stage_curve(&dem, &Seed::Drainage(polygon), &config).unwrap();
        let records = &out.curve.records;

        prop_assert_eq!(records[0].area, 0.0);
        prop_assert_eq!(records[0].volume, 0.0);
        for pair in records.windows(2) {
            prop_assert!((pair[1].height - pair[0].height - step).abs() < 1e-9);
            prop_assert!(pair[1].area >= pair[0].area);
            prop_assert!(pair[1].volume >= pair[0].volume);
        }
        // Area can never exceed the polygon interior.
        let max_area = n as f64 * dem.cell_area();
        prop_assert!(records.iter().all(|r| r.area <= max_area + 1e-9));
    }
}
