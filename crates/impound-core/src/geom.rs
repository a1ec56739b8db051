//! Polygon geometry for drainage-area boundaries.

use crate::error::GeomError;

/// A simple closed polygon ring in DEM coordinates.
///
/// The ring is stored open (no repeated closing vertex); construction
/// drops a supplied closing vertex. Containment uses the even-odd
/// ray-casting rule, so self-intersecting rings behave like their
/// even-odd interior. Holes are not modelled — a drainage-area boundary
/// is a single outer ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<(f64, f64)>,
}

impl Polygon {
    /// Build a polygon from a vertex ring.
    ///
    /// Rejects rings with non-finite coordinates or fewer than three
    /// distinct vertices.
    pub fn new(mut vertices: Vec<(f64, f64)>) -> Result<Self, GeomError> {
        for (i, &(x, y)) in vertices.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(GeomError::NonFiniteVertex { index: i });
            }
        }
        if vertices.len() > 3 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        let mut distinct = vertices.clone();
        distinct.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        distinct.dedup();
        if distinct.len() < 3 {
            return Err(GeomError::TooFewVertices {
                count: distinct.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// The vertex ring, in input order, without a closing vertex.
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Axis-aligned bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &(x, y) in &self.vertices {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Even-odd ray-casting containment test for point `(x, y)`.
    ///
    /// Points exactly on an edge may land on either side; cell centers
    /// tested by the engine almost never coincide with boundary edges,
    /// and either answer is acceptable there.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = self.vertices[i];
            let (xj, yj) = self.vertices[j];
            if (yi > y) != (yj > y) {
                let x_cross = (xj - xi) * (y - yi) / (yj - yi) + xi;
                if x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap()
    }

    #[test]
    fn new_rejects_degenerate_rings() {
        assert!(matches!(
            Polygon::new(vec![(0.0, 0.0), (1.0, 1.0)]),
            Err(GeomError::TooFewVertices { count: 2 })
        ));
        // Three vertices, but only two distinct.
        assert!(matches!(
            Polygon::new(vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            Err(GeomError::TooFewVertices { .. })
        ));
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(matches!(
            Polygon::new(vec![(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0)]),
            Err(GeomError::NonFiniteVertex { index: 1 })
        ));
    }

    #[test]
    fn new_drops_closing_vertex() {
        let p = Polygon::new(vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(p.vertices().len(), 4);
    }

    #[test]
    fn contains_square() {
        let p = unit_square();
        assert!(p.contains(2.0, 2.0));
        assert!(p.contains(0.5, 3.5));
        assert!(!p.contains(-1.0, 2.0));
        assert!(!p.contains(2.0, 5.0));
        assert!(!p.contains(4.5, 4.5));
    }

    #[test]
    fn contains_concave() {
        // L-shape: the notch at the top-right is outside.
        let p = Polygon::new(vec![
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ])
        .unwrap();
        assert!(p.contains(1.0, 3.0));
        assert!(p.contains(3.0, 1.0));
        assert!(!p.contains(3.0, 3.0));
    }

    #[test]
    fn bounding_box_covers_ring() {
        let p = Polygon::new(vec![(1.0, -2.0), (5.0, 0.5), (3.0, 7.0)]).unwrap();
        assert_eq!(p.bounding_box(), (1.0, -2.0, 5.0, 7.0));
    }

    proptest::proptest! {
        #[test]
        fn containment_implies_inside_bounding_box(
            x in -20.0f64..20.0,
            y in -20.0f64..20.0,
            vx in proptest::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 3..8),
        ) {
            if let Ok(p) = Polygon::new(vx) {
                if p.contains(x, y) {
                    let (min_x, min_y, max_x, max_y) = p.bounding_box();
                    proptest::prop_assert!(x >= min_x && x <= max_x);
                    proptest::prop_assert!(y >= min_y && y <= max_y);
                }
            }
        }
    }
}
