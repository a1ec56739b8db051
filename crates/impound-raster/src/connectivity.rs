//! 4- and 8-connected neighbour rules for raster cells.

use smallvec::SmallVec;

/// Neighbour rule for cell traversal, chosen once per computation.
///
/// `Four` is the conservative ponding rule: water cannot pass
/// diagonally between two corner-touching cells. `Eight` additionally
/// connects diagonals. Grid edges absorb — border cells simply have
/// fewer neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Cardinal neighbours only (N/S/E/W).
    #[default]
    Four,
    /// Cardinal plus diagonal neighbours.
    Eight,
}

impl Connectivity {
    const FOUR: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    const EIGHT: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// The `(d_row, d_col)` offset table for this rule.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &Self::FOUR,
            Self::Eight => &Self::EIGHT,
        }
    }

    /// Maximum neighbour count under this rule.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    /// In-bounds neighbours of `(row, col)` on a `rows x cols` grid.
    pub fn neighbours(
        self,
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    ) -> SmallVec<[(u32, u32); 8]> {
        let mut result = SmallVec::new();
        for &(dr, dc) in self.offsets() {
            let nr = row as i64 + dr as i64;
            let nc = col as i64 + dc as i64;
            if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                result.push((nr as u32, nc as u32));
            }
        }
        result
    }
}
