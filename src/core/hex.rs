//! Hex coordinates on the dense square storage grid.
//!
//! The board is stored as an `n×n` array with `n = 2k+1`. A cell `(col, row)`
//! belongs to the playable hexagon iff `|col - row| ≤ k`, which is the same
//! as lying within hex-distance `k` of the center `(k, k)`.
//!
//! ## Directions
//!
//! The six neighbor offsets are indexed by sun position, so
//! `DIRECTIONS[sun]` is the direction a shadow ray travels when the sun
//! stands at `sun`.

use serde::{Deserialize, Serialize};

/// Neighbor offsets `(Δcol, Δrow)`, indexed by sun position.
pub const DIRECTIONS: [(i32, i32); 6] = [(-1, -1), (0, -1), (1, 0), (1, 1), (0, 1), (-1, 0)];

/// A cell address in the storage grid.
///
/// Ordered by column then row so that sets of hexes iterate
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub col: i32,
    pub row: i32,
}

impl Hex {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The center cell of a board with radius `k`.
    #[must_use]
    pub const fn center(radius: u8) -> Self {
        Self::new(radius as i32, radius as i32)
    }

    /// Exact hex-grid distance in O(1).
    ///
    /// When both deltas share a sign one diagonal step covers a unit of each,
    /// so the distance collapses to the larger delta.
    ///
    /// ```
    /// use rust_psynth::core::Hex;
    ///
    /// assert_eq!(Hex::new(0, 0).distance(Hex::new(2, 2)), 2);
    /// assert_eq!(Hex::new(0, 2).distance(Hex::new(2, 0)), 4);
    /// ```
    #[must_use]
    pub fn distance(self, other: Hex) -> u32 {
        let dc = other.col - self.col;
        let dr = other.row - self.row;
        if dc.signum() * dr.signum() > 0 {
            dc.unsigned_abs().max(dr.unsigned_abs())
        } else {
            dc.unsigned_abs() + dr.unsigned_abs()
        }
    }

    /// Step `steps` cells along `DIRECTIONS[direction % 6]`.
    #[must_use]
    pub fn offset(self, direction: usize, steps: i32) -> Hex {
        let (dc, dr) = DIRECTIONS[direction % DIRECTIONS.len()];
        Hex::new(self.col + dc * steps, self.row + dr * steps)
    }

    /// The six adjacent cells, in direction order.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        (0..DIRECTIONS.len()).map(move |d| self.offset(d, 1))
    }

    /// Whether this cell lies inside the playable hexagon of radius `k`.
    #[must_use]
    pub fn is_addressable(self, radius: u8) -> bool {
        let n = 2 * radius as i32 + 1;
        (0..n).contains(&self.col)
            && (0..n).contains(&self.row)
            && (self.col - self.row).abs() <= radius as i32
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
