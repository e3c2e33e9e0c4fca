//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A lattice coordinate: `(row, index)`.
///
/// Coordinates are immutable values compared by equality. `row` counts up
/// from the base of the triangle; `index` runs across a row. The valid
/// `index` span depends on the row (see [`Lattice::in_bounds`]), so a
/// `Coord` by itself is just an address; it may or may not name a cell on
/// a given board.
///
/// ```
/// use trigon::Coord;
///
/// let c = Coord::new(6, 7);
/// assert_eq!(c.row, 6);
/// assert_eq!(c.index, 7);
/// assert_eq!(c, Coord::new(6, 7));
/// ```
///
/// [`Lattice::in_bounds`]: super::Lattice::in_bounds
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Row, counted from the wide base row (0) toward the apex.
    pub row: i32,
    /// Position across the row.
    pub index: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i32, index: i32) -> Self {
        Self { row, index }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, index): (i32, i32)) -> Self {
        Self { row, index }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.index)
    }
}
