//! Board shape: bounds, parity, enumeration.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Which of the two triangle orientations a cell has.
///
/// Parity is derived from the coordinate, never stored. It governs which
/// edge of the cell is "vertical": black cells border the row above, white
/// cells border the row below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceColor {
    Black,
    White,
}

/// The fixed triangular board shape for a given row count.
///
/// Row 0 is the base and spans indices `0..2R-1`; every row `r` above it
/// spans `r..=2R-r`. The 3D embedding of the cells (positions, elevation
/// tiers) is a presentation concern and does not exist here. Only which
/// coordinates are cells, and how many there are, matters to the rules.
///
/// ```
/// use trigon::{Coord, Lattice};
///
/// let lattice = Lattice::new(7);
/// assert!(lattice.in_bounds(Coord::new(0, 12)));
/// assert!(!lattice.in_bounds(Coord::new(0, 13)));
/// assert_eq!(lattice.coord_count(), 61);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    rows: i32,
}

impl Lattice {
    /// Create a lattice with the given row count.
    #[must_use]
    pub fn new(rows: i32) -> Self {
        assert!(rows >= 2, "lattice needs at least 2 rows");
        Self { rows }
    }

    /// The configured row count.
    #[must_use]
    pub const fn rows(self) -> i32 {
        self.rows
    }

    /// Whether the coordinate names a cell on this board.
    ///
    /// The base row spans a different index range than the rows above it,
    /// reflecting the triangular shape.
    #[must_use]
    pub fn in_bounds(self, c: Coord) -> bool {
        let base_row = c.row == 0 && 0 <= c.index && c.index < 2 * self.rows - 1;
        base_row
            || (0 < c.row
                && c.row < self.rows
                && c.row <= c.index
                && c.index <= 2 * self.rows - c.row)
    }

    /// Whether the cell is black.
    ///
    /// Black is even parity on row 0 and odd parity everywhere else.
    #[must_use]
    pub fn is_black(self, c: Coord) -> bool {
        let even = (c.row + c.index).rem_euclid(2) == 0;
        (even && c.row == 0) || (!even && c.row > 0)
    }

    /// The cell's color.
    #[must_use]
    pub fn color(self, c: Coord) -> SpaceColor {
        if self.is_black(c) {
            SpaceColor::Black
        } else {
            SpaceColor::White
        }
    }

    /// Enumerate every cell, row-major from the base row upward.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let rows = self.rows;
        (0..rows).flat_map(move |row| {
            let (lo, hi) = if row == 0 {
                (0, 2 * rows - 2)
            } else {
                (row, 2 * rows - row)
            };
            (lo..=hi).map(move |index| Coord::new(row, index))
        })
    }

    /// Total number of cells.
    #[must_use]
    pub fn coord_count(self) -> usize {
        self.coords().count()
    }
}
