//! Legal-move generation.
//!
//! A piece may step to any adjacent cell: the two same-row neighbors plus
//! the one vertical neighbor its parity gives it. Black cells border the
//! row above, white cells the row below, with an index shift at the
//! base-row boundary.
//!
//! The `ignore_occupancy` switch drops the occupied-cell filter. It exists
//! for exactly one caller: the termination probe asking "where could the
//! Eye go if the board were empty", which distinguishes genuinely boxed
//! in from merely crowded.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::PieceKind;
use crate::geometry::Coord;

/// The legal destinations for a piece standing at `from`.
///
/// Candidates are produced in a fixed order (same-row left, same-row
/// right, vertical), then filtered by bounds and, unless
/// `ignore_occupancy`, by occupancy. The order is deterministic so that
/// seeded scripted turns replay identically.
///
/// The kind parameter does not change adjacency today; all kinds share
/// the same movement geometry.
#[must_use]
pub fn legal_moves(
    board: &BoardState,
    from: Coord,
    _kind: PieceKind,
    ignore_occupancy: bool,
) -> SmallVec<[Coord; 3]> {
    let lattice = board.lattice();

    let mut candidates: SmallVec<[Coord; 3]> = SmallVec::new();
    candidates.push(Coord::new(from.row, from.index - 1));
    candidates.push(Coord::new(from.row, from.index + 1));
    candidates.push(vertical_neighbor(from, lattice.is_black(from)));

    candidates
        .into_iter()
        .filter(|&c| lattice.in_bounds(c))
        .filter(|&c| ignore_occupancy || !board.is_occupied(c))
        .collect()
}

/// The neighbor across the cell's vertical edge.
///
/// Black cells point at the row above, white cells at the row below; the
/// base row's narrower-by-one span shifts the index at the boundary.
fn vertical_neighbor(from: Coord, black: bool) -> Coord {
    if black {
        if from.row == 0 {
            Coord::new(from.row + 1, from.index + 1)
        } else {
            Coord::new(from.row + 1, from.index)
        }
    } else if from.row == 1 {
        Coord::new(from.row - 1, from.index - 1)
    } else {
        Coord::new(from.row - 1, from.index)
    }
}
