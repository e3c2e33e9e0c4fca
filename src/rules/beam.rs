//! Beam tracing: the Eye's line of sight.
//!
//! From the Eye's cell, three rays radiate along the lattice's axes. A
//! black Eye looks down the descending vertical and up both diagonals; a
//! white Eye looks up the ascending vertical and down both diagonals.
//! Diagonals cross two cells per depth because triangle orientation
//! alternates along them; verticals cross one.
//!
//! A live Blocker on a ray shadows everything behind it: once the
//! previously visited cell of a ray held a Blocker, that ray contributes
//! nothing at any greater depth. Each ray carries its own blocked state;
//! one ray going dark does not affect the other two.
//!
//! Tracing is a pure function of board state. The caller owns replacing
//! any previously computed set.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::PieceId;
use crate::geometry::Coord;

/// The set of cells the Eye currently sees.
///
/// A persistent set so snapshots attached to events clone in O(1).
pub type BeamSet = im::HashSet<Coord>;

/// The three ray directions, named from the black Eye's point of view.
/// A white Eye walks the same three axes with rows mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RayAxis {
    Vertical,
    RightDiagonal,
    LeftDiagonal,
}

const AXES: [RayAxis; 3] = [
    RayAxis::Vertical,
    RayAxis::RightDiagonal,
    RayAxis::LeftDiagonal,
];

/// Per-ray accumulator: the blocking rule lives here, once, instead of
/// being unrolled across direction branches.
#[derive(Clone, Copy, Debug)]
struct Ray {
    axis: RayAxis,
    prev: Coord,
    blocked: bool,
}

impl Ray {
    fn new(axis: RayAxis, origin: Coord) -> Self {
        Self {
            axis,
            prev: origin,
            blocked: false,
        }
    }

    /// The 1 or 2 cells this ray crosses at `depth` from `origin`.
    ///
    /// The base row spans one less index on each side than the rows
    /// above, so a ray landing on row 0 (or leaving row 1 upward) is
    /// shifted one column to stay on its axis.
    fn candidates(&self, origin: Coord, black: bool, depth: i32) -> SmallVec<[Coord; 2]> {
        let (u, a) = (origin.row, origin.index);
        let lo = i32::from(u - depth == 0);
        let hi = i32::from(u + depth == 1);

        let mut out = SmallVec::new();
        match (self.axis, black) {
            (RayAxis::Vertical, true) => {
                out.push(Coord::new(u - depth, a - lo));
            }
            (RayAxis::Vertical, false) => {
                out.push(Coord::new(u + depth, a + hi));
            }
            (RayAxis::RightDiagonal, true) => {
                out.push(Coord::new(u + depth, a + 3 * depth - 1 + hi));
                out.push(Coord::new(u + depth, a + 3 * depth + hi));
            }
            (RayAxis::RightDiagonal, false) => {
                out.push(Coord::new(u - depth, a + 3 * depth - 1 - lo));
                out.push(Coord::new(u - depth, a + 3 * depth - lo));
            }
            (RayAxis::LeftDiagonal, true) => {
                out.push(Coord::new(u + depth, a - 3 * depth + 1 + hi));
                out.push(Coord::new(u + depth, a - 3 * depth + hi));
            }
            (RayAxis::LeftDiagonal, false) => {
                out.push(Coord::new(u - depth, a - 3 * depth + 1 - lo));
                out.push(Coord::new(u - depth, a - 3 * depth - lo));
            }
        }
        out
    }

    /// Walk this ray one depth further, collecting visible cells.
    fn step(&mut self, board: &BoardState, origin: Coord, black: bool, depth: i32, beam: &mut BeamSet) {
        if self.blocked {
            return;
        }
        for cell in self.candidates(origin, black, depth) {
            if board.blocker_at(self.prev) {
                self.blocked = true;
                return;
            }
            if board.lattice().in_bounds(cell) {
                beam.insert(cell);
            }
            self.prev = cell;
        }
    }
}

/// Compute the beam from the current board.
///
/// Returns the empty set if no live Eye is on the board.
#[must_use]
pub fn trace(board: &BoardState) -> BeamSet {
    let Some(eye) = board.eye() else {
        return BeamSet::new();
    };
    let origin = eye.pos;
    let black = board.lattice().is_black(origin);

    let mut rays = AXES.map(|axis| Ray::new(axis, origin));
    let mut beam = BeamSet::new();
    for depth in 1..board.lattice().rows() {
        for ray in &mut rays {
            ray.step(board, origin, black, depth, &mut beam);
        }
    }
    beam
}

/// The pieces the beam captures: every live non-Blocker standing in it,
/// in arena order.
#[must_use]
pub fn hits(board: &BoardState, beam: &BeamSet) -> Vec<PieceId> {
    board
        .live_pieces()
        .filter(|p| p.kind.capturable() && beam.contains(&p.pos))
        .map(|p| p.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PieceKind};

    fn board_with(layout: Vec<(Coord, PieceKind)>) -> BoardState {
        let config = GameConfig {
            rows: 7,
            layout,
            ..GameConfig::standard()
        };
        BoardState::new(&config).unwrap()
    }

    #[test]
    fn test_starting_beam() {
        let board = BoardState::new(&GameConfig::standard()).unwrap();
        let beam = trace(&board);
        // The black Eye at (6, 7) sees straight down the descending
        // vertical, with the index shifted by one where the ray meets the
        // base row. Both diagonals point off the board.
        let expected: BeamSet = [
            Coord::new(5, 7),
            Coord::new(4, 7),
            Coord::new(3, 7),
            Coord::new(2, 7),
            Coord::new(1, 7),
            Coord::new(0, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(beam, expected);
        assert!(hits(&board, &beam).is_empty());
    }

    #[test]
    fn test_white_eye_diagonals() {
        let board = board_with(vec![(Coord::new(6, 6), PieceKind::Eye)]);
        let beam = trace(&board);
        // (6, 6) is white: the ascending vertical leaves the board, the
        // lower-left diagonal exits row 5's span immediately, and the
        // lower-right diagonal dies out after depth 1.
        let expected: BeamSet = [Coord::new(5, 8), Coord::new(5, 9)].into_iter().collect();
        assert_eq!(beam, expected);
    }

    #[test]
    fn test_blocker_shadows_ray() {
        // A Blocker on the first step of the descending ray: its own cell
        // is lit, everything behind it is dark.
        let board = board_with(vec![
            (Coord::new(6, 7), PieceKind::Eye),
            (Coord::new(5, 7), PieceKind::Blocker),
            (Coord::new(4, 7), PieceKind::Antler),
        ]);
        let beam = trace(&board);
        assert!(beam.contains(&Coord::new(5, 7)));
        assert!(!beam.contains(&Coord::new(4, 7)));
        assert!(!beam.contains(&Coord::new(3, 7)));
        assert!(hits(&board, &beam).is_empty());
    }

    #[test]
    fn test_blocker_mid_ray() {
        // A Blocker further down the ray: cells before and at it stay
        // lit, cells behind it go dark.
        let board = board_with(vec![
            (Coord::new(6, 7), PieceKind::Eye),
            (Coord::new(3, 7), PieceKind::Blocker),
        ]);
        let beam = trace(&board);
        assert!(beam.contains(&Coord::new(5, 7)));
        assert!(beam.contains(&Coord::new(4, 7)));
        assert!(beam.contains(&Coord::new(3, 7)));
        assert!(!beam.contains(&Coord::new(2, 7)));
        assert!(!beam.contains(&Coord::new(1, 7)));
        assert!(!beam.contains(&Coord::new(0, 6)));
    }

    #[test]
    fn test_blocking_is_per_ray() {
        // Blocking one diagonal leaves the other rays alone.
        let board = board_with(vec![
            (Coord::new(2, 7), PieceKind::Eye),
            (Coord::new(3, 9), PieceKind::Blocker),
        ]);
        let beam = trace(&board);
        // (2, 7) is black: descending vertical (1, 7) then (0, 6) stays
        // open, as does the upper-left diagonal.
        assert!(beam.contains(&Coord::new(1, 7)));
        assert!(beam.contains(&Coord::new(0, 6)));
        assert!(beam.contains(&Coord::new(3, 5)));
        // The upper-right diagonal is dark past the Blocker's cell.
        assert!(beam.contains(&Coord::new(3, 9)));
        assert!(!beam.contains(&Coord::new(3, 10)));
        assert!(!beam.contains(&Coord::new(4, 12)));
    }

    #[test]
    fn test_hits_reports_capturable_only() {
        let board = board_with(vec![
            (Coord::new(6, 7), PieceKind::Eye),
            (Coord::new(5, 7), PieceKind::Antler),
        ]);
        let beam = trace(&board);
        assert!(beam.contains(&Coord::new(5, 7)));
        let captured = hits(&board, &beam);
        assert_eq!(captured.len(), 1);
        assert_eq!(board.piece(captured[0]).unwrap().kind, PieceKind::Antler);
    }

    #[test]
    fn test_trace_is_deterministic() {
        let board = BoardState::new(&GameConfig::standard()).unwrap();
        assert_eq!(trace(&board), trace(&board));
    }

    #[test]
    fn test_no_eye_no_beam() {
        let mut board = BoardState::new(&GameConfig::standard()).unwrap();
        let eye = board.eye().unwrap().id;
        board.remove_piece(eye).unwrap();
        assert!(trace(&board).is_empty());
    }
}
