//! Typed engine errors.
//!
//! Two things are *not* errors here: a player selecting an illegal space
//! (rejected with an event, see [`EngineEvent::SelectionRejected`]), and
//! any geometry computation on a valid board (those are pure and total).
//! What remains is caller misuse: commands sent in the wrong state, ids
//! that don't exist, layouts that don't fit the board. Those refuse to
//! proceed rather than corrupt state.
//!
//! [`EngineEvent::SelectionRejected`]: crate::events::EngineEvent::SelectionRejected

use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use crate::geometry::Coord;

/// A contract violation by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// No piece with this id exists.
    UnknownPiece(PieceId),
    /// The piece was already removed to deadwood.
    PieceRemoved(PieceId),
    /// The coordinate is not a cell on this board.
    OutOfBounds(Coord),
    /// The destination cell already holds a live piece.
    SpaceOccupied(Coord),
    /// `SelectSpace` arrived while no player selection was pending.
    NotAwaitingSelection,
    /// `ElapseCpuDelay` arrived while no scripted turn was pending.
    NoCpuTurnPending,
    /// `BeginRound` arrived while a round was still being played.
    RoundInProgress,
    /// The session has ended; only `ResetSession` is accepted.
    SessionOver,
    /// `AbandonSession` arrived while no session was being played.
    SessionNotStarted,
    /// A starting-layout coordinate is off the board.
    LayoutOutOfBounds(Coord),
    /// Two starting-layout pieces share a coordinate.
    LayoutOverlap(Coord),
    /// The layout does not contain exactly one Eye.
    LayoutEyeCount(usize),
    /// The configured row count cannot form a board.
    LayoutRows(i32),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UnknownPiece(id) => write!(f, "no such piece: {id}"),
            EngineError::PieceRemoved(id) => write!(f, "{id} is in deadwood"),
            EngineError::OutOfBounds(c) => write!(f, "{c} is off the board"),
            EngineError::SpaceOccupied(c) => write!(f, "{c} is occupied"),
            EngineError::NotAwaitingSelection => {
                write!(f, "no player selection is pending")
            }
            EngineError::NoCpuTurnPending => write!(f, "no scripted turn is pending"),
            EngineError::RoundInProgress => write!(f, "a round is in progress"),
            EngineError::SessionOver => write!(f, "the session has ended"),
            EngineError::SessionNotStarted => write!(f, "no session is being played"),
            EngineError::LayoutOutOfBounds(c) => {
                write!(f, "layout places a piece off the board at {c}")
            }
            EngineError::LayoutOverlap(c) => {
                write!(f, "layout places two pieces at {c}")
            }
            EngineError::LayoutEyeCount(n) => {
                write!(f, "layout has {n} Eyes, expected exactly 1")
            }
            EngineError::LayoutRows(n) => write!(f, "invalid row count: {n}"),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", EngineError::UnknownPiece(PieceId(9))),
            "no such piece: Piece(9)"
        );
        assert_eq!(
            format!("{}", EngineError::SpaceOccupied(Coord::new(2, 4))),
            "(2, 4) is occupied"
        );
        assert_eq!(
            format!("{}", EngineError::LayoutEyeCount(2)),
            "layout has 2 Eyes, expected exactly 1"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error<E: std::error::Error>(_: E) {}
        takes_error(EngineError::NotAwaitingSelection);
    }
}
