//! The event feed consumed by the presentation layer.
//!
//! Every [`TurnController::handle`] call returns the events it produced,
//! in order. The engine draws nothing and plays nothing; highlighting,
//! animation, and audio are the host's reaction to this feed.
//!
//! [`TurnController::handle`]: crate::controller::TurnController::handle

use serde::{Deserialize, Serialize};

use crate::core::{Outcome, PieceId};
use crate::geometry::Coord;
use crate::rules::BeamSet;

/// Something that happened inside the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A piece moved between cells.
    PieceMoved {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
    /// A piece was caught in the beam and removed to deadwood.
    PieceCaptured { piece: PieceId },
    /// The beam was recomputed; `beam` is the complete new set.
    BeamUpdated { beam: BeamSet },
    /// A selection was ignored because the coordinate is not currently a
    /// legal destination. Not an error; the controller keeps waiting.
    SelectionRejected { at: Coord },
    /// Every live piece has taken its turn.
    RoundComplete { round: u32 },
    /// A termination condition fired; no further play until reset.
    GameOver { outcome: Outcome },
}
