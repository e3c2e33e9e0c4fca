//! Game termination outcomes.

use serde::{Deserialize, Serialize};

use super::piece::{PieceId, Side};

/// Why a game ended.
///
/// The three termination conditions are checked at the end of every round,
/// in this order; the first that holds names the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every Antler was captured.
    AntlersEliminated,
    /// The Eye is fully enclosed and one of the enclosing cells holds an
    /// Antler: the Eye has reached it.
    AntlerReached,
    /// A piece had no legal moves on its turn this round.
    BoxedIn {
        /// The piece that could not move.
        piece: PieceId,
    },
}

impl Outcome {
    /// Which side the outcome favors.
    ///
    /// Losing the Antlers or letting the Eye reach one loses the game;
    /// boxing a piece in ends it in the Antler side's favor (the Antlers
    /// are still standing).
    #[must_use]
    pub const fn winner(self) -> Side {
        match self {
            Outcome::AntlersEliminated | Outcome::AntlerReached => Side::Eye,
            Outcome::BoxedIn { .. } => Side::Antler,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::AntlersEliminated => write!(f, "all Antlers captured"),
            Outcome::AntlerReached => write!(f, "the Eye reached an Antler"),
            Outcome::BoxedIn { piece } => write!(f, "{piece} had no legal moves"),
        }
    }
}
