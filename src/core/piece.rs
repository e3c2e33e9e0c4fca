//! Piece identity and kinds.
//!
//! Every piece has a stable [`PieceId`] assigned at session setup. Ids are
//! arena indices: they stay valid for the whole session, including after
//! the piece is captured (the arena slot is never reused). All references
//! to a piece outside [`BoardState`] go through its id, never through a
//! raw board position.
//!
//! [`BoardState`]: crate::board::BoardState

use serde::{Deserialize, Serialize};

use crate::geometry::Coord;

/// Unique identifier for a piece within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The arena slot this ID addresses.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// The three piece kinds.
///
/// Exactly one Eye exists per game. Movement geometry is shared by all
/// kinds today; what differs is control, beam interaction, and capture
/// immunity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Occludes beam rays; cannot be captured.
    Blocker,
    /// The kind the Antler side must keep alive.
    Antler,
    /// The single scripted capturing piece; source of the beam.
    Eye,
}

impl PieceKind {
    /// Whether this kind takes its turns by scripted delay instead of
    /// player selection.
    #[must_use]
    pub const fn is_cpu_controlled(self) -> bool {
        matches!(self, PieceKind::Eye)
    }

    /// Whether a piece of this kind stops beam rays.
    #[must_use]
    pub const fn occludes_beam(self) -> bool {
        matches!(self, PieceKind::Blocker)
    }

    /// Whether moving a piece of this kind changes the beam. Blockers
    /// occlude rays; the Eye emits them. Antler moves leave the beam
    /// untouched.
    #[must_use]
    pub const fn affects_beam(self) -> bool {
        matches!(self, PieceKind::Blocker | PieceKind::Eye)
    }

    /// Whether the beam can capture a piece of this kind. Blockers cast
    /// the shadows; they are never caught in them.
    #[must_use]
    pub const fn capturable(self) -> bool {
        !matches!(self, PieceKind::Blocker)
    }

    /// Which side fields this kind.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            PieceKind::Eye => Side::Eye,
            PieceKind::Blocker | PieceKind::Antler => Side::Antler,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Blocker => "Blocker",
            PieceKind::Antler => "Antler",
            PieceKind::Eye => "Eye",
        };
        write!(f, "{name}")
    }
}

/// The two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player-controlled side (Antlers and Blockers).
    Antler,
    /// The scripted capturing side.
    Eye,
}

/// A piece in the arena.
///
/// Owned by [`BoardState`]; mutated only through `move_piece` and
/// `remove_piece`.
///
/// [`BoardState`]: crate::board::BoardState
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Stable identity.
    pub id: PieceId,
    /// Kind, fixed at creation.
    pub kind: PieceKind,
    /// Current coordinate. Meaningless once `alive` is false.
    pub pos: Coord,
    /// False once removed to deadwood.
    pub alive: bool,
}
