//! The mutable board: who is where, and who has been removed.
//!
//! ## Invariants
//!
//! - At most one live piece per coordinate. The occupancy map and the
//!   arena agree at all times; `move_piece` updates both atomically from
//!   the caller's point of view.
//! - Arena slots are never reused. A captured piece keeps its id and its
//!   slot, with `alive` cleared and the id appended to deadwood.
//! - Exactly one live Eye while a game is in progress (guaranteed by
//!   layout validation plus the Eye never being capturable in practice).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameConfig, Piece, PieceId, PieceKind};
use crate::geometry::{Coord, Lattice};

/// Piece positions and lifecycle for one session.
///
/// ```
/// use trigon::{BoardState, Coord, GameConfig, PieceKind};
///
/// let board = BoardState::new(&GameConfig::standard()).unwrap();
/// assert_eq!(board.live_count(PieceKind::Antler), 2);
/// assert!(board.occupant(Coord::new(6, 7)).is_some());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    lattice: Lattice,
    pieces: Vec<Piece>,
    occupancy: FxHashMap<Coord, PieceId>,
    deadwood: Vec<PieceId>,
}

impl BoardState {
    /// Build a board from a configuration's starting layout.
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let lattice = Lattice::new(config.rows);

        let mut pieces = Vec::with_capacity(config.layout.len());
        let mut occupancy = FxHashMap::default();
        for (slot, &(pos, kind)) in config.layout.iter().enumerate() {
            let id = PieceId::new(slot as u32);
            pieces.push(Piece {
                id,
                kind,
                pos,
                alive: true,
            });
            occupancy.insert(pos, id);
        }

        Ok(Self {
            lattice,
            pieces,
            occupancy,
            deadwood: Vec::new(),
        })
    }

    /// The board shape.
    #[must_use]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Look up a piece by id, dead or alive.
    pub fn piece(&self, id: PieceId) -> Result<&Piece, EngineError> {
        self.pieces
            .get(id.index())
            .ok_or(EngineError::UnknownPiece(id))
    }

    /// Look up a live piece by id.
    #[must_use]
    pub fn live(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).filter(|p| p.alive)
    }

    /// The whole arena, in creation order, deadwood included.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Live pieces in creation order.
    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.alive)
    }

    /// Snapshot of live piece ids in creation order.
    ///
    /// The turn controller iterates this snapshot for a round, rechecking
    /// liveness before each turn, so captures mid-round cannot skip or
    /// repeat a piece.
    #[must_use]
    pub fn live_ids(&self) -> Vec<PieceId> {
        self.live_pieces().map(|p| p.id).collect()
    }

    /// Count live pieces of one kind.
    #[must_use]
    pub fn live_count(&self, kind: PieceKind) -> usize {
        self.live_pieces().filter(|p| p.kind == kind).count()
    }

    /// The live Eye, if one is on the board.
    #[must_use]
    pub fn eye(&self) -> Option<&Piece> {
        self.live_pieces().find(|p| p.kind == PieceKind::Eye)
    }

    /// The live piece occupying a coordinate.
    #[must_use]
    pub fn occupant(&self, pos: Coord) -> Option<PieceId> {
        self.occupancy.get(&pos).copied()
    }

    /// The kind of the live piece occupying a coordinate.
    #[must_use]
    pub fn occupant_kind(&self, pos: Coord) -> Option<PieceKind> {
        self.occupant(pos)
            .and_then(|id| self.live(id))
            .map(|p| p.kind)
    }

    /// Whether a live piece occupies the coordinate.
    #[must_use]
    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.occupancy.contains_key(&pos)
    }

    /// Whether a live Blocker occupies the coordinate.
    #[must_use]
    pub fn blocker_at(&self, pos: Coord) -> bool {
        self.occupant_kind(pos) == Some(PieceKind::Blocker)
    }

    /// Removed pieces, in removal order.
    #[must_use]
    pub fn deadwood(&self) -> &[PieceId] {
        &self.deadwood
    }

    /// Move a live piece to a destination cell.
    ///
    /// Vacates the old cell and fills the new one in one step; on any
    /// error the board is untouched. Returns the vacated coordinate.
    pub fn move_piece(&mut self, id: PieceId, dest: Coord) -> Result<Coord, EngineError> {
        let piece = self.piece(id)?;
        if !piece.alive {
            return Err(EngineError::PieceRemoved(id));
        }
        if !self.lattice.in_bounds(dest) {
            return Err(EngineError::OutOfBounds(dest));
        }
        if self.occupancy.contains_key(&dest) {
            return Err(EngineError::SpaceOccupied(dest));
        }

        let from = piece.pos;
        self.occupancy.remove(&from);
        self.occupancy.insert(dest, id);
        self.pieces[id.index()].pos = dest;
        Ok(from)
    }

    /// Remove a live piece to deadwood.
    ///
    /// Vacates its cell and clears the alive flag; the piece takes no
    /// further part in any computation.
    pub fn remove_piece(&mut self, id: PieceId) -> Result<(), EngineError> {
        let piece = self.piece(id)?;
        if !piece.alive {
            return Err(EngineError::PieceRemoved(id));
        }

        let pos = piece.pos;
        self.occupancy.remove(&pos);
        self.pieces[id.index()].alive = false;
        self.deadwood.push(id);
        Ok(())
    }
}
