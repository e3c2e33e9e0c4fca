//! # trigon
//!
//! Rules engine for a turn-based board game on a triangular lattice.
//!
//! Two Blockers and two Antlers face a single scripted Eye. Every piece
//! steps one cell per turn; the Eye casts a beam down the lattice's three
//! axes, Blockers cast shadows in it, and any other piece the beam touches
//! is captured. The Antler side wins by boxing pieces in before the Eye
//! runs the Antlers down.
//!
//! ## Design Principles
//!
//! 1. **Engine, not application**: no rendering, audio, input polling, or
//!    persistence. Hosts deliver [`Command`]s and react to
//!    [`EngineEvent`]s.
//!
//! 2. **Sans-IO sequencing**: the controller suspends in
//!    `WaitingForInput` until exactly one qualifying command arrives; it
//!    never sleeps or polls. Scripted-turn pacing is timed by the host.
//!
//! 3. **Configuration over constants**: board shape, starting layout, and
//!    turn pacing arrive as an immutable [`GameConfig`].
//!
//! 4. **Deterministic by seed**: the only randomness is the Eye's move
//!    choice, drawn from a seeded [`GameRng`], so sessions replay
//!    exactly.
//!
//! ## Modules
//!
//! - `geometry`: coordinates, parity, bounds, board enumeration
//! - `core`: pieces, outcomes, RNG, configuration, errors
//! - `board`: piece arena, occupancy map, deadwood
//! - `rules`: legal-move generation and beam tracing
//! - `controller`: the turn-sequencing state machine
//! - `events`: the event feed for the presentation layer

pub mod board;
pub mod controller;
pub mod core;
pub mod events;
pub mod geometry;
pub mod rules;

// Re-export commonly used types
pub use crate::geometry::{Coord, Lattice, SpaceColor};

pub use crate::core::{
    EngineError, GameConfig, GameRng, Outcome, Piece, PieceId, PieceKind, Side,
};

pub use crate::board::BoardState;

pub use crate::rules::{beam, legal_moves, BeamSet};

pub use crate::controller::{Command, PendingInput, Phase, SessionStats, TurnController};

pub use crate::events::EngineEvent;
