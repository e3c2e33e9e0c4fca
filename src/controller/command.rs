//! Controller commands, phases, and pending-input descriptors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PieceId;
use crate::geometry::Coord;

/// A command delivered to the turn controller.
///
/// The controller is sans-IO: it never polls or sleeps. Whatever delivers
/// these (a channel receive loop, input callbacks, a test) is outside the
/// engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start the session's first round, or the next one. The controller
    /// rests in `Idle` between rounds and waits for this.
    BeginRound,
    /// The player's chosen destination for the piece awaiting selection.
    SelectSpace(Coord),
    /// The host-timed artificial delay before a scripted turn has passed.
    ElapseCpuDelay,
    /// Destroy the board and rebuild it from the starting layout.
    ResetSession,
    /// Cancel the session, leaving the board consistent.
    AbandonSession,
}

/// Where the controller is in the turn protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Resting: before a session, between rounds, or after abandon.
    Idle,
    /// A turn is suspended on exactly one qualifying command.
    WaitingForInput,
    /// A qualifying command arrived; the move is being resolved.
    InputReceived,
    /// The move landed; beam and captures are being resolved.
    MoveApplied,
    /// A termination condition fired; only `ResetSession` is accepted.
    GameOver,
}

/// What the controller is currently suspended on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PendingInput {
    /// A player must pick one of `legal` for `piece` via `SelectSpace`.
    Selection { piece: PieceId, legal: Vec<Coord> },
    /// The host should deliver `ElapseCpuDelay` for `piece` after
    /// `delay`.
    CpuDelay { piece: PieceId, delay: Duration },
}

/// Session tally, carried across resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Completed games.
    pub played: u32,
    /// Games the Antler side survived.
    pub won: u32,
}
