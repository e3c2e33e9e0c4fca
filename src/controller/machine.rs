//! The turn-sequencing state machine.
//!
//! ## Round protocol
//!
//! `BeginRound` snapshots the live piece ids and walks them in order.
//! Each piece's turn computes its legal moves, then suspends in
//! `WaitingForInput` until exactly one qualifying command arrives:
//! `SelectSpace` for a player-controlled piece, `ElapseCpuDelay` for the
//! Eye. A piece with no legal moves is recorded as boxed in and skipped
//! without entering the input states. After the last turn the controller
//! emits `RoundComplete`, evaluates termination, and rests in `Idle` (or
//! `GameOver`) until the next command.
//!
//! ## Mutation discipline
//!
//! Only `handle` mutates anything, and a command is processed to
//! completion before the next one is seen, so the board can never be
//! observed half-moved. Captures during a round are safe against the
//! round's own iteration because liveness is rechecked against the
//! snapshot before every turn.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::{EngineError, GameConfig, GameRng, Outcome, PieceId, PieceKind, Side};
use crate::events::EngineEvent;
use crate::geometry::Coord;
use crate::rules::beam::{self, BeamSet};
use crate::rules::legal_moves;

use super::command::{Command, PendingInput, Phase, SessionStats};

/// The suspended turn, if any.
#[derive(Clone, Debug)]
enum Waiting {
    /// A player-controlled piece awaits `SelectSpace`.
    Selection {
        piece: PieceId,
        legal: SmallVec<[Coord; 3]>,
    },
    /// The Eye awaits `ElapseCpuDelay`.
    Cpu {
        piece: PieceId,
        legal: SmallVec<[Coord; 3]>,
    },
}

/// Sequences turns, applies moves, resolves captures, and decides when
/// the game is over.
///
/// ```
/// use trigon::{Command, GameConfig, Phase, TurnController};
///
/// let mut game = TurnController::new(GameConfig::standard(), 42).unwrap();
/// assert_eq!(game.phase(), Phase::Idle);
///
/// let events = game.handle(Command::BeginRound).unwrap();
/// assert!(!events.is_empty());
/// assert_eq!(game.phase(), Phase::WaitingForInput);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController {
    config: GameConfig,
    board: BoardState,
    rng: GameRng,
    phase: Phase,
    playing: bool,
    round: u32,
    order: Vec<PieceId>,
    cursor: usize,
    waiting: Option<Waiting>,
    beam: BeamSet,
    last_cpu_dest: Option<Coord>,
    boxed_in: Option<PieceId>,
    stats: SessionStats,
}

impl TurnController {
    /// Build a controller over a fresh board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        let board = BoardState::new(&config)?;
        Ok(Self {
            config,
            board,
            rng: GameRng::new(seed),
            phase: Phase::Idle,
            playing: false,
            round: 0,
            order: Vec::new(),
            cursor: 0,
            waiting: None,
            beam: BeamSet::new(),
            last_cpu_dest: None,
            boxed_in: None,
            stats: SessionStats::default(),
        })
    }

    /// Process one command, returning the events it produced in order.
    ///
    /// Errors are contract violations; the state is left as it was.
    /// Illegal space selections are not errors (see
    /// [`EngineEvent::SelectionRejected`]).
    pub fn handle(&mut self, cmd: Command) -> Result<Vec<EngineEvent>, EngineError> {
        let mut events = Vec::new();
        match cmd {
            Command::BeginRound => self.begin_round(&mut events)?,
            Command::SelectSpace(at) => self.select_space(at, &mut events)?,
            Command::ElapseCpuDelay => self.elapse_cpu_delay(&mut events)?,
            Command::ResetSession => self.reset_session(&mut events)?,
            Command::AbandonSession => self.abandon_session(&mut events)?,
        }
        Ok(events)
    }

    /// Current protocol phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a session is in progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Rounds completed or in progress this session.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The current beam set.
    #[must_use]
    pub fn beam(&self) -> &BeamSet {
        &self.beam
    }

    /// Session tally.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// What the controller is suspended on, if anything.
    ///
    /// Exposes the legal destinations for a pending selection (so a host
    /// can highlight them) and the configured delay for a pending
    /// scripted turn (so a host can time it).
    #[must_use]
    pub fn pending_input(&self) -> Option<PendingInput> {
        match &self.waiting {
            Some(Waiting::Selection { piece, legal }) => Some(PendingInput::Selection {
                piece: *piece,
                legal: legal.to_vec(),
            }),
            Some(Waiting::Cpu { piece, .. }) => Some(PendingInput::CpuDelay {
                piece: *piece,
                delay: self.config.cpu_turn_delay,
            }),
            None => None,
        }
    }

    // === Command handlers ===

    fn begin_round(&mut self, events: &mut Vec<EngineEvent>) -> Result<(), EngineError> {
        match self.phase {
            Phase::GameOver => return Err(EngineError::SessionOver),
            Phase::Idle => {}
            _ => return Err(EngineError::RoundInProgress),
        }

        if !self.playing {
            // Session start: switch the beam on before the first turn.
            self.playing = true;
            self.beam = beam::trace(&self.board);
            events.push(EngineEvent::BeamUpdated {
                beam: self.beam.clone(),
            });
        }

        self.round += 1;
        self.boxed_in = None;
        self.order = self.board.live_ids();
        self.cursor = 0;
        self.advance(events);
        Ok(())
    }

    fn select_space(&mut self, at: Coord, events: &mut Vec<EngineEvent>) -> Result<(), EngineError> {
        let Some(Waiting::Selection { piece, legal }) = &self.waiting else {
            return Err(EngineError::NotAwaitingSelection);
        };
        if !legal.contains(&at) {
            events.push(EngineEvent::SelectionRejected { at });
            return Ok(());
        }
        let piece = *piece;

        self.phase = Phase::InputReceived;
        self.waiting = None;
        self.apply_move(piece, at, events)
    }

    fn elapse_cpu_delay(&mut self, events: &mut Vec<EngineEvent>) -> Result<(), EngineError> {
        let Some(Waiting::Cpu { piece, legal }) = &self.waiting else {
            return Err(EngineError::NoCpuTurnPending);
        };
        let (piece, legal) = (*piece, legal.clone());

        self.phase = Phase::InputReceived;
        self.waiting = None;

        // Uniform pick, re-rolled once if it repeats the previous
        // scripted destination. A second repeat stands.
        let mut dest = legal[self.rng.gen_range_usize(0..legal.len())];
        if self.last_cpu_dest == Some(dest) {
            dest = legal[self.rng.gen_range_usize(0..legal.len())];
        }
        self.last_cpu_dest = Some(dest);

        self.apply_move(piece, dest, events)
    }

    fn reset_session(&mut self, events: &mut Vec<EngineEvent>) -> Result<(), EngineError> {
        self.board = BoardState::new(&self.config)?;
        self.beam = BeamSet::new();
        events.push(EngineEvent::BeamUpdated {
            beam: self.beam.clone(),
        });
        self.phase = Phase::Idle;
        self.playing = false;
        self.round = 0;
        self.order.clear();
        self.cursor = 0;
        self.waiting = None;
        self.last_cpu_dest = None;
        self.boxed_in = None;
        Ok(())
    }

    fn abandon_session(&mut self, events: &mut Vec<EngineEvent>) -> Result<(), EngineError> {
        if !self.playing {
            return Err(EngineError::SessionNotStarted);
        }
        self.playing = false;
        self.phase = Phase::Idle;
        self.waiting = None;
        self.beam = BeamSet::new();
        events.push(EngineEvent::BeamUpdated {
            beam: self.beam.clone(),
        });
        self.order.clear();
        self.cursor = 0;
        self.boxed_in = None;
        Ok(())
    }

    // === Turn machinery ===

    /// Walk the round's snapshot until a turn suspends on input or the
    /// round completes. Captured pieces are skipped; pieces with no legal
    /// moves are recorded as boxed in and skipped.
    fn advance(&mut self, events: &mut Vec<EngineEvent>) {
        loop {
            if self.cursor >= self.order.len() {
                self.complete_round(events);
                return;
            }
            let id = self.order[self.cursor];
            let (pos, kind) = match self.board.live(id) {
                Some(p) => (p.pos, p.kind),
                None => {
                    self.cursor += 1;
                    continue;
                }
            };

            let legal = legal_moves(&self.board, pos, kind, false);
            if legal.is_empty() {
                self.boxed_in.get_or_insert(id);
                self.cursor += 1;
                continue;
            }

            self.waiting = Some(if kind.is_cpu_controlled() {
                Waiting::Cpu { piece: id, legal }
            } else {
                Waiting::Selection { piece: id, legal }
            });
            self.phase = Phase::WaitingForInput;
            return;
        }
    }

    /// Land the move, refresh the beam if needed, resolve captures, and
    /// hand the round to the next piece.
    fn apply_move(
        &mut self,
        id: PieceId,
        dest: Coord,
        events: &mut Vec<EngineEvent>,
    ) -> Result<(), EngineError> {
        debug_assert!(
            self.board.lattice().in_bounds(dest),
            "legal move {dest} is off the board"
        );

        let kind = self.board.piece(id)?.kind;
        let from = self.board.move_piece(id, dest)?;
        events.push(EngineEvent::PieceMoved {
            piece: id,
            from,
            to: dest,
        });
        self.phase = Phase::MoveApplied;

        if kind.affects_beam() {
            self.beam = beam::trace(&self.board);
            events.push(EngineEvent::BeamUpdated {
                beam: self.beam.clone(),
            });
        }

        // Captures are checked after every turn, not only beam-changing
        // ones: a piece can walk into a standing beam.
        for captured in beam::hits(&self.board, &self.beam) {
            self.board.remove_piece(captured)?;
            events.push(EngineEvent::PieceCaptured { piece: captured });
        }

        self.phase = Phase::Idle;
        self.cursor += 1;
        self.advance(events);
        Ok(())
    }

    fn complete_round(&mut self, events: &mut Vec<EngineEvent>) {
        events.push(EngineEvent::RoundComplete { round: self.round });
        self.waiting = None;

        if let Some(outcome) = self.termination() {
            self.phase = Phase::GameOver;
            self.playing = false;
            self.stats.played += 1;
            if outcome.winner() == Side::Antler {
                self.stats.won += 1;
            }
            events.push(EngineEvent::GameOver { outcome });
        } else {
            self.phase = Phase::Idle;
        }
    }

    /// The end-of-round termination check. First match names the
    /// outcome: Antler elimination, then Eye containment with an Antler
    /// adjacent, then any piece boxed in this round.
    fn termination(&self) -> Option<Outcome> {
        if self.board.live_count(PieceKind::Antler) == 0 {
            return Some(Outcome::AntlersEliminated);
        }

        if let Some(eye) = self.board.eye() {
            let constrained = legal_moves(&self.board, eye.pos, eye.kind, false);
            if constrained.is_empty() {
                let open = legal_moves(&self.board, eye.pos, eye.kind, true);
                let antler_adjacent = open
                    .iter()
                    .any(|&c| self.board.occupant_kind(c) == Some(PieceKind::Antler));
                if antler_adjacent {
                    return Some(Outcome::AntlerReached);
                }
            }
        }

        self.boxed_in.map(|piece| Outcome::BoxedIn { piece })
    }
}
