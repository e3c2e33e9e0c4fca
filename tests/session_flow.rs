//! Full-session flows through the turn controller.
//!
//! These drive the controller the way a host would: `BeginRound`, then
//! answer each pending input, reacting only to returned events.

use trigon::{
    Command, Coord, EngineError, EngineEvent, GameConfig, Outcome, PendingInput, Phase, PieceId,
    PieceKind, SessionStats, TurnController,
};

fn standard_game(seed: u64) -> TurnController {
    TurnController::new(GameConfig::standard(), seed).unwrap()
}

fn game_with(layout: Vec<(Coord, PieceKind)>, seed: u64) -> TurnController {
    let config = GameConfig {
        layout,
        ..GameConfig::standard()
    };
    TurnController::new(config, seed).unwrap()
}

/// Answer the pending input with the given selection for player pieces,
/// or the elapsed delay for the Eye.
fn answer(game: &mut TurnController, choice: Option<Coord>) -> Vec<EngineEvent> {
    match game.pending_input().expect("a turn should be pending") {
        PendingInput::Selection { .. } => game
            .handle(Command::SelectSpace(choice.expect("selection needed")))
            .unwrap(),
        PendingInput::CpuDelay { .. } => game.handle(Command::ElapseCpuDelay).unwrap(),
    }
}

/// Scenario C: a full starting-layout round of harmless steps leaves
/// both Antlers alive and the controller resting in `Idle`.
#[test]
fn quiet_round_ends_idle() {
    let mut game = standard_game(42);
    game.handle(Command::BeginRound).unwrap();

    // Steps chosen away from the beam (which lights the (r, 7) vertical
    // and (0, 6)): corner Blockers sidle along the base, Antlers step
    // left, the Eye does its scripted step.
    let mut events = Vec::new();
    events.extend(answer(&mut game, Some(Coord::new(0, 1))));
    events.extend(answer(&mut game, Some(Coord::new(0, 11))));
    events.extend(answer(&mut game, Some(Coord::new(2, 3))));
    events.extend(answer(&mut game, Some(Coord::new(2, 9))));
    events.extend(answer(&mut game, None));

    assert!(events.contains(&EngineEvent::RoundComplete { round: 1 }));
    assert!(!events.iter().any(|e| matches!(e, EngineEvent::PieceCaptured { .. })));
    assert!(!events.iter().any(|e| matches!(e, EngineEvent::GameOver { .. })));

    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.is_playing());
    assert_eq!(game.board().live_count(PieceKind::Antler), 2);
    assert_eq!(game.board().deadwood().len(), 0);
}

/// Scenario D: captures down to zero Antlers end the game against the
/// Antler side, and the controller refuses further play.
#[test]
fn antler_elimination_ends_the_game() {
    let mut game = game_with(
        vec![
            (Coord::new(5, 7), PieceKind::Antler),
            (Coord::new(3, 7), PieceKind::Antler),
            (Coord::new(6, 7), PieceKind::Eye),
        ],
        7,
    );
    game.handle(Command::BeginRound).unwrap();

    // Both Antlers stand on the lit vertical. The first steps to another
    // lit cell; the capture check after its move then reports both it and
    // the Antler still standing in the ray.
    let events = answer(&mut game, Some(Coord::new(4, 7)));
    assert!(events.contains(&EngineEvent::PieceCaptured { piece: PieceId(0) }));
    assert!(events.contains(&EngineEvent::PieceCaptured { piece: PieceId(1) }));

    // The Eye still takes its scripted turn; the round then ends the game.
    let events = answer(&mut game, None);
    assert!(events.contains(&EngineEvent::GameOver {
        outcome: Outcome::AntlersEliminated
    }));

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(!game.is_playing());
    assert_eq!(game.board().live_count(PieceKind::Antler), 0);
    assert_eq!(game.board().deadwood().len(), 2);

    // No further play is accepted.
    assert_eq!(
        game.handle(Command::SelectSpace(Coord::new(2, 7))),
        Err(EngineError::NotAwaitingSelection)
    );
    assert_eq!(
        game.handle(Command::BeginRound),
        Err(EngineError::SessionOver)
    );
    assert_eq!(game.stats(), SessionStats { played: 1, won: 0 });
}

/// The containment rule: an Eye with no free neighbor, one of which
/// holds an Antler, has reached it: an Eye-side win even though the
/// Eye itself could not move.
#[test]
fn surrounded_eye_reaches_the_antler() {
    let mut game = game_with(
        vec![
            (Coord::new(6, 6), PieceKind::Antler),
            (Coord::new(6, 8), PieceKind::Antler),
            (Coord::new(5, 6), PieceKind::Blocker),
            (Coord::new(5, 8), PieceKind::Blocker),
            (Coord::new(6, 7), PieceKind::Eye),
        ],
        11,
    );
    game.handle(Command::BeginRound).unwrap();

    // Both Antlers are wedged between the Eye, the board edge, and a
    // Blocker: no legal moves, turns skipped. The Blockers step aside;
    // the Eye's own turn is skipped too (both neighbors occupied).
    let events = answer(&mut game, Some(Coord::new(5, 5)));
    assert!(events
        .iter()
        .all(|e| !matches!(e, EngineEvent::PieceCaptured { .. })));
    let events = answer(&mut game, Some(Coord::new(5, 9)));

    assert!(events.contains(&EngineEvent::RoundComplete { round: 1 }));
    assert!(events.contains(&EngineEvent::GameOver {
        outcome: Outcome::AntlerReached
    }));
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.stats(), SessionStats { played: 1, won: 0 });
}

/// A piece boxed in without the Eye reaching anything ends the game in
/// the Antler side's favor.
#[test]
fn boxed_in_piece_ends_the_game_for_the_antlers() {
    let mut game = game_with(
        vec![
            (Coord::new(6, 6), PieceKind::Antler),
            (Coord::new(6, 7), PieceKind::Blocker),
            (Coord::new(5, 6), PieceKind::Blocker),
            (Coord::new(0, 2), PieceKind::Eye),
        ],
        13,
    );
    game.handle(Command::BeginRound).unwrap();

    // The Antler in the apex corner is wedged shut and skipped; the
    // Blockers move; the Eye roams near the base, far from everyone.
    let events = answer(&mut game, Some(Coord::new(6, 8)));
    assert!(events
        .iter()
        .all(|e| !matches!(e, EngineEvent::GameOver { .. })));
    answer(&mut game, Some(Coord::new(5, 5)));
    let events = answer(&mut game, None);

    assert!(events.contains(&EngineEvent::GameOver {
        outcome: Outcome::BoxedIn { piece: PieceId(0) }
    }));
    assert_eq!(game.phase(), Phase::GameOver);
    // The Antlers survived, so the session counts as won.
    assert_eq!(game.stats(), SessionStats { played: 1, won: 1 });
}

/// Resetting twice in a row produces the same starting board both times.
#[test]
fn reset_is_idempotent() {
    let mut game = standard_game(42);
    game.handle(Command::BeginRound).unwrap();
    game.handle(Command::SelectSpace(Coord::new(0, 1))).unwrap();
    game.handle(Command::SelectSpace(Coord::new(0, 11))).unwrap();

    game.handle(Command::ResetSession).unwrap();
    let first = game.board().pieces().to_vec();

    game.handle(Command::ResetSession).unwrap();
    let second = game.board().pieces().to_vec();

    assert_eq!(first, second);
    let fresh = TurnController::new(GameConfig::standard(), 0).unwrap();
    assert_eq!(game.board().pieces(), fresh.board().pieces());
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.beam().is_empty());
}

/// Stats survive resets and accumulate across sessions.
#[test]
fn stats_accumulate_across_sessions() {
    let mut game = game_with(
        vec![
            (Coord::new(5, 7), PieceKind::Antler),
            (Coord::new(6, 7), PieceKind::Eye),
        ],
        3,
    );

    for played in 1..=2 {
        game.handle(Command::BeginRound).unwrap();
        // The lone Antler steps along the ray and is captured.
        answer(&mut game, Some(Coord::new(4, 7)));
        answer(&mut game, None);
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(
            game.stats(),
            SessionStats {
                played,
                won: 0
            }
        );
        game.handle(Command::ResetSession).unwrap();
    }
}

/// Abandoning mid-wait leaves a consistent board and allows a fresh
/// start.
#[test]
fn abandon_and_resume() {
    let mut game = standard_game(42);
    game.handle(Command::BeginRound).unwrap();
    game.handle(Command::SelectSpace(Coord::new(0, 1))).unwrap();

    game.handle(Command::AbandonSession).unwrap();
    assert_eq!(game.phase(), Phase::Idle);
    assert!(!game.is_playing());
    assert!(game.beam().is_empty());

    // Abandoning again without a session is a contract violation.
    assert_eq!(
        game.handle(Command::AbandonSession),
        Err(EngineError::SessionNotStarted)
    );

    // A new round can begin from the consistent position.
    let events = game.handle(Command::BeginRound).unwrap();
    assert!(matches!(events[0], EngineEvent::BeamUpdated { .. }));
    assert_eq!(game.phase(), Phase::WaitingForInput);
}

/// Every `handle` call either errors or reports through events; a
/// rejected selection is the event kind, not the error kind.
#[test]
fn rejection_is_an_event_not_an_error() {
    let mut game = standard_game(42);
    game.handle(Command::BeginRound).unwrap();

    let occupied = Coord::new(2, 4);
    let events = game.handle(Command::SelectSpace(occupied)).unwrap();
    assert_eq!(
        events,
        vec![EngineEvent::SelectionRejected { at: occupied }]
    );
    assert_eq!(game.phase(), Phase::WaitingForInput);
}
