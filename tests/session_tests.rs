//! Session lifecycle: score, undo, pause, clock and game over.

use pegboard::core::{GameConfig, Position};
use pegboard::rules::TapOutcome;
use pegboard::{GameSession, Solver};

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// Tap `from` then `to`, asserting a completed jump.
fn jump(session: &mut GameSession, from: Position, to: Position) {
    assert_eq!(session.tap(from), TapOutcome::Selected(from));
    assert!(session.tap(to).completed(), "{} -> {} should jump", from, to);
}

// =============================================================================
// Score
// =============================================================================

#[test]
fn test_score_tracks_moves() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));
    jump(&mut session, p(2, 0), p(0, 0));
    jump(&mut session, p(2, 2), p(2, 0));

    assert_eq!(session.moves_made(), 3);
    assert_eq!(session.score(), 450);
    assert_eq!(session.max_score(), 2100);
}

#[test]
fn test_selection_taps_do_not_score() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));
    session.tap(p(2, 0));
    session.tap(p(2, 0));
    session.tap(p(3, 1));

    assert_eq!(session.moves_made(), 1);
    assert_eq!(session.score(), 150);
}

#[test]
fn test_custom_points() {
    let config = GameConfig::new().with_points_per_move(10);
    let mut session = GameSession::new(config).unwrap();
    session.tap(p(0, 0));
    jump(&mut session, p(2, 0), p(0, 0));

    assert_eq!(session.score(), 20);
    assert_eq!(session.max_score(), 140);
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_restores_board_and_score() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));
    jump(&mut session, p(2, 0), p(0, 0));
    let before = session.board().clone();
    let score_before = session.score();

    jump(&mut session, p(2, 2), p(2, 0));
    assert!(session.undo());

    assert_eq!(session.board(), &before);
    assert_eq!(session.score(), score_before);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_undo_after_opening_resets_session() {
    let mut session = GameSession::default();
    session.tap(p(3, 1));
    session.tick();
    session.tick();

    assert!(session.undo());
    assert!(session.is_first_move());
    assert!(session.board().is_first_move());
    assert_eq!(session.score(), 0);
    assert_eq!(session.seconds_elapsed(), 0);
    assert!(!session.can_undo());
}

#[test]
fn test_undo_unavailable_before_first_move() {
    let mut session = GameSession::default();
    assert!(!session.undo());
    assert!(session.is_first_move());
}

#[test]
fn test_undo_drops_selection() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));
    jump(&mut session, p(2, 0), p(0, 0));
    session.tap(p(2, 2));
    assert_eq!(session.board().selection(), Some(p(2, 2)));

    assert!(session.undo());
    assert_eq!(session.board().selection(), None);
}

// =============================================================================
// Clock and Pause
// =============================================================================

#[test]
fn test_clock_runs_only_during_play() {
    let mut session = GameSession::default();
    for _ in 0..3 {
        assert!(!session.tick());
    }
    assert_eq!(session.seconds_elapsed(), 0);

    session.tap(p(0, 0));
    for _ in 0..3 {
        assert!(session.tick());
    }
    assert_eq!(session.seconds_elapsed(), 3);

    assert!(session.toggle_pause());
    assert!(!session.tick());
    assert_eq!(session.seconds_elapsed(), 3);

    assert!(session.toggle_pause());
    assert!(session.tick());
    assert_eq!(session.seconds_elapsed(), 4);
}

#[test]
fn test_pause_blocks_taps_and_undo() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));
    session.toggle_pause();

    assert!(session.is_paused());
    assert_eq!(session.tap(p(2, 0)), TapOutcome::Ignored);
    assert_eq!(session.board().selection(), None);
    assert!(!session.can_undo());
    assert!(!session.undo());
    assert!(session.can_restart());
}

#[test]
fn test_pause_unavailable_before_first_move() {
    let mut session = GameSession::default();
    assert!(!session.can_pause());
    assert!(!session.toggle_pause());
    assert!(!session.is_paused());
}

#[test]
fn test_restart_clears_pause() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));
    session.toggle_pause();
    session.restart();

    assert!(!session.is_paused());
    assert!(session.is_first_move());
    assert_eq!(session.tap(p(1, 0)), TapOutcome::FirstPegRemoved(p(1, 0)));
}

// =============================================================================
// Game Over
// =============================================================================

#[test]
fn test_solved_game_reaches_max_score() {
    let mut session = GameSession::default();
    session.tap(p(0, 0));

    let solution = Solver::default().solve(session.board()).unwrap();
    for (i, step) in solution.iter().enumerate() {
        session.tick();
        jump(&mut session, step.start, step.end);
        assert_eq!(session.is_game_over(), i + 1 == solution.len());
    }

    let seconds = session.seconds_elapsed();
    assert!(!session.tick());
    assert_eq!(session.seconds_elapsed(), seconds);

    let summary = session.summary().unwrap();
    assert_eq!(summary.pegs_remaining, 1);
    assert_eq!(summary.score, summary.max_score);
    assert_eq!(summary.seconds_elapsed, 13);

    assert!(!session.can_undo());
    assert!(!session.can_pause());
    assert!(session.can_restart());
    assert_eq!(session.tap(p(0, 0)), TapOutcome::Ignored);
}

#[test]
fn test_config_from_json() {
    let config = GameConfig::from_json(r#"{"board_size": 4}"#).unwrap();
    let session = GameSession::new(config).unwrap();

    assert_eq!(session.board().peg_count(), 10);
    assert_eq!(session.max_score(), 9 * 150);
    assert!(GameConfig::from_json(r#"{"board_size": 40}"#).is_err());
    assert!(GameConfig::from_json("not json").is_err());
}
