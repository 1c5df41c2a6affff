//! A single game: current board, undo history, score and clock.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Board, ConfigError, GameConfig, Position};
use crate::rules::{self, PegRules, TapOutcome};

use super::clock::GameClock;

/// Final numbers shown when a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Score at the end of the game.
    pub score: u64,
    /// Best possible score on this board (all but one peg removed).
    pub max_score: u64,
    /// Seconds counted by the clock.
    pub seconds_elapsed: u64,
    /// Pegs left on the board.
    pub pegs_remaining: usize,
}

/// One game session.
///
/// ## Lifecycle
///
/// 1. Fresh board, clock stopped. The first tap removes a peg.
/// 2. The first completed move starts the clock.
/// 3. Each completed move pushes the resulting board onto the history.
///    Score is `moves_made * points_per_move`.
/// 4. When no move is left the clock stops and [`GameSession::summary`]
///    becomes available.
///
/// Taps are ignored while paused or after the game is over.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rules: PegRules,
    current: Board,
    history: Vector<Board>,
    clock: GameClock,
}

impl GameSession {
    /// Start a session with a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    fn fresh(config: GameConfig) -> Self {
        Self {
            rules: PegRules::from_config(&config),
            current: Board::new(config.board_size),
            history: Vector::new(),
            clock: GameClock::new(),
            config,
        }
    }

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Boards after each completed move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    // === Actions ===

    /// Forward a tap to the rules.
    ///
    /// Returns [`TapOutcome::Ignored`] without touching the board while the
    /// session is paused or over.
    pub fn tap(&mut self, pos: Position) -> TapOutcome {
        if self.is_game_over() || self.is_paused() {
            return TapOutcome::Ignored;
        }

        let outcome = self.rules.apply_tap(&mut self.current, pos);
        if outcome.completed() {
            self.history.push_back(self.current.clone());

            if self.is_game_over() {
                self.clock.stop();
                info!(
                    score = self.score(),
                    pegs_remaining = self.current.remaining_pegs(),
                    seconds = self.clock.seconds_elapsed(),
                    "game over"
                );
            } else if self.history.len() == 1 {
                self.clock.start();
            }
        }
        outcome
    }

    /// Take back the last completed move.
    ///
    /// Taking back the opening move resets the whole session. Returns false
    /// when undo is not available (see [`GameSession::can_undo`]).
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }

        self.history.pop_back();
        match self.history.back().cloned() {
            Some(previous) => {
                self.current = previous;
                debug!(moves = self.history.len(), "move undone");
            }
            None => {
                debug!("opening move undone, session reset");
                self.restart();
            }
        }
        true
    }

    /// Pause or resume the clock. Returns false when pausing is unavailable.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.can_pause() {
            return false;
        }
        let running = self.clock.toggle();
        debug!(running, "clock toggled");
        true
    }

    /// Throw the game away and start over with the same configuration.
    pub fn restart(&mut self) {
        self.current = Board::new(self.config.board_size);
        self.history.clear();
        self.clock.reset();
    }

    /// Advance the clock by one second if it is running.
    pub fn tick(&mut self) -> bool {
        self.clock.tick()
    }

    // === Derived state ===

    /// Completed moves, the opening removal included.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.history.len() as u64 * u64::from(self.config.points_per_move)
    }

    /// Score for clearing all pegs but one.
    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.current.peg_count().saturating_sub(1) as u64 * u64::from(self.config.points_per_move)
    }

    /// Seconds counted so far.
    #[must_use]
    pub fn seconds_elapsed(&self) -> u64 {
        self.clock.seconds_elapsed()
    }

    /// True before the opening move.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        self.history.is_empty()
    }

    /// True when the clock is stopped mid-game.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.is_first_move() && !self.is_game_over() && !self.clock.is_running()
    }

    /// True when no move is left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        rules::is_terminal(&self.current)
    }

    /// Undo needs a move to take back and a running game.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.is_first_move() && !self.is_paused() && !self.is_game_over()
    }

    /// Pausing needs a started, unfinished game.
    #[must_use]
    pub fn can_pause(&self) -> bool {
        !self.is_first_move() && !self.is_game_over()
    }

    /// Restarting needs a started game.
    #[must_use]
    pub fn can_restart(&self) -> bool {
        !self.is_first_move()
    }

    /// Final numbers, once the game is over.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.is_game_over().then(|| GameSummary {
            score: self.score(),
            max_score: self.max_score(),
            seconds_elapsed: self.seconds_elapsed(),
            pegs_remaining: self.current.remaining_pegs(),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::fresh(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::default();
        assert!(session.is_first_move());
        assert!(!session.is_paused());
        assert!(!session.is_game_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.max_score(), 14 * 150);
        assert!(!session.can_undo());
        assert!(!session.can_pause());
        assert!(!session.can_restart());
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(GameSession::new(GameConfig::new().with_board_size(0)).is_err());
    }

    #[test]
    fn test_first_move_starts_clock() {
        let mut session = GameSession::default();
        assert!(!session.tick());

        let outcome = session.tap(p(0, 0));
        assert!(outcome.completed());
        assert_eq!(session.moves_made(), 1);
        assert_eq!(session.score(), 150);

        assert!(session.tick());
        assert_eq!(session.seconds_elapsed(), 1);
    }

    #[test]
    fn test_pause_blocks_taps() {
        let mut session = GameSession::default();
        session.tap(p(0, 0));

        assert!(session.toggle_pause());
        assert!(session.is_paused());
        assert_eq!(session.tap(p(2, 0)), TapOutcome::Ignored);
        assert!(!session.can_undo());
        assert!(!session.tick());

        assert!(session.toggle_pause());
        assert_eq!(session.tap(p(2, 0)), TapOutcome::Selected(p(2, 0)));
    }

    #[test]
    fn test_undo_to_previous_board() {
        let mut session = GameSession::default();
        session.tap(p(0, 0));
        let after_opening = session.board().clone();

        session.tap(p(2, 0));
        assert!(session.tap(p(0, 0)).completed());
        assert_eq!(session.score(), 300);

        assert!(session.undo());
        assert_eq!(session.board(), &after_opening);
        assert_eq!(session.score(), 150);
    }

    #[test]
    fn test_undo_opening_resets() {
        let mut session = GameSession::default();
        session.tap(p(0, 0));
        session.tick();

        assert!(session.undo());
        assert!(session.is_first_move());
        assert!(session.board().is_first_move());
        assert_eq!(session.seconds_elapsed(), 0);
        assert!(!session.tick());
    }

    #[test]
    fn test_restart() {
        let mut session = GameSession::default();
        session.tap(p(1, 1));
        session.tick();
        session.restart();

        assert!(session.is_first_move());
        assert_eq!(session.score(), 0);
        assert_eq!(session.seconds_elapsed(), 0);
    }

    #[test]
    fn test_tiny_board_ends_after_opening() {
        let mut session = GameSession::new(GameConfig::new().with_board_size(2)).unwrap();
        session.tap(p(1, 0));

        assert!(session.is_game_over());
        assert!(!session.is_paused());
        assert!(!session.tick());
        assert_eq!(session.tap(p(0, 0)), TapOutcome::Ignored);

        let summary = session.summary().unwrap();
        assert_eq!(summary.score, 150);
        assert_eq!(summary.max_score, 300);
        assert_eq!(summary.pegs_remaining, 2);
    }
}
