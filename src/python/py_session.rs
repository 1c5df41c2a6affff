//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, IllegalJumpPolicy};
use crate::session::GameSession;

use super::py_board::PyBoard;
use super::py_core::{PyPosition, PyTapOutcome};

/// Python wrapper for GameSession.
///
/// The clock only moves when `tick()` is called; drive it from a timer.
#[pyclass(name = "GameSession")]
pub struct PyGameSession(GameSession);

#[pymethods]
impl PyGameSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - size: Number of rows (1-15)
    /// - points_per_move: Score awarded per completed move
    /// - clear_on_illegal: Clear the selection on an illegal jump
    #[new]
    #[pyo3(signature = (size = 5, points_per_move = 150, clear_on_illegal = false))]
    fn new(size: u8, points_per_move: u32, clear_on_illegal: bool) -> PyResult<Self> {
        let policy = if clear_on_illegal {
            IllegalJumpPolicy::ClearSelection
        } else {
            IllegalJumpPolicy::Reselect
        };
        let config = GameConfig::new()
            .with_board_size(size)
            .with_points_per_move(points_per_move)
            .with_illegal_jump_policy(policy);
        GameSession::new(config)
            .map(Self)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Create a session from a JSON configuration.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        GameConfig::from_json(json)
            .and_then(GameSession::new)
            .map(Self)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    fn tap(&mut self, pos: &PyPosition) -> PyTapOutcome {
        self.0.tap(pos.0).into()
    }

    fn undo(&mut self) -> bool {
        self.0.undo()
    }

    fn toggle_pause(&mut self) -> bool {
        self.0.toggle_pause()
    }

    fn restart(&mut self) {
        self.0.restart();
    }

    /// Advance the clock one second. Returns false if it is not running.
    fn tick(&mut self) -> bool {
        self.0.tick()
    }

    /// Copy of the current board.
    #[getter]
    fn board(&self) -> PyBoard {
        PyBoard::from_session(&self.0)
    }

    #[getter]
    fn score(&self) -> u64 {
        self.0.score()
    }

    #[getter]
    fn max_score(&self) -> u64 {
        self.0.max_score()
    }

    #[getter]
    fn seconds_elapsed(&self) -> u64 {
        self.0.seconds_elapsed()
    }

    #[getter]
    fn moves_made(&self) -> usize {
        self.0.moves_made()
    }

    fn is_first_move(&self) -> bool {
        self.0.is_first_move()
    }

    fn is_paused(&self) -> bool {
        self.0.is_paused()
    }

    fn is_game_over(&self) -> bool {
        self.0.is_game_over()
    }

    fn can_undo(&self) -> bool {
        self.0.can_undo()
    }

    fn can_pause(&self) -> bool {
        self.0.can_pause()
    }

    fn can_restart(&self) -> bool {
        self.0.can_restart()
    }

    fn __repr__(&self) -> String {
        let status = if self.0.is_game_over() {
            "over"
        } else if self.0.is_paused() {
            "paused"
        } else {
            "playing"
        };
        format!(
            "GameSession(score={}, pegs={}, status={})",
            self.0.score(),
            self.0.board().remaining_pegs(),
            status
        )
    }
}
