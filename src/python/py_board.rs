//! Board bindings for Python.

use std::borrow::Cow;

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, GameConfig, GameRng, IllegalJumpPolicy, MAX_BOARD_SIZE};
use crate::rules::{self, PegRules};
use crate::session::GameSession;
use crate::solver::{random_playout, Solver, SolverConfig};

use super::py_core::{PyJump, PyPosition, PyTapOutcome};

/// Python wrapper for Board.
///
/// Taps return a new board and leave this one untouched.
#[pyclass(name = "Board")]
#[derive(Clone)]
pub struct PyBoard {
    board: Board,
    rules: PegRules,
}

impl PyBoard {
    pub(crate) fn from_session(session: &GameSession) -> Self {
        Self {
            board: session.board().clone(),
            rules: PegRules::from_config(session.config()),
        }
    }

    fn with_board(&self, board: Board) -> Self {
        Self {
            board,
            rules: self.rules,
        }
    }
}

#[pymethods]
impl PyBoard {
    /// Create a full board.
    ///
    /// # Arguments
    /// - size: Number of rows (1-15)
    /// - clear_on_illegal: Clear the selection on an illegal jump instead of
    ///   selecting the tapped peg
    #[new]
    #[pyo3(signature = (size = 5, clear_on_illegal = false))]
    fn new(size: u8, clear_on_illegal: bool) -> PyResult<Self> {
        let mut config = GameConfig::new().with_board_size(size);
        if clear_on_illegal {
            config = config.with_illegal_jump_policy(IllegalJumpPolicy::ClearSelection);
        }
        config
            .validate()
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(Self {
            board: rules::create_board(size),
            rules: PegRules::from_config(&config),
        })
    }

    /// Restore a board from `to_bytes` output.
    #[staticmethod]
    fn from_bytes(data: &[u8]) -> PyResult<Self> {
        let board =
            Board::from_bytes(data).map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        if board.size() > MAX_BOARD_SIZE {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "board size {} exceeds {}",
                board.size(),
                MAX_BOARD_SIZE
            )));
        }
        Ok(Self {
            board,
            rules: PegRules::default(),
        })
    }

    #[getter]
    fn size(&self) -> u8 {
        self.board.size()
    }

    #[getter]
    fn selection(&self) -> Option<PyPosition> {
        self.board.selection().map(PyPosition)
    }

    #[getter]
    fn remaining_pegs(&self) -> usize {
        self.board.remaining_pegs()
    }

    fn is_first_move(&self) -> bool {
        rules::is_first_move(&self.board)
    }

    fn is_terminal(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    fn is_occupied(&self, pos: &PyPosition) -> bool {
        self.board.is_occupied(pos.0)
    }

    /// Apply a tap. Returns the new board and what happened.
    fn tap(&self, pos: &PyPosition) -> (Self, PyTapOutcome) {
        let result = self.rules.handle_tap(&self.board, pos.0);
        (self.with_board(result.board), result.outcome.into())
    }

    /// Legal destinations for the peg at `pos`.
    fn available_targets(&self, pos: &PyPosition) -> Vec<PyPosition> {
        rules::available_targets(&self.board, pos.0)
            .into_iter()
            .map(PyPosition)
            .collect()
    }

    fn potential_move_count(&self) -> usize {
        rules::potential_move_count(&self.board)
    }

    fn legal_jumps(&self) -> Vec<PyJump> {
        rules::legal_jumps(&self.board).into_iter().map(PyJump).collect()
    }

    /// First jump of a sequence that leaves `target_pegs` pegs, if any.
    #[pyo3(signature = (target_pegs = 1))]
    fn hint(&self, py: Python<'_>, target_pegs: usize) -> Option<PyJump> {
        let board = self.board.clone();
        py.allow_threads(move || {
            let mut solver = Solver::new(SolverConfig::default().with_target_pegs(target_pegs));
            solver.hint(&board).map(PyJump)
        })
    }

    /// Play random moves to the end. Returns the final board.
    #[pyo3(signature = (seed = 42))]
    fn random_playout(&self, seed: u64) -> Self {
        let result = random_playout(&self.board, &mut GameRng::new(seed));
        self.with_board(result.board)
    }

    /// Occupancy per cell in row-major lattice order (1 = peg, 0 = hole).
    fn occupancy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let cells: Vec<u8> = self.board.pegs().map(|peg| u8::from(peg.is_occupied())).collect();
        PyArray1::from_slice_bound(py, &cells)
    }

    /// Encode as compact binary.
    fn to_bytes(&self) -> PyResult<Cow<'static, [u8]>> {
        self.board
            .to_bytes()
            .map(Cow::Owned)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.board == other.board
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(size={}, pegs={}, moves={})",
            self.board.size(),
            self.board.remaining_pegs(),
            rules::potential_move_count(&self.board)
        )
    }
}
