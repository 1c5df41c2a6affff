//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Position;
use crate::rules::{Jump, TapOutcome};

/// Python wrapper for Position.
#[pyclass(name = "Position")]
#[derive(Clone, Copy, Debug)]
pub struct PyPosition(pub Position);

#[pymethods]
impl PyPosition {
    #[new]
    fn new(row: u8, col: u8) -> Self {
        Self(Position::new(row, col))
    }

    #[getter]
    fn row(&self) -> u8 {
        self.0.row
    }

    #[getter]
    fn col(&self) -> u8 {
        self.0.col
    }

    /// Whether this position lies on a board of the given size.
    fn is_on_board(&self, size: u8) -> bool {
        self.0.is_on_board(size)
    }

    /// Index in row-major lattice order.
    fn lattice_index(&self) -> usize {
        self.0.lattice_index()
    }

    fn __repr__(&self) -> String {
        format!("Position({}, {})", self.0.row, self.0.col)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (u64::from(self.0.row) << 8) | u64::from(self.0.col)
    }
}

/// Python wrapper for Jump.
#[pyclass(name = "Jump")]
#[derive(Clone, Copy, Debug)]
pub struct PyJump(pub Jump);

#[pymethods]
impl PyJump {
    #[getter]
    fn start(&self) -> PyPosition {
        PyPosition(self.0.start)
    }

    #[getter]
    fn middle(&self) -> PyPosition {
        PyPosition(self.0.middle)
    }

    #[getter]
    fn end(&self) -> PyPosition {
        PyPosition(self.0.end)
    }

    fn __repr__(&self) -> String {
        format!("Jump({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Outcome of a tap, flattened for Python.
///
/// `kind` is one of `ignored`, `first_peg_removed`, `selected`,
/// `deselected`, `jumped`, `reselected`, `rejected`.
#[pyclass(name = "TapOutcome")]
#[derive(Clone, Debug)]
pub struct PyTapOutcome {
    #[pyo3(get)]
    kind: &'static str,
    #[pyo3(get)]
    completed: bool,
    #[pyo3(get)]
    position: Option<PyPosition>,
    #[pyo3(get)]
    jump: Option<PyJump>,
}

#[pymethods]
impl PyTapOutcome {
    fn __repr__(&self) -> String {
        format!("TapOutcome(kind={}, completed={})", self.kind, self.completed)
    }
}

impl From<TapOutcome> for PyTapOutcome {
    fn from(outcome: TapOutcome) -> Self {
        let (kind, position, jump) = match outcome {
            TapOutcome::Ignored => ("ignored", None, None),
            TapOutcome::FirstPegRemoved(pos) => ("first_peg_removed", Some(pos), None),
            TapOutcome::Selected(pos) => ("selected", Some(pos), None),
            TapOutcome::Deselected => ("deselected", None, None),
            TapOutcome::Jumped(jump) => ("jumped", Some(jump.end), Some(jump)),
            TapOutcome::Reselected(pos) => ("reselected", Some(pos), None),
            TapOutcome::Rejected => ("rejected", None, None),
        };
        Self {
            kind,
            completed: outcome.completed(),
            position: position.map(PyPosition),
            jump: jump.map(PyJump),
        }
    }
}
