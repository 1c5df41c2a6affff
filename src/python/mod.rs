//! Python bindings for the pegboard engine.
//!
//! # Quick Start
//!
//! ```python
//! import pegboard as pb
//!
//! session = pb.GameSession(size=5)
//! session.tap(pb.Position(0, 0))      # opening move removes the apex peg
//! session.tap(pb.Position(2, 0))      # select
//! outcome = session.tap(pb.Position(0, 0))
//! assert outcome.kind == "jumped"
//!
//! board = session.board
//! grid = board.occupancy()             # numpy uint8 array, lattice order
//! hint = board.hint()
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;
mod py_session;

pub use py_board::*;
pub use py_core::*;
pub use py_session::*;

/// pegboard: triangular peg solitaire.
///
/// This module provides:
/// - Position and Jump value types
/// - Immutable Board with tap handling, move queries and a solver hint
/// - GameSession with undo, pause, score and a caller-driven clock
#[pymodule]
fn pegboard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPosition>()?;
    m.add_class::<PyJump>()?;
    m.add_class::<PyTapOutcome>()?;

    // Board and session
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
