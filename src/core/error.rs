//! Boundary errors.
//!
//! Rule evaluation never fails: illegal taps are outcomes, not errors.
//! These types cover configuration and snapshot decoding only.

use thiserror::Error;

use super::position::Position;

/// Invalid game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Board size outside the supported range.
    #[error("board size {size} is outside 1..={max}")]
    BoardSize { size: u8, max: u8 },

    /// A completed move must be worth something.
    #[error("points per move must be positive")]
    ZeroPoints,

    /// Configuration JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A board snapshot that cannot be restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Cell flags do not match the lattice of the stated size.
    #[error("snapshot of size {size} needs {expected} cells, found {found}")]
    CellCount {
        size: u8,
        expected: usize,
        found: usize,
    },

    /// The selection names a cell that is off the board or empty.
    #[error("selection {0} is not an occupied cell")]
    InvalidSelection(Position),

    /// Binary payload could not be decoded.
    #[error("invalid snapshot bytes: {0}")]
    Binary(#[from] bincode::Error),

    /// JSON payload could not be decoded.
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}
