//! A single board cell.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// One cell of the board and whether its peg has been removed.
///
/// Every lattice cell has a `Peg` for the whole game; removing a peg only
/// flips `is_removed`, so "peg" and "hole" are the same record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peg {
    /// Where this peg sits. Stable identity key.
    pub position: Position,
    /// True once the peg has been taken off the board.
    pub is_removed: bool,
}

impl Peg {
    /// Create a peg that is present on the board.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            is_removed: false,
        }
    }

    /// Check if the cell holds a peg.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        !self.is_removed
    }
}
