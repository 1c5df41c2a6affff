//! Board state: every lattice cell plus the current selection.
//!
//! Uses an `im` persistent map so that cloning a board (one clone per undo
//! snapshot) is O(1) and successive snapshots share structure.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::peg::Peg;
use super::position::{cell_count, Position};

/// A triangular peg board.
///
/// ## Invariants
///
/// - One [`Peg`] per lattice cell, created once and never resized.
/// - `selection`, when set, names a cell that currently holds a peg.
///
/// Lookups with positions outside the lattice return `None` / `false`;
/// they never panic.
///
/// Serializes through [`BoardSnapshot`](super::BoardSnapshot), so decoding
/// re-checks the invariants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "super::BoardSnapshot", try_from = "super::BoardSnapshot")]
pub struct Board {
    size: u8,
    pegs: OrdMap<Position, Peg>,
    selection: Option<Position>,
}

impl Board {
    /// Create a full board of the given size with no selection.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let pegs = Position::all(size).map(|pos| (pos, Peg::new(pos))).collect();
        Self {
            size,
            pegs,
            selection: None,
        }
    }

    /// Create a board with the given cells already emptied.
    ///
    /// Positions outside the lattice are ignored.
    #[must_use]
    pub fn with_holes(size: u8, holes: impl IntoIterator<Item = Position>) -> Self {
        let mut board = Self::new(size);
        for hole in holes {
            board.set_removed(hole, true);
        }
        board
    }

    /// Board size (number of rows).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of cells, `N(N+1)/2`.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Look up a cell.
    #[must_use]
    pub fn peg(&self, pos: Position) -> Option<&Peg> {
        self.pegs.get(&pos)
    }

    /// Check if a position is part of this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.pegs.contains_key(&pos)
    }

    /// Check if a position is on the board and holds a peg.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.peg(pos).is_some_and(Peg::is_occupied)
    }

    /// Check if a position is on the board and empty.
    #[must_use]
    pub fn is_hole(&self, pos: Position) -> bool {
        self.peg(pos).is_some_and(|peg| peg.is_removed)
    }

    /// Iterate all cells in row-major order.
    pub fn pegs(&self) -> impl Iterator<Item = &Peg> + '_ {
        self.pegs.values()
    }

    /// Iterate the positions that still hold a peg, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.pegs().filter(|peg| peg.is_occupied()).map(|peg| peg.position)
    }

    /// Number of pegs still on the board.
    #[must_use]
    pub fn remaining_pegs(&self) -> usize {
        self.pegs().filter(|peg| peg.is_occupied()).count()
    }

    /// True until the first peg is taken off the board.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        self.pegs().all(Peg::is_occupied)
    }

    /// The peg chosen as the start of a jump, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Pack occupancy into a bitmask, bit `i` set when the cell with
    /// lattice index `i` holds a peg.
    ///
    /// Returns `None` for boards with more than 128 cells.
    #[must_use]
    pub fn occupancy_key(&self) -> Option<u128> {
        if cell_count(self.size) > 128 {
            return None;
        }
        Some(
            self.occupied()
                .fold(0u128, |key, pos| key | (1u128 << pos.lattice_index())),
        )
    }

    // === Mutation (rules only) ===

    /// Set a cell's removed flag. Returns false for off-board positions.
    pub(crate) fn set_removed(&mut self, pos: Position, removed: bool) -> bool {
        match self.pegs.get_mut(&pos) {
            Some(peg) => {
                peg.is_removed = removed;
                if removed && self.selection == Some(pos) {
                    self.selection = None;
                }
                true
            }
            None => false,
        }
    }

    /// Select a cell. Only occupied cells can be selected.
    pub(crate) fn select(&mut self, pos: Position) -> bool {
        if self.is_occupied(pos) {
            self.selection = Some(pos);
            true
        } else {
            false
        }
    }

    /// Clear the selection.
    pub(crate) fn clear_selection(&mut self) {
        self.selection = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_BOARD_SIZE)
    }
}
