//! Serializable board snapshots.
//!
//! A snapshot is the board's position → removed-flag mapping in row-major
//! lattice order plus the selection. Restoring validates both, so a decoded
//! snapshot always yields a board that upholds the [`Board`] invariants.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::SnapshotError;
use super::position::{cell_count, Position};

/// Plain-data copy of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board size (number of rows).
    pub size: u8,
    /// Removed flag per cell, indexed by [`Position::lattice_index`].
    pub removed: Vec<bool>,
    /// Selected peg, if any.
    pub selection: Option<Position>,
}

impl BoardSnapshot {
    /// Encode as compact binary (bincode).
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from [`BoardSnapshot::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Board {
    /// Capture this board as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size(),
            removed: self.pegs().map(|peg| peg.is_removed).collect(),
            selection: self.selection(),
        }
    }

    /// Rebuild a board from a snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, SnapshotError> {
        let expected = cell_count(snapshot.size);
        if snapshot.removed.len() != expected {
            return Err(SnapshotError::CellCount {
                size: snapshot.size,
                expected,
                found: snapshot.removed.len(),
            });
        }

        let holes = Position::all(snapshot.size)
            .zip(&snapshot.removed)
            .filter(|(_, removed)| **removed)
            .map(|(pos, _)| pos);
        let mut board = Board::with_holes(snapshot.size, holes);

        if let Some(selection) = snapshot.selection {
            if !board.select(selection) {
                return Err(SnapshotError::InvalidSelection(selection));
            }
        }

        Ok(board)
    }

    /// Encode this board as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        self.snapshot().to_bytes()
    }

    /// Decode a board from [`Board::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Self::from_snapshot(&BoardSnapshot::from_bytes(bytes)?)
    }
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        board.snapshot()
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        Board::from_snapshot(&snapshot)
    }
}
