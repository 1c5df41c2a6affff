//! Lattice positions.
//!
//! A board of size `N` is the triangle of cells `(row, col)` with
//! `0 <= col <= row < N`. Row `r` holds `r + 1` cells.

use serde::{Deserialize, Serialize};

/// A cell on the triangular lattice.
///
/// Positions are plain values and are used directly as map keys. They can
/// name cells outside any particular board; use [`Position::is_on_board`]
/// (or a board lookup, which returns `None`) to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the apex.
    pub row: u8,
    /// Column within the row.
    pub col: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a board of the given size.
    #[must_use]
    pub const fn is_on_board(self, size: u8) -> bool {
        self.row < size && self.col <= self.row
    }

    /// Shift by a signed row/column delta.
    ///
    /// Returns `None` if either coordinate would leave the `u8` range.
    /// The result is not checked against any board.
    #[must_use]
    pub fn offset(self, d_row: i16, d_col: i16) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + d_row).ok()?;
        let col = u8::try_from(i16::from(self.col) + d_col).ok()?;
        Some(Self { row, col })
    }

    /// The cell halfway between two positions two steps apart.
    ///
    /// Each axis is handled independently: a delta of 0 keeps the
    /// coordinate, a delta of ±2 moves it one step towards `other`. Any other
    /// delta means `other` is not one jump away and yields `None`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Option<Self> {
        fn axis(from: u8, to: u8) -> Option<i16> {
            match i16::from(to) - i16::from(from) {
                0 => Some(0),
                2 => Some(1),
                -2 => Some(-1),
                _ => None,
            }
        }

        let d_row = axis(self.row, other.row)?;
        let d_col = axis(self.col, other.col)?;
        if d_row == 0 && d_col == 0 {
            return None;
        }
        self.offset(d_row, d_col)
    }

    /// Row-major index of this position within the lattice.
    ///
    /// Row `r` starts at the triangular number `r(r+1)/2`.
    #[must_use]
    pub fn lattice_index(self) -> usize {
        let row = usize::from(self.row);
        row * (row + 1) / 2 + usize::from(self.col)
    }

    /// Iterate every position of a board of the given size in row-major order.
    pub fn all(size: u8) -> impl Iterator<Item = Position> {
        (0..size).flat_map(|row| (0..=row).map(move |col| Position::new(row, col)))
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of cells on a board of the given size: `N(N+1)/2`.
#[must_use]
pub const fn cell_count(size: u8) -> usize {
    let n = size as usize;
    n * (n + 1) / 2
}
