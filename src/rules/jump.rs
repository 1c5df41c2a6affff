//! Jumps: a peg hopping over a neighbour into an empty cell.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, Position};

/// A `(start, middle, end)` triple.
///
/// Constructing a `Jump` only checks geometry (the three cells lie on one
/// lattice line, two steps apart). Whether it is legal depends on the board;
/// see [`Jump::is_legal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    /// The peg that moves.
    pub start: Position,
    /// The peg that is jumped over and removed.
    pub middle: Position,
    /// The empty cell the moving peg lands in.
    pub end: Position,
}

impl Jump {
    /// The jump from `start` in `direction`, if the coordinates exist.
    #[must_use]
    pub fn toward(start: Position, direction: Direction) -> Option<Self> {
        Some(Self {
            start,
            middle: direction.step(start, 1)?,
            end: direction.step(start, 2)?,
        })
    }

    /// The jump from `start` to `end`.
    ///
    /// `end` must be the offset-2 cell of `start` in one of the six lattice
    /// directions; anything else (including the square-grid diagonals) is
    /// not a jump.
    #[must_use]
    pub fn between(start: Position, end: Position) -> Option<Self> {
        Direction::between(start, end)?;
        let middle = start.midpoint(end)?;
        Some(Self { start, middle, end })
    }

    /// The lattice direction of travel.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.start, self.end)
    }

    /// Check the jump against a board: pegs at `start` and `middle`, a hole
    /// at `end`, and all three cells on one lattice line.
    #[must_use]
    pub fn is_legal(&self, board: &Board) -> bool {
        Self::between(self.start, self.end).as_ref() == Some(self)
            && board.is_occupied(self.start)
            && board.is_occupied(self.middle)
            && board.is_hole(self.end)
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} over {}", self.start, self.end, self.middle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_matches_toward() {
        let start = Position::new(2, 2);
        for dir in Direction::ALL {
            let Some(jump) = Jump::toward(start, dir) else {
                continue;
            };
            assert_eq!(Jump::between(start, jump.end), Some(jump));
            assert_eq!(jump.direction(), Some(dir));
        }
    }

    #[test]
    fn test_between_rejects_non_lattice_lines() {
        let start = Position::new(2, 0);
        // Square-grid diagonal: axis rule finds a middle, lattice table does not
        assert_eq!(Position::new(2, 2).midpoint(Position::new(4, 0)), Some(Position::new(3, 1)));
        assert_eq!(Jump::between(Position::new(2, 2), Position::new(4, 0)), None);
        // Too far
        assert_eq!(Jump::between(start, Position::new(2, 4)), None);
        // Adjacent
        assert_eq!(Jump::between(start, Position::new(2, 1)), None);
        // Self
        assert_eq!(Jump::between(start, start), None);
    }

    #[test]
    fn test_is_legal() {
        let board = Board::with_holes(5, [Position::new(4, 2)]);
        let jump = Jump::between(Position::new(4, 0), Position::new(4, 2)).unwrap();
        assert_eq!(jump.middle, Position::new(4, 1));
        assert!(jump.is_legal(&board));

        // Destination occupied
        let full = Board::new(5);
        assert!(!jump.is_legal(&full));

        // Middle empty
        let board = Board::with_holes(5, [Position::new(4, 1), Position::new(4, 2)]);
        assert!(!jump.is_legal(&board));
    }

    #[test]
    fn test_is_legal_rejects_forged_middle() {
        let board = Board::with_holes(5, [Position::new(4, 2)]);
        let forged = Jump {
            start: Position::new(4, 0),
            middle: Position::new(3, 0),
            end: Position::new(4, 2),
        };
        assert!(!forged.is_legal(&board));
    }

    #[test]
    fn test_toward_underflow() {
        assert_eq!(Jump::toward(Position::new(0, 0), Direction::UpRight), None);
        assert!(Jump::toward(Position::new(0, 0), Direction::DownRight).is_some());
    }
}
