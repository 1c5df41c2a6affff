//! The six jump directions of the triangular lattice.
//!
//! Offsets at distance `k` from `(r, c)`:
//!
//! | Direction   | Cell            |
//! |-------------|-----------------|
//! | `Left`      | `(r, c-k)`      |
//! | `Right`     | `(r, c+k)`      |
//! | `UpLeft`    | `(r-k, c-k)`    |
//! | `UpRight`   | `(r-k, c)`      |
//! | `DownLeft`  | `(r+k, c)`      |
//! | `DownRight` | `(r+k, c+k)`    |
//!
//! `(+k, -k)` and `(-k, +k)` are not lattice directions.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A straight-line direction on the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All six directions.
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Unit `(row, col)` delta for this direction.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 0),
            Direction::DownLeft => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }

    /// The position `distance` steps away from `from`.
    ///
    /// Returns `None` only on coordinate underflow/overflow; the result may
    /// still be off any particular board.
    #[must_use]
    pub fn step(self, from: Position, distance: u8) -> Option<Position> {
        let (d_row, d_col) = self.delta();
        let k = i16::from(distance);
        from.offset(d_row * k, d_col * k)
    }

    /// The direction in which `to` is exactly two steps from `from`.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.step(from, 2) == Some(to))
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_table() {
        let p = Position::new(4, 2);
        assert_eq!(Direction::Left.step(p, 2), Some(Position::new(4, 0)));
        assert_eq!(Direction::Right.step(p, 2), Some(Position::new(4, 4)));
        assert_eq!(Direction::UpLeft.step(p, 2), Some(Position::new(2, 0)));
        assert_eq!(Direction::UpRight.step(p, 2), Some(Position::new(2, 2)));
        assert_eq!(Direction::DownLeft.step(p, 1), Some(Position::new(5, 2)));
        assert_eq!(Direction::DownRight.step(p, 1), Some(Position::new(5, 3)));
    }

    #[test]
    fn test_step_underflow() {
        assert_eq!(Direction::UpLeft.step(Position::new(1, 1), 2), None);
        assert_eq!(Direction::Left.step(Position::new(3, 1), 2), None);
    }

    #[test]
    fn test_between_rejects_square_diagonals() {
        let p = Position::new(2, 2);
        assert_eq!(Direction::between(p, Position::new(4, 0)), None);
        assert_eq!(Direction::between(p, Position::new(0, 4)), None);
        assert_eq!(Direction::between(p, Position::new(4, 4)), Some(Direction::DownRight));
        assert_eq!(Direction::between(p, Position::new(0, 0)), Some(Direction::UpLeft));
        assert_eq!(Direction::between(p, p), None);
    }

    #[test]
    fn test_opposite_undoes_step() {
        let p = Position::new(6, 3);
        for dir in Direction::ALL {
            let there = dir.step(p, 2).unwrap();
            assert_eq!(dir.opposite().step(there, 2), Some(p));
            assert_ne!(dir.opposite(), dir);
        }
    }
}
