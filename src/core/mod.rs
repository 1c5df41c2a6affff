//! Core engine types: positions, directions, pegs, boards, snapshots,
//! configuration, RNG and boundary errors.
//!
//! Nothing here knows the jump rules; see [`crate::rules`].

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod peg;
pub mod position;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use config::{GameConfig, IllegalJumpPolicy, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use direction::Direction;
pub use error::{ConfigError, SnapshotError};
pub use peg::Peg;
pub use position::{cell_count, Position};
pub use rng::{GameRng, RngCheckpoint};
pub use snapshot::BoardSnapshot;
