//! # pegboard
//!
//! A rules engine for triangular peg solitaire.
//!
//! ## Design Principles
//!
//! 1. **Total Operations**: Every engine call accepts any position. Taps
//!    outside the lattice and illegal jumps are outcomes, never panics or
//!    errors.
//!
//! 2. **Value Boards**: A tap returns a new [`Board`]. Boards are
//!    persistent maps, so the old one stays valid and cloning is O(1).
//!
//! 3. **Derived State**: Score, pause and game-over flags are computed from
//!    the history and the board, never stored alongside them.
//!
//! ## Architecture
//!
//! - **Tap State Machine**: opening removal, select, deselect, jump,
//!   illegal-jump recovery. See [`rules::PegRules`].
//!
//! - **Sessions**: undo history of board snapshots, score, and a
//!   caller-driven clock. See [`session::GameSession`].
//!
//! ## Modules
//!
//! - `core`: Positions, directions, boards, snapshots, configuration, RNG
//! - `rules`: Tap handling, move generation, terminal detection
//! - `session`: Undo history, score, pause, clock
//! - `solver`: Exhaustive search for hints and random playouts

pub mod core;
pub mod rules;
pub mod session;
pub mod solver;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSnapshot, ConfigError, Direction, GameConfig, GameRng, IllegalJumpPolicy, Peg,
    Position, SnapshotError,
};

pub use crate::rules::{
    available_targets, create_board, handle_tap, is_first_move, potential_move_count, Jump,
    PegRules, TapOutcome, TapResult,
};

pub use crate::session::{GameClock, GameSession, GameSummary};

pub use crate::solver::{random_playout, PlayoutResult, SolveStats, Solver, SolverConfig};
