//! Automated play: exhaustive search and random playouts.
//!
//! - [`Solver`]: depth-first search with a dead-position set, used for hints
//! - [`random_playout`]: uniformly random moves until the board is stuck

mod config;
mod playout;
mod search;
mod stats;

pub use config::SolverConfig;
pub use playout::{best_of_playouts, random_playout, PlayoutResult};
pub use search::Solver;
pub use stats::SolveStats;
