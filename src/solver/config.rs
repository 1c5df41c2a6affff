//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Stop once this many pegs (or fewer) remain (default: 1).
    pub target_pegs: usize,

    /// Maximum positions to visit before giving up.
    /// Prevents runaway searches on large boards.
    pub max_nodes: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target_pegs: 1,
            max_nodes: 2_000_000,
        }
    }
}

impl SolverConfig {
    /// Set the number of pegs a solution may leave.
    pub fn with_target_pegs(mut self, pegs: usize) -> Self {
        self.target_pegs = pegs;
        self
    }

    /// Set the node budget.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = nodes;
        self
    }
}
