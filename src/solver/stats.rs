//! Counters reported by the solver.

use serde::{Deserialize, Serialize};

/// What the last [`Solver::solve`](super::Solver::solve) call did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Positions visited.
    pub nodes_visited: u64,

    /// Positions skipped because they were already known to be dead ends.
    pub transpositions_pruned: u64,

    /// Deepest jump sequence explored.
    pub max_depth: u16,

    /// True if the node budget ran out before the search finished.
    pub exhausted: bool,

    /// Wall time of the search in microseconds.
    pub time_us: u64,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Search throughput. Zero if no time was recorded.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        match self.time_us {
            0 => 0.0,
            us => self.nodes_visited as f64 * 1_000_000.0 / us as f64,
        }
    }

    /// Fraction of visits answered by the transposition set.
    #[must_use]
    pub fn prune_rate(&self) -> f64 {
        let total = self.nodes_visited + self.transpositions_pruned;
        if total == 0 {
            0.0
        } else {
            self.transpositions_pruned as f64 / total as f64
        }
    }
}
