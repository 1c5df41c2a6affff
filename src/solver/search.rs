//! Depth-first solver.
//!
//! Explores [`legal_jumps`] in lattice order and remembers every occupancy
//! that failed to reach the target, so each dead position is searched once.

use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::Board;
use crate::rules::{apply_jump, legal_jumps, Jump};

use super::config::SolverConfig;
use super::stats::SolveStats;

/// Searches for a jump sequence that leaves at most `target_pegs` pegs.
pub struct Solver {
    config: SolverConfig,
    dead: FxHashSet<u128>,
    stats: SolveStats,
}

impl Solver {
    /// Create a solver.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            dead: FxHashSet::default(),
            stats: SolveStats::default(),
        }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Statistics of the most recent solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Find a winning jump sequence from `board`.
    ///
    /// Returns an empty sequence if the board already meets the target, and
    /// `None` when no sequence exists, the node budget runs out, the board
    /// is still waiting for its opening move, or it is too large to key.
    pub fn solve(&mut self, board: &Board) -> Option<Vec<Jump>> {
        self.stats.reset();
        self.dead.clear();

        if board.is_first_move() || board.occupancy_key().is_none() {
            return None;
        }

        let start = Instant::now();
        let mut path = Vec::new();
        let found = self.search(board, &mut path);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            found,
            nodes = self.stats.nodes_visited,
            pruned = self.stats.transpositions_pruned,
            exhausted = self.stats.exhausted,
            "solve finished"
        );

        found.then_some(path)
    }

    /// The first jump of a winning sequence, if one exists.
    pub fn hint(&mut self, board: &Board) -> Option<Jump> {
        self.solve(board)?.into_iter().next()
    }

    fn search(&mut self, board: &Board, path: &mut Vec<Jump>) -> bool {
        if board.remaining_pegs() <= self.config.target_pegs {
            return true;
        }

        let Some(key) = board.occupancy_key() else {
            return false;
        };
        if self.dead.contains(&key) {
            self.stats.transpositions_pruned += 1;
            return false;
        }
        if self.stats.nodes_visited >= self.config.max_nodes {
            self.stats.exhausted = true;
            return false;
        }

        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(path.len() as u16);

        for jump in legal_jumps(board) {
            let Some(next) = apply_jump(board, &jump) else {
                continue;
            };
            path.push(jump);
            if self.search(&next, path) {
                return true;
            }
            path.pop();
        }

        // A cut-off subtree proves nothing
        if !self.stats.exhausted {
            self.dead.insert(key);
        }
        false
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
