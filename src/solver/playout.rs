//! Random playouts.
//!
//! A playout plays uniformly random legal moves until the board is terminal.
//! Useful as a cheap baseline next to [`Solver`](super::Solver) and for
//! generating test positions.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, GameRng, Position};
use crate::rules::{apply_jump, handle_tap, legal_jumps, Jump};

/// Record of one finished playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutResult {
    /// Peg removed by the opening move, if the playout started on a full board.
    pub opening: Option<Position>,
    /// Jumps played, in order.
    pub jumps: Vec<Jump>,
    /// Pegs left at the end.
    pub pegs_remaining: usize,
    /// Final board.
    pub board: Board,
}

/// Play random moves from `board` until no move is left.
pub fn random_playout(board: &Board, rng: &mut GameRng) -> PlayoutResult {
    let mut current = board.clone();
    let mut opening = None;

    if current.is_first_move() {
        let cells: Vec<Position> = current.occupied().collect();
        if let Some(&pos) = rng.pick(&cells) {
            current = handle_tap(&current, pos).board;
            opening = Some(pos);
        }
    }

    let mut jumps = Vec::new();
    loop {
        let moves = legal_jumps(&current);
        let Some(jump) = rng.pick(&moves).copied() else {
            break;
        };
        let Some(next) = apply_jump(&current, &jump) else {
            break;
        };
        trace!(%jump, "playout move");
        current = next;
        jumps.push(jump);
    }

    PlayoutResult {
        opening,
        jumps,
        pegs_remaining: current.remaining_pegs(),
        board: current,
    }
}

/// Run `count` independent playouts and keep the one with the fewest pegs.
///
/// Each playout draws from its own fork of `rng`. Ties keep the earliest.
pub fn best_of_playouts(board: &Board, count: usize, rng: &mut GameRng) -> Option<PlayoutResult> {
    let mut best: Option<PlayoutResult> = None;
    for _ in 0..count {
        let mut branch = rng.fork();
        let result = random_playout(board, &mut branch);
        if best
            .as_ref()
            .map_or(true, |b| result.pegs_remaining < b.pegs_remaining)
        {
            best = Some(result);
        }
    }
    best
}
