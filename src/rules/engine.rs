//! Tap handling, move generation and terminal detection.
//!
//! The engine is a set of pure functions over [`Board`]. `handle_tap` is the
//! only state transition; everything else is a query. All operations are
//! total: positions outside the lattice are ignored, never a panic.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Board, Direction, GameConfig, IllegalJumpPolicy, Position};

use super::jump::Jump;

/// Jump destinations of a single peg. There are at most six.
pub type Targets = SmallVec<[Position; 6]>;

/// What a tap did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap changed nothing (off the board, or an empty hole with no
    /// selection).
    Ignored,
    /// Opening move: the tapped peg was taken off a full board.
    FirstPegRemoved(Position),
    /// The tapped peg became the selection.
    Selected(Position),
    /// The selected peg was tapped again and deselected.
    Deselected,
    /// The selected peg jumped.
    Jumped(Jump),
    /// Not a legal destination; the tapped peg was selected instead.
    Reselected(Position),
    /// Not a legal jump; the selection was cleared.
    Rejected,
}

impl TapOutcome {
    /// True when the tap completed a move (opening removal or a jump).
    #[must_use]
    pub fn completed(&self) -> bool {
        matches!(self, TapOutcome::FirstPegRemoved(_) | TapOutcome::Jumped(_))
    }
}

/// Result of [`PegRules::handle_tap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapResult {
    /// The board after the tap.
    pub board: Board,
    /// Whether a move completed. Callers push history and score on this.
    pub completed: bool,
    /// Detailed outcome.
    pub outcome: TapOutcome,
}

/// Tap rules, parameterised by how illegal jumps are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PegRules {
    policy: IllegalJumpPolicy,
}

impl PegRules {
    /// Create rules with the given illegal jump policy.
    #[must_use]
    pub const fn new(policy: IllegalJumpPolicy) -> Self {
        Self { policy }
    }

    /// Create rules from a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.illegal_jump_policy)
    }

    /// The illegal jump policy in effect.
    #[must_use]
    pub fn policy(&self) -> IllegalJumpPolicy {
        self.policy
    }

    /// Apply a tap to a copy of `board`.
    #[must_use]
    pub fn handle_tap(&self, board: &Board, tapped: Position) -> TapResult {
        let mut next = board.clone();
        let outcome = self.apply_tap(&mut next, tapped);
        TapResult {
            board: next,
            completed: outcome.completed(),
            outcome,
        }
    }

    /// Apply a tap in place.
    ///
    /// Priority order: off-board, opening move, re-tap of the selection,
    /// new selection, jump attempt.
    pub fn apply_tap(&self, board: &mut Board, tapped: Position) -> TapOutcome {
        if !board.contains(tapped) {
            trace!(%tapped, "tap outside the board ignored");
            return TapOutcome::Ignored;
        }

        if board.is_first_move() {
            board.set_removed(tapped, true);
            board.clear_selection();
            debug!(%tapped, "opening peg removed");
            return TapOutcome::FirstPegRemoved(tapped);
        }

        match board.selection() {
            Some(selected) if selected == tapped => {
                board.clear_selection();
                TapOutcome::Deselected
            }
            None => {
                if board.select(tapped) {
                    TapOutcome::Selected(tapped)
                } else {
                    trace!(%tapped, "empty hole tapped with no selection");
                    TapOutcome::Ignored
                }
            }
            Some(start) => self.attempt_jump(board, start, tapped),
        }
    }

    fn attempt_jump(&self, board: &mut Board, start: Position, tapped: Position) -> TapOutcome {
        if let Some(jump) = Jump::between(start, tapped) {
            if board.is_hole(jump.end) {
                if jump.is_legal(board) {
                    board.set_removed(jump.start, true);
                    board.set_removed(jump.middle, true);
                    board.set_removed(jump.end, false);
                    board.clear_selection();
                    debug!(%jump, remaining = board.remaining_pegs(), "jump completed");
                    return TapOutcome::Jumped(jump);
                }

                // Reachable hole, but nothing to jump over
                trace!(%jump, "jump over an empty cell rejected");
                board.clear_selection();
                return TapOutcome::Rejected;
            }
        }

        if self.policy == IllegalJumpPolicy::Reselect && board.select(tapped) {
            return TapOutcome::Reselected(tapped);
        }

        trace!(%start, %tapped, "illegal jump, selection cleared");
        board.clear_selection();
        TapOutcome::Rejected
    }
}

// === Queries ===

/// Create a full board of the given size.
#[must_use]
pub fn create_board(size: u8) -> Board {
    Board::new(size)
}

/// True iff no peg has been removed yet.
#[must_use]
pub fn is_first_move(board: &Board) -> bool {
    board.is_first_move()
}

/// Apply a tap with the default (reselect) rules.
#[must_use]
pub fn handle_tap(board: &Board, tapped: Position) -> TapResult {
    PegRules::default().handle_tap(board, tapped)
}

/// Legal jump destinations for the peg at `from`.
///
/// Empty when `from` is off the board or holds no peg.
#[must_use]
pub fn available_targets(board: &Board, from: Position) -> Targets {
    jumps_from(board, from).map(|jump| jump.end).collect()
}

/// Legal jumps starting at `from`, in direction-table order.
pub fn jumps_from(board: &Board, from: Position) -> impl Iterator<Item = Jump> + '_ {
    let occupied = board.is_occupied(from);
    Direction::ALL
        .into_iter()
        .filter(move |_| occupied)
        .filter_map(move |dir| Jump::toward(from, dir))
        .filter(move |jump| board.is_occupied(jump.middle) && board.is_hole(jump.end))
}

/// Number of jumps available to the peg at `from`.
#[must_use]
pub fn potential_moves_for(board: &Board, from: Position) -> usize {
    jumps_from(board, from).count()
}

/// Total number of moves available.
///
/// On a full board any peg may be removed, so this is the peg count.
/// Otherwise it is the number of legal jumps. Zero means the game is over.
#[must_use]
pub fn potential_move_count(board: &Board) -> usize {
    if board.is_first_move() {
        return board.peg_count();
    }
    board
        .occupied()
        .map(|pos| potential_moves_for(board, pos))
        .sum()
}

/// Pegs still on the board.
#[must_use]
pub fn remaining_pegs(board: &Board) -> usize {
    board.remaining_pegs()
}

/// True when no move is left.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    potential_move_count(board) == 0
}

/// Every legal jump on the board, in lattice order of the moving peg.
#[must_use]
pub fn legal_jumps(board: &Board) -> Vec<Jump> {
    board
        .occupied()
        .flat_map(|pos| jumps_from(board, pos))
        .collect()
}

/// Apply a jump directly, bypassing selection.
///
/// Returns `None` if the jump is not legal on this board. The returned board
/// has no selection.
#[must_use]
pub fn apply_jump(board: &Board, jump: &Jump) -> Option<Board> {
    if !jump.is_legal(board) {
        return None;
    }
    let mut next = board.clone();
    next.set_removed(jump.start, true);
    next.set_removed(jump.middle, true);
    next.set_removed(jump.end, false);
    next.clear_selection();
    Some(next)
}
