//! Peg-solitaire rules.
//!
//! - [`handle_tap`] / [`PegRules`]: the tap state machine (opening removal,
//!   select, deselect, jump, illegal-jump recovery)
//! - [`available_targets`], [`legal_jumps`]: move generation
//! - [`potential_move_count`], [`is_terminal`]: game-over detection
//!
//! Callers (a game session, a UI, the solver) drive the board only through
//! these functions.

pub mod engine;
pub mod jump;

pub use engine::{
    apply_jump, available_targets, create_board, handle_tap, is_first_move, is_terminal,
    jumps_from, legal_jumps, potential_move_count, potential_moves_for, remaining_pegs, PegRules,
    TapOutcome, TapResult, Targets,
};
pub use jump::Jump;
