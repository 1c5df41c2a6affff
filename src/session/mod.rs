//! Game sessions: the derived state a front end keeps around the board.
//!
//! - [`GameSession`]: current board, undo history, score, pause/restart
//! - [`GameClock`]: caller-driven elapsed-seconds counter
//! - [`GameSummary`]: numbers reported at game over

mod clock;
mod game;

pub use clock::GameClock;
pub use game::{GameSession, GameSummary};
