//! Game configuration.
//!
//! The defaults reproduce the classic 15-hole triangle: a board of five
//! rows, 150 points per completed move, and reselection on an illegal jump.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board size used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: u8 = 5;

/// Largest supported board. Its 120 cells still fit in a `u128` occupancy key.
pub const MAX_BOARD_SIZE: u8 = 15;

/// Points awarded per completed move.
pub const DEFAULT_POINTS_PER_MOVE: u32 = 150;

/// What a tap does when it names neither the selection nor a legal jump
/// destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalJumpPolicy {
    /// Select the tapped peg instead (an empty hole clears the selection).
    #[default]
    Reselect,
    /// Drop the selection.
    ClearSelection,
}

/// Complete configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows in the triangle.
    pub board_size: u8,

    /// Score added per completed move (the opening removal included).
    pub points_per_move: u32,

    /// Recovery from an illegal jump attempt.
    pub illegal_jump_policy: IllegalJumpPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            points_per_move: DEFAULT_POINTS_PER_MOVE,
            illegal_jump_policy: IllegalJumpPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    /// Set points per completed move.
    #[must_use]
    pub fn with_points_per_move(mut self, points: u32) -> Self {
        self.points_per_move = points;
        self
    }

    /// Set the illegal jump policy.
    #[must_use]
    pub fn with_illegal_jump_policy(mut self, policy: IllegalJumpPolicy) -> Self {
        self.illegal_jump_policy = policy;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.points_per_move == 0 {
            return Err(ConfigError::ZeroPoints);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
