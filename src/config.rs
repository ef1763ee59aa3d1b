//! Settings of a new game and their defaults.

use crate::game::{Error, GameResult};

/// Rows of the classic board.
pub const DEFAULT_ROWS: usize = 6;
/// Columns of the classic board.
pub const DEFAULT_COLUMNS: usize = 7;
/// Label of the player moving first.
pub const DEFAULT_PLAYER_A: &str = "X";
/// Label of the player moving second.
pub const DEFAULT_PLAYER_B: &str = "O";

/// Board dimensions and player labels of a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of rows, at least one.
    pub rows: usize,
    /// Number of columns, at least one.
    pub columns: usize,
    /// Label of player A, its first character marks the pawns.
    pub player_a: String,
    /// Label of player B.
    pub player_b: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            player_a: DEFAULT_PLAYER_A.to_string(),
            player_b: DEFAULT_PLAYER_B.to_string(),
        }
    }
}

impl EngineConfig {
    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> GameResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(Error::InvalidDim);
        }
        if self.player_a == self.player_b {
            log::warn!(
                "both players use the label {:?}, pawns will look alike",
                self.player_a
            );
        }
        Ok(())
    }
}
