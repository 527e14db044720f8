//! Game configuration.

use crate::board::Board;
use crate::game::GameError;
use crate::turn::TurnSequencer;
use crate::win::WinDetector;
use serde::{Deserialize, Serialize};

/// Board size, run length, and player count for one game.
///
/// A config is fixed for the lifetime of an engine. Bounds are checked when the
/// engine is built, not on every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Marks in a row needed to win (k)
    pub win_length: usize,
    /// Number of players, 2 to 4
    pub player_count: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::gomoku()
    }
}

impl GameConfig {
    pub fn new(width: usize, height: usize, win_length: usize, player_count: u8) -> Self {
        Self {
            width,
            height,
            win_length,
            player_count,
        }
    }

    /// Classic 3x3, three in a row, two players
    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3, 2)
    }

    /// Open 30x30 board, five in a row, two players
    pub fn gomoku() -> Self {
        Self::new(30, 30, 5, 2)
    }

    /// Check every bound, reporting the first violation.
    ///
    /// Dimensions are checked before the win length, so a zero-sized board is
    /// reported as `InvalidDimensions` rather than `InvalidWinLength`.
    pub fn validate(&self) -> Result<(), GameError> {
        Board::check_dimensions(self.width, self.height)?;
        TurnSequencer::new(self.player_count)?;
        WinDetector::new(self.win_length, self.width, self.height)?;
        Ok(())
    }
}
