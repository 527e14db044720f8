//! Moves and move history.

use crate::board::PlayerId;
use serde::{Deserialize, Serialize};

/// A request to mark a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A placement that was accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who placed the mark
    pub player: PlayerId,
    pub row: usize,
    pub col: usize,
    /// 1-based index of the placement within the game
    pub turn: usize,
}

impl MoveRecord {
    pub fn position(&self) -> Move {
        Move::new(self.row, self.col)
    }
}
