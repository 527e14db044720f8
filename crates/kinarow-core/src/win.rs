//! Win detection.
//!
//! A placement wins when the anchor cell (the mark just placed) sits on a
//! contiguous run of at least `win_length` marks of the same player along one
//! of four axes. Each axis is checked by walking outward from the anchor in
//! both directions, so a check costs O(k) per axis regardless of board size.

use crate::board::{Board, Cell, PlayerId};
use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Win lengths must be strictly greater than this
const WIN_LENGTH_FLOOR: usize = 2;

/// One of the four line families through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Positive `(row, col)` step; the negative step is its negation
    pub fn step(&self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// A completed run through the anchor cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: PlayerId,
    pub axis: Axis,
    /// Every cell of the run in step order, anchor included
    pub cells: Vec<(usize, usize)>,
}

/// Decides whether a placement completed a line of the required length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinDetector {
    win_length: usize,
}

impl WinDetector {
    /// Create a detector for a `width` x `height` board.
    ///
    /// `win_length` must be greater than 2 and fit along both dimensions.
    pub fn new(win_length: usize, width: usize, height: usize) -> Result<Self, GameError> {
        if win_length <= WIN_LENGTH_FLOOR || win_length > width || win_length > height {
            return Err(GameError::InvalidWinLength {
                win_length,
                width,
                height,
            });
        }
        Ok(Self { win_length })
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Check whether the mark at `(row, col)` completes a winning line.
    ///
    /// An empty anchor never wins.
    pub fn check(&self, board: &Board, row: usize, col: usize) -> Result<bool, GameError> {
        let Some(player) = board.get(row, col)?.owner() else {
            return Ok(false);
        };
        // Each side only needs to contribute k - 1 marks
        let limit = self.win_length - 1;

        Ok(Axis::ALL.iter().any(|axis| {
            let (dr, dc) = axis.step();
            let forward = walk(board, row, col, (dr, dc), player, limit);
            let backward = walk(board, row, col, (-dr, -dc), player, limit);
            1 + forward + backward >= self.win_length
        }))
    }

    /// Length of the run through `(row, col)` along one axis (0 if empty)
    pub fn run_length(
        &self,
        board: &Board,
        row: usize,
        col: usize,
        axis: Axis,
    ) -> Result<usize, GameError> {
        let Some(player) = board.get(row, col)?.owner() else {
            return Ok(0);
        };
        let (dr, dc) = axis.step();
        let forward = walk(board, row, col, (dr, dc), player, usize::MAX);
        let backward = walk(board, row, col, (-dr, -dc), player, usize::MAX);
        Ok(1 + forward + backward)
    }

    /// The full winning run through `(row, col)`, if there is one.
    ///
    /// Axes are tried in [`Axis::ALL`] order and the first qualifying run is
    /// returned.
    pub fn winning_line(
        &self,
        board: &Board,
        row: usize,
        col: usize,
    ) -> Result<Option<WinningLine>, GameError> {
        let Some(player) = board.get(row, col)?.owner() else {
            return Ok(None);
        };

        for axis in Axis::ALL {
            let (dr, dc) = axis.step();
            let forward = walk(board, row, col, (dr, dc), player, usize::MAX);
            let backward = walk(board, row, col, (-dr, -dc), player, usize::MAX);
            let total = 1 + forward + backward;
            if total < self.win_length {
                continue;
            }

            // Both ends were just walked, so every offset stays on the board
            let start = offset((row, col), (-dr, -dc), backward);
            let cells = (0..total)
                .filter_map(|i| start.and_then(|s| offset(s, (dr, dc), i)))
                .collect();
            return Ok(Some(WinningLine {
                player,
                axis,
                cells,
            }));
        }

        Ok(None)
    }
}

/// Move `n` steps from `from`, or `None` if that leaves the index range
fn offset(from: (usize, usize), (dr, dc): (isize, isize), n: usize) -> Option<(usize, usize)> {
    let n = isize::try_from(n).ok()?;
    let row = from.0.checked_add_signed(dr.checked_mul(n)?)?;
    let col = from.1.checked_add_signed(dc.checked_mul(n)?)?;
    Some((row, col))
}

/// Count consecutive `player` marks stepping away from (and excluding) the
/// anchor, stopping at the first other cell, the board edge, or `limit`.
fn walk(
    board: &Board,
    row: usize,
    col: usize,
    step: (isize, isize),
    player: PlayerId,
    limit: usize,
) -> usize {
    let mut count = 0;
    let mut pos = (row, col);

    while count < limit {
        match offset(pos, step, 1) {
            Some(next) if board.get(next.0, next.1).ok() == Some(Cell::Marked(player)) => {
                pos = next;
                count += 1;
            }
            _ => break,
        }
    }

    count
}
