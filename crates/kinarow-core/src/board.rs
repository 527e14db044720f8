//! Game board representation.
//!
//! This module contains:
//! - The `Cell` occupant type
//! - The rectangular `Board` grid and its single mutation, `set`
//! - Board query methods (bounds, occupancy, fullness)
//!
//! Coordinates are always `(row, col)` with row 0 at the top. Screen axes are
//! a rendering concern and never appear here.

use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Player identifier (1-4; 0 is reserved for "empty" in numeric form)
pub type PlayerId = u8;

/// Largest number of players a game supports
pub const MAX_PLAYERS: u8 = 4;

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Marked by a player
    Marked(PlayerId),
}

impl Cell {
    /// Get the owning player, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Marked(p) => Some(*p),
        }
    }

    /// Numeric occupant value: 0 for empty, otherwise the player id
    pub fn value(&self) -> u8 {
        self.owner().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A width x height grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Check board dimensions without allocating, returning the cell count.
    ///
    /// Fails with `InvalidDimensions` if either side is zero, the cell count
    /// overflows `usize`, or the cells would not fit in one allocation.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize, GameError> {
        let invalid = GameError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let size = width.checked_mul(height).ok_or(invalid.clone())?;
        match size.checked_mul(std::mem::size_of::<Cell>()) {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(size),
            _ => Err(invalid),
        }
    }

    /// Create an empty board.
    ///
    /// Fails with `InvalidDimensions` for the cases in
    /// [`check_dimensions`](Self::check_dimensions) and when the allocator
    /// cannot provide the cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let size = Self::check_dimensions(width, height)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| GameError::InvalidDimensions { width, height })?;
        cells.resize(size, Cell::Empty);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether `(row, col)` lies on the board
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if self.in_bounds(row, col) {
            Ok(row * self.width + col)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Get the cell at a position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Check whether a position is on the board and unmarked
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        self.get(row, col).map(|cell| cell.is_empty())
    }

    /// Place a player's mark.
    ///
    /// Only empty cells can be marked; the board is left untouched on error.
    pub fn set(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), GameError> {
        if player == 0 || player > MAX_PLAYERS {
            return Err(GameError::InvalidPlayer(player));
        }
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[idx] = Cell::Marked(player);
        Ok(())
    }

    /// Check if every cell has been marked
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of marked cells
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// All unmarked positions in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}
