//! Pixel to grid mapping for graphical front ends.
//!
//! A graphical caller draws each cell as a `cell_size` x `cell_size` square,
//! with pixel `(x, y)` measured from the top-left corner. Pixel x selects the
//! column and pixel y selects the row; nothing outside this module deals with
//! screen axes.

use crate::board::Board;
use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Side length used by the default graphical layout
pub const DEFAULT_CELL_SIZE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGeometry {
    cell_size: u32,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl CellGeometry {
    pub fn new(cell_size: u32) -> Result<Self, GameError> {
        if cell_size == 0 {
            return Err(GameError::InvalidCellSize);
        }
        Ok(Self { cell_size })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Grid `(row, col)` containing pixel `(x, y)`
    pub fn cell_at(&self, x: u32, y: u32) -> (usize, usize) {
        (
            (y / self.cell_size) as usize,
            (x / self.cell_size) as usize,
        )
    }

    /// Like [`cell_at`](Self::cell_at), but fails for pixels past the board
    pub fn cell_at_checked(
        &self,
        board: &Board,
        x: u32,
        y: u32,
    ) -> Result<(usize, usize), GameError> {
        let (row, col) = self.cell_at(x, y);
        if board.in_bounds(row, col) {
            Ok((row, col))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    /// Pixel at the centre of a cell, where a mark is drawn
    pub fn cell_centre(&self, row: usize, col: usize) -> (u64, u64) {
        let size = u64::from(self.cell_size);
        (col as u64 * size + size / 2, row as u64 * size + size / 2)
    }

    /// Radius of a drawn mark, a third of the cell
    pub fn mark_radius(&self) -> u32 {
        self.cell_size / 3
    }

    /// Pixel `(width, height)` of a surface that fits the whole board
    pub fn surface_size(&self, width: usize, height: usize) -> (u64, u64) {
        let size = u64::from(self.cell_size);
        (width as u64 * size, height as u64 * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cell_size_rejected() {
        assert_eq!(CellGeometry::new(0), Err(GameError::InvalidCellSize));
    }

    #[test]
    fn test_centre_of_clicked_cell() {
        let geometry = CellGeometry::new(30).unwrap();

        let (row, col) = geometry.cell_at(23, 65);
        assert_eq!((row, col), (2, 0));
        assert_eq!(geometry.cell_centre(row, col), (15, 75));

        let (row, col) = geometry.cell_at(124, 98);
        assert_eq!((row, col), (3, 4));
        assert_eq!(geometry.cell_centre(row, col), (135, 105));
    }

    #[test]
    fn test_cell_edges() {
        let geometry = CellGeometry::default();
        assert_eq!(geometry.cell_at(24, 24), (0, 0));
        assert_eq!(geometry.cell_at(25, 0), (0, 1));
        assert_eq!(geometry.cell_at(0, 25), (1, 0));
    }

    #[test]
    fn test_checked_lookup() {
        let geometry = CellGeometry::new(10).unwrap();
        let board = Board::new(3, 2).unwrap();
        assert_eq!(geometry.cell_at_checked(&board, 29, 19), Ok((1, 2)));
        assert_eq!(
            geometry.cell_at_checked(&board, 30, 0),
            Err(GameError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_surface_and_radius() {
        let geometry = CellGeometry::new(25).unwrap();
        assert_eq!(geometry.surface_size(30, 20), (750, 500));
        assert_eq!(geometry.mark_radius(), 8);
    }
}
