//! Grid geometry: cells, board dimensions and the linear cell index.
//!
//! Coordinates are 1-indexed. Cell `(row, col)` maps to index
//! `(row - 1) * cols + col`, so the top-left cell is index 1 and the
//! bottom-right cell of a 40x40 board is index 1600.

use super::types::Direction;
use crate::constants::{GRID_COLS, GRID_ROWS};
use serde::{Deserialize, Serialize};

/// A single board position. Signed so that a head stepping off the board is
/// still representable for the wall check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `direction`. May lie off the board.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub rows: i16,
    pub cols: i16,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
        }
    }
}

impl GridSize {
    pub const fn new(rows: i16, cols: i16) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// True if `cell` lies within `[1, rows] x [1, cols]`.
    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.rows).contains(&cell.row) && (1..=self.cols).contains(&cell.col)
    }

    /// Linear index of `cell`, in `[1, rows * cols]` for cells on the board.
    pub fn to_index(&self, cell: Cell) -> usize {
        (cell.row as usize - 1) * self.cols as usize + cell.col as usize
    }

    /// Inverse of [`GridSize::to_index`]. Only meaningful for `1..=cell_count()`.
    pub fn to_cell(&self, index: usize) -> Cell {
        let cols = self.cols as usize;
        let row = index.div_ceil(cols);
        let col = index - (row - 1) * cols;
        Cell::new(row as i16, col as i16)
    }

    /// Every cell on the board in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.cell_count()).map(move |index| self.to_cell(index))
    }
}
