//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or occupied.
//! Uses a flat row-major vector sized once at construction.
//! Coordinates: (col, row) where col grows left to right and row grows top
//! to bottom; row 0 is the top of the well.

use crate::error::{EngineError, Result};
use crate::types::Cell;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.is_inside(cell) {
            return None;
        }
        Some(cell.row as usize * self.width as usize + cell.col as usize)
    }

    /// True iff the cell lies within the grid
    pub fn is_inside(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.col < self.width as i16
            && cell.row >= 0
            && cell.row < self.height as i16
    }

    /// Check if a cell is occupied
    ///
    /// Callers must check [`Board::is_inside`] first; an out-of-range cell is
    /// reported as [`EngineError::OutOfRange`] rather than treated as a wall.
    pub fn is_occupied(&self, cell: Cell) -> Result<bool> {
        self.index(cell)
            .map(|idx| self.cells[idx])
            .ok_or(EngineError::OutOfRange {
                col: cell.col,
                row: cell.row,
            })
    }

    /// Mark every cell occupied
    ///
    /// All cells are checked before any is written, so a failed lock leaves
    /// the board untouched.
    pub fn lock(&mut self, cells: &[Cell]) -> Result<()> {
        for &cell in cells {
            if self.is_occupied(cell)? {
                return Err(EngineError::CellOccupied {
                    col: cell.col,
                    row: cell.row,
                });
            }
        }

        for &cell in cells {
            if let Some(idx) = self.index(cell) {
                self.cells[idx] = true;
            }
        }

        Ok(())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&occupied| occupied))
            .unwrap_or(false)
    }

    /// Occupancy of one row, `None` past the bottom
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Indices of every full row, ascending
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&row| self.is_row_full(row))
            .collect()
    }

    /// Clear all full rows and return their indices (ascending)
    ///
    /// Full rows are identified against the grid as it is before any removal,
    /// then removed in a single compaction pass: each surviving row moves down
    /// by the number of cleared rows beneath it and the vacated top rows are
    /// emptied.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let cleared = self.full_rows();
        if cleared.is_empty() {
            return cleared;
        }

        let width = self.width as usize;
        let mut write_row = self.height as usize;

        // Two pointers, bottom to top
        for read_row in (0..self.height as usize).rev() {
            if cleared.binary_search(&read_row).is_ok() {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(false);

        cleared
    }

    /// True if any occupied cell lies in a row above `rows`
    pub fn has_blocks_above(&self, rows: usize) -> bool {
        let end = rows.min(self.height as usize) * self.width as usize;
        self.cells[..end].iter().any(|&occupied| occupied)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy occupancy into `out`, reusing its allocation
    pub fn write_into(&self, out: &mut Vec<bool>) {
        out.clear();
        out.extend_from_slice(&self.cells);
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows for testing (`#` occupied, anything else empty)
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u8;
        let mut board = Self::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width as usize);
            for (col, ch) in line.chars().enumerate() {
                board.cells[row * width as usize + col] = ch == '#';
            }
        }
        board
    }
}
