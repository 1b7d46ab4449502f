//! Active piece - legality-checked transitions
//!
//! Every transition is compute-then-validate: build the candidate piece,
//! check each of its cells is inside the board and not occupied, and only
//! then replace the current state. A rejected transition leaves the piece
//! untouched.

use crate::board::Board;
use crate::error::Result;
use crate::pieces::{get_shape, PieceShape};
use crate::types::{Cell, Rotation, ShapeKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub anchor: Cell,
}

impl Tetromino {
    /// Create a new piece in its spawn rotation
    pub fn new(kind: ShapeKind, anchor: Cell) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            anchor,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute cells covered by the piece
    pub fn cells(&self) -> [Cell; 4] {
        self.shape().map(|offset| self.anchor.offset(offset))
    }

    /// The same piece moved by `(dx, dy)`
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            anchor: Cell::new(self.anchor.col + dx, self.anchor.row + dy),
            ..*self
        }
    }

    /// The same piece at the next rotation index
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.next(),
            ..*self
        }
    }

    /// Check every cell is inside the board and unoccupied
    ///
    /// A pure function of the board and the piece's cells.
    pub fn fits(&self, board: &Board) -> Result<bool> {
        for cell in self.cells() {
            if !board.is_inside(cell) {
                return Ok(false);
            }
            if board.is_occupied(cell)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Commit `candidate` if it fits, otherwise keep the current state
    fn commit_if_fits(&mut self, candidate: Self, board: &Board) -> Result<bool> {
        if candidate.fits(board)? {
            *self = candidate;
            return Ok(true);
        }
        Ok(false)
    }

    /// Try to move by `(dx, dy)`
    pub fn try_shift(&mut self, board: &Board, dx: i16, dy: i16) -> Result<bool> {
        self.commit_if_fits(self.shifted(dx, dy), board)
    }

    /// Try to advance the rotation index in place (no kicks)
    pub fn try_rotate(&mut self, board: &Board) -> Result<bool> {
        self.commit_if_fits(self.rotated(), board)
    }

    /// Resting: a one-row downward shift would not fit
    ///
    /// The floor and locked cells are handled by the same check.
    pub fn is_resting(&self, board: &Board) -> Result<bool> {
        Ok(!self.shifted(0, 1).fits(board)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetromino_cells() {
        let piece = Tetromino::new(ShapeKind::I, Cell::new(4, 0));
        assert_eq!(
            piece.cells(),
            [
                Cell::new(4, 0),
                Cell::new(5, 0),
                Cell::new(6, 0),
                Cell::new(7, 0)
            ]
        );
    }

    #[test]
    fn test_shift_blocked_by_wall_keeps_state() {
        let board = Board::new(9, 19);
        let mut piece = Tetromino::new(ShapeKind::I, Cell::new(5, 0));

        assert_eq!(piece.try_shift(&board, 1, 0), Ok(false));
        assert_eq!(piece.anchor, Cell::new(5, 0));

        assert_eq!(piece.try_shift(&board, -1, 0), Ok(true));
        assert_eq!(piece.anchor, Cell::new(4, 0));
    }

    #[test]
    fn test_shift_blocked_by_locked_cell() {
        let mut board = Board::new(9, 19);
        board.lock(&[Cell::new(4, 2)]).unwrap();
        let mut piece = Tetromino::new(ShapeKind::O, Cell::new(3, 0));

        assert_eq!(piece.is_resting(&board), Ok(true));
        assert_eq!(piece.try_shift(&board, 0, 1), Ok(false));
        assert_eq!(piece.anchor, Cell::new(3, 0));
    }

    #[test]
    fn test_rotate_rejected_at_floor() {
        let board = Board::new(9, 19);
        // Horizontal bar on the bottom row cannot stand up.
        let mut piece = Tetromino::new(ShapeKind::I, Cell::new(2, 18));
        assert_eq!(piece.try_rotate(&board), Ok(false));
        assert_eq!(piece.rotation, Rotation::North);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let board = Board::new(9, 19);
        for kind in ShapeKind::ALL {
            let mut piece = Tetromino::new(kind, Cell::new(3, 5));
            let before = piece;
            for _ in 0..4 {
                assert_eq!(piece.try_rotate(&board), Ok(true), "{:?}", kind);
            }
            assert_eq!(piece, before);
            assert_eq!(piece.cells(), before.cells());
        }
    }

    #[test]
    fn test_resting_on_floor() {
        let board = Board::new(9, 19);
        let piece = Tetromino::new(ShapeKind::T, Cell::new(0, 17));
        assert_eq!(piece.is_resting(&board), Ok(true));
        assert_eq!(piece.shifted(0, -1).is_resting(&board), Ok(false));
    }
}
