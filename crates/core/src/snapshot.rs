//! Read-only projection of a session for renderers.
//!
//! A [`View`] owns copies of everything it shows, so it stays valid and
//! unchanged however the session moves on afterwards.

use std::fmt;

use serde::Serialize;

use crate::piece::Tetromino;
use crate::types::{Cell, Rotation, SessionState, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub anchor: Cell,
    pub cells: [Cell; 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            anchor: value.anchor,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub width: u8,
    pub height: u8,
    /// Locked-cell occupancy, row-major
    pub board: Vec<bool>,
    pub active: ActiveSnapshot,
    pub next: ShapeKind,
    pub score: u32,
    pub lines: u32,
    pub piece_id: u32,
    pub episode_id: u32,
    pub state: SessionState,
}

impl View {
    /// Board rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.board.chunks(self.width.max(1) as usize)
    }

    pub fn is_active_cell(&self, col: usize, row: usize) -> bool {
        self.active
            .cells
            .iter()
            .any(|c| c.col as usize == col && c.row as usize == row)
    }
}

impl fmt::Display for View {
    /// `#` locked, `@` active piece, `.` empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                let ch = if self.is_active_cell(col, row) {
                    '@'
                } else if occupied {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "score {} lines {} next {} state {}",
            self.score,
            self.lines,
            self.next.as_str(),
            self.state.as_str()
        )
    }
}
