//! Error types for the engine.
//!
//! Everything here is a programming or configuration error. A move that
//! would leave the board or overlap locked cells is not an error; those are
//! reported as `Ok(false)` by the session.

use thiserror::Error;

use crate::types::ShapeKind;

/// Fatal engine errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A cell outside the grid was queried or written
    #[error("cell ({col}, {row}) is outside the board")]
    OutOfRange { col: i16, row: i16 },

    /// A lock tried to write a cell that is already occupied
    #[error("cell ({col}, {row}) is already occupied")]
    CellOccupied { col: i16, row: i16 },

    /// No rotation table entry exists for this kind and index
    #[error("no rotation table entry for {kind:?} at index {index}")]
    MissingRotation { kind: ShapeKind, index: u8 },

    /// A scripted piece source was given no kinds to replay
    #[error("piece script is empty")]
    EmptyScript,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rejected session configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board width {0} is outside {min}..=255", min = crate::types::MIN_DIMENSION)]
    Width(u16),

    #[error("board height {0} is outside {min}..=255", min = crate::types::MIN_DIMENSION)]
    Height(u16),

    #[error("ticks_per_fall must be at least 1")]
    TicksPerFall,

    #[error("top_out_rows {rows} exceeds board height {height}")]
    TopOutRows { rows: u16, height: u16 },

    #[error("spawn column {0} leaves no room for a piece")]
    SpawnColumn(u16),

    #[error("board is {width}x{height}, configuration disagrees")]
    BoardMismatch { width: u8, height: u8 },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
