//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine and any shell that
//! drives it. All types are plain data with no engine behaviour attached, so
//! they can be used in any context (engine, headless runner, tests).
//!
//! # Board Dimensions
//!
//! Reference playfield dimensions (configurable per session):
//!
//! - **Width**: 9 columns (indexed 0-8)
//! - **Height**: 19 rows (indexed 0-18, row 0 is the top)
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Rotation, ShapeKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! // Parse a shape kind (letter or long name, case-insensitive)
//! assert_eq!(ShapeKind::from_str("long"), Some(ShapeKind::I));
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//!
//! // Rotation index advances modulo 4
//! assert_eq!(Rotation::West.next(), Rotation::North);
//!
//! // Parse a command
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//!
//! assert_eq!(DEFAULT_WIDTH, 9);
//! assert_eq!(DEFAULT_HEIGHT, 19);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells for the reference configuration
pub const DEFAULT_WIDTH: u8 = 9;

/// Board height in cells for the reference configuration
pub const DEFAULT_HEIGHT: u8 = 19;

/// Score awarded per cleared row
pub const DEFAULT_LINE_BONUS: u32 = 100;

/// Score awarded for each gravity fall and each soft-drop
pub const DROP_SCORE: u32 = 1;

/// Smallest accepted board dimension (a Long piece must fit either way)
pub const MIN_DIMENSION: u8 = 4;

/// The seven tetromino shape kinds
///
/// The letter names follow common usage; the long names are the ones the
/// player sees:
/// - **I**: Long, a 4x1 bar
/// - **O**: Square, 2x2
/// - **T**: T-shaped
/// - **S**: Z-left
/// - **Z**: Z-right
/// - **J**: L-left
/// - **L**: L-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// Accepts the letter or the long name.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("z-left"), Some(ShapeKind::S));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" | "long" => Some(ShapeKind::I),
            "o" | "square" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" | "z-left" | "zleft" => Some(ShapeKind::S),
            "z" | "z-right" | "zright" => Some(ShapeKind::Z),
            "j" | "l-left" | "lleft" => Some(ShapeKind::J),
            "l" | "l-right" | "lright" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Lowercase letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Position in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Rotation index of a piece
///
/// The cycle goes North (0) → East (1) → South (2) → West (3) → North.
/// Shapes with only two visually distinct states still step through all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Every rotation, in index order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Advance to the next rotation index (modulo 4)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.next(), Rotation::East);
    /// assert_eq!(Rotation::East.next(), Rotation::South);
    /// assert_eq!(Rotation::South.next(), Rotation::West);
    /// assert_eq!(Rotation::West.next(), Rotation::North);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Numeric rotation index in 0..4
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Rotation for a raw index, `None` outside 0..4
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Discrete input commands a shell sends to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Shift the active piece one row down (scores on attempt by default)
    SoftDrop,
    /// Advance the rotation index by one
    Rotate,
    /// Suspend the session
    Pause,
    /// Leave the paused state
    Resume,
}

impl Command {
    /// Parse a command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("left"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("down"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("tick"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "rotate" | "up" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Pause => "pause",
            Command::Resume => "resume",
        }
    }
}

/// Lifecycle state of a session
///
/// `Running` is initial, `Paused` is left only via [`Command::Resume`], and
/// `Lost` is terminal until the session is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Running,
    Paused,
    Lost,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::Lost => "lost",
        }
    }
}

/// Offset of a single mino relative to a piece anchor, as (dx, dy)
pub type Offset = (i8, i8);

/// A grid coordinate: column grows to the right, row grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: i16,
    pub row: i16,
}

impl Cell {
    pub const fn new(col: i16, row: i16) -> Self {
        Self { col, row }
    }

    /// This cell moved by `(dx, dy)`
    pub fn offset(self, (dx, dy): Offset) -> Self {
        Self {
            col: self.col + dx as i16,
            row: self.row + dy as i16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration_defaults() {
        assert_eq!(DEFAULT_WIDTH, 9);
        assert_eq!(DEFAULT_HEIGHT, 19);
        assert_eq!(DEFAULT_LINE_BONUS, 100);
    }

    #[test]
    fn test_shape_kind_roundtrip_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ShapeKind::ALL[ShapeKind::J.index()], ShapeKind::J);
    }

    #[test]
    fn test_rotation_index() {
        for (i, r) in Rotation::ALL.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rotation::from_index(i as u8), Some(*r));
        }
        assert_eq!(Rotation::from_index(4), None);
    }

    #[test]
    fn test_command_names() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::Rotate,
            Command::Pause,
            Command::Resume,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn test_cell_offset() {
        let c = Cell::new(4, 0).offset((-1, 2));
        assert_eq!(c, Cell::new(3, 2));
    }
}
