//! Pieces module - the shape catalog
//!
//! Every (kind, rotation) pair maps to exactly four mino offsets relative to
//! the piece anchor. Offsets are normalised so the rotation's bounding box
//! starts at (0, 0); rotation is a table swap, never a geometric transform.
//!
//! Two-state kinds (I, S, Z) repeat their North/East layouts at South/West,
//! and O uses one layout everywhere.

use crate::error::{EngineError, Result};
use crate::types::{Offset, Rotation, ShapeKind};

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [Offset; 4];

/// Rotation table for one kind, indexed by [`Rotation::index`]
type RotationTable = [PieceShape; 4];

const I_HORIZONTAL: PieceShape = [(0, 0), (1, 0), (2, 0), (3, 0)];
const I_VERTICAL: PieceShape = [(1, 0), (1, 1), (1, 2), (1, 3)];
const I_TABLE: RotationTable = [I_HORIZONTAL, I_VERTICAL, I_HORIZONTAL, I_VERTICAL];

const O_SQUARE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];
const O_TABLE: RotationTable = [O_SQUARE; 4];

const T_TABLE: RotationTable = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_FLAT: PieceShape = [(1, 0), (2, 0), (0, 1), (1, 1)];
const S_UPRIGHT: PieceShape = [(0, 0), (0, 1), (1, 1), (1, 2)];
const S_TABLE: RotationTable = [S_FLAT, S_UPRIGHT, S_FLAT, S_UPRIGHT];

const Z_FLAT: PieceShape = [(0, 0), (1, 0), (1, 1), (2, 1)];
const Z_UPRIGHT: PieceShape = [(1, 0), (0, 1), (1, 1), (0, 2)];
const Z_TABLE: RotationTable = [Z_FLAT, Z_UPRIGHT, Z_FLAT, Z_UPRIGHT];

const J_TABLE: RotationTable = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_TABLE: RotationTable = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

fn table(kind: ShapeKind) -> &'static RotationTable {
    match kind {
        ShapeKind::I => &I_TABLE,
        ShapeKind::O => &O_TABLE,
        ShapeKind::T => &T_TABLE,
        ShapeKind::S => &S_TABLE,
        ShapeKind::Z => &Z_TABLE,
        ShapeKind::J => &J_TABLE,
        ShapeKind::L => &L_TABLE,
    }
}

/// Get the shape (mino offsets) for a kind and rotation
pub fn get_shape(kind: ShapeKind, rotation: Rotation) -> PieceShape {
    table(kind)[rotation.index() as usize]
}

/// Get the shape for a raw rotation index
///
/// Fails with [`EngineError::MissingRotation`] for an index outside 0..4.
pub fn shape_at(kind: ShapeKind, index: u8) -> Result<PieceShape> {
    Rotation::from_index(index)
        .map(|rotation| get_shape(kind, rotation))
        .ok_or(EngineError::MissingRotation { kind, index })
}

/// Width and height in cells of the spawn (North) layout
pub fn bounding_size(kind: ShapeKind) -> (u8, u8) {
    extent(&get_shape(kind, Rotation::North))
}

/// Width and height of the box enclosing a shape's offsets
pub fn extent(shape: &PieceShape) -> (u8, u8) {
    let max_dx = shape.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
    let max_dy = shape.iter().map(|&(_, dy)| dy).max().unwrap_or(0);
    ((max_dx + 1) as u8, (max_dy + 1) as u8)
}

/// Check a shape is a well-formed tetromino layout: 4 distinct,
/// non-negative offsets
pub fn is_complete(shape: &PieceShape) -> bool {
    let non_negative = shape.iter().all(|&(dx, dy)| dx >= 0 && dy >= 0);
    let distinct = shape
        .iter()
        .enumerate()
        .all(|(i, a)| shape[i + 1..].iter().all(|b| a != b));
    non_negative && distinct
}

/// Verify every table entry of every kind
///
/// Run once at session construction so a damaged table is reported before
/// the first piece spawns.
pub fn validate_catalog() -> Result<()> {
    for kind in ShapeKind::ALL {
        for rotation in Rotation::ALL {
            if !is_complete(&get_shape(kind, rotation)) {
                return Err(EngineError::MissingRotation {
                    kind,
                    index: rotation.index(),
                });
            }
        }
    }
    Ok(())
}
