//! The canonical shape table for the 21 piece types.

use once_cell::sync::Lazy;
use strum::VariantArray;

use super::{PieceShape, PieceType};

/// Canonical cell offsets for each piece, indexed in [`PieceType`] variant
/// order. Every table contains `(0, 0)`, placed on a cell the piece actually
/// occupies, so a move's anchor is always one of its own cells.
const CANONICAL: [&[(i32, i32)]; 21] = [
    // I1
    &[(0, 0)],
    // I2
    &[(0, 0), (0, 1)],
    // I3
    &[(0, 0), (0, 1), (0, 2)],
    // I4
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    // I5
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    // L4
    &[(0, 0), (1, 0), (2, 0), (2, 1)],
    // L5
    &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)],
    // T4
    &[(0, 0), (0, 1), (0, 2), (1, 1)],
    // T5
    &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
    // Z4
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
    // Z5
    &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
    // V3
    &[(0, 0), (1, 0), (1, 1)],
    // V5
    &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    // F
    &[(0, 0), (0, 1), (1, -1), (1, 0), (2, 0)],
    // X
    &[(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)],
    // U
    &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
    // N
    &[(0, 0), (1, 0), (2, -1), (2, 0), (3, -1)],
    // W
    &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
    // O
    &[(0, 0), (0, 1), (1, 0), (1, 1)],
    // P
    &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)],
    // Y
    &[(0, 0), (1, -1), (1, 0), (2, 0), (3, 0)],
];

pub(super) static TABLE: Lazy<Vec<PieceShape>> = Lazy::new(|| {
    PieceType::VARIANTS
        .iter()
        .zip(CANONICAL)
        .map(|(&piece, offsets)| PieceShape::generate(piece, offsets))
        .collect()
});
