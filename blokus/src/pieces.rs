//! Piece definitions: the 21 polyomino types, their canonical shapes, and
//! the symmetry-reduced orientation sets derived from them.

use strum::{Display, EnumString, VariantArray};

pub use self::inventory::PieceInventory;

mod inventory;
mod shapes;

/// The 21 Blokus piece types, named after the letter or line they resemble,
/// with the digit giving the cell count where the letter alone is ambiguous.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Display, EnumString, VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum PieceType {
    I1,
    I2,
    I3,
    I4,
    I5,
    L4,
    L5,
    T4,
    T5,
    Z4,
    Z5,
    V3,
    V5,
    F,
    X,
    U,
    N,
    W,
    O,
    P,
    Y,
}

impl PieceType {
    /// The canonical shape and orientation set for this piece type.
    pub fn shape(self) -> &'static PieceShape {
        &shapes::TABLE[self as usize]
    }

    /// Number of cells this piece occupies.
    pub fn size(self) -> usize {
        self.shape().size()
    }
}

/// One way a piece can lie on the grid: a set of cell offsets relative to
/// the move's anchor cell, stored sorted so that equal orientations compare
/// equal.
///
/// Offsets may be negative; the anchor is always one of the piece's own
/// cells, so offset `(0, 0)` is present in every orientation.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Orientation {
    offsets: Vec<(i32, i32)>,
}

impl Orientation {
    fn new(mut offsets: Vec<(i32, i32)>) -> Self {
        offsets.sort_unstable();
        Self { offsets }
    }

    /// The `(row, col)` offsets of this orientation, in sorted order.
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Number of cells in this orientation.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the orientation has no cells. Never true for the built-in
    /// pieces.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// This orientation rotated a quarter turn clockwise about the anchor.
    pub fn rotated(&self) -> Orientation {
        Self::new(self.offsets.iter().map(|&(r, c)| (c, -r)).collect())
    }

    /// This orientation mirrored horizontally about the anchor.
    pub fn mirrored(&self) -> Orientation {
        Self::new(self.offsets.iter().map(|&(r, c)| (r, -c)).collect())
    }
}

/// A piece type together with its full set of distinct orientations.
#[derive(Debug, Clone)]
pub struct PieceShape {
    piece: PieceType,
    size: usize,
    orientations: Vec<Orientation>,
}

impl PieceShape {
    /// Build the orientation set for `piece` from its canonical offsets: the
    /// four quarter-turn rotations of the canonical shape and of its mirror,
    /// deduplicated by offset-set equality. Symmetric pieces collapse to
    /// fewer than eight orientations.
    fn generate(piece: PieceType, canonical: &[(i32, i32)]) -> Self {
        let base = Orientation::new(canonical.to_vec());
        let mut orientations: Vec<Orientation> = Vec::with_capacity(8);
        for mirrored in [false, true] {
            let mut current = if mirrored { base.mirrored() } else { base.clone() };
            for _ in 0..4 {
                if !orientations.contains(&current) {
                    orientations.push(current.clone());
                }
                current = current.rotated();
            }
        }
        Self {
            piece,
            size: canonical.len(),
            orientations,
        }
    }

    /// The piece type this shape belongs to.
    pub fn piece(&self) -> PieceType {
        self.piece
    }

    /// Number of cells the piece occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All distinct orientations of the piece. At most eight.
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }
}
