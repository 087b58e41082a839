//! The [`Move`] value type: a colour, a piece, and the absolute cells the
//! piece would occupy.

use std::fmt;

use thiserror::Error;

use crate::{
    board::Cell,
    pieces::{Orientation, PieceType},
    Colour,
};

/// A placement of one piece on the board.
///
/// Cells are stored sorted, so two moves compare and hash equal exactly when
/// their colour, piece type, and cell sets match, regardless of the order
/// the cells were supplied in.
///
/// A `Move` is purely geometric; whether it is legal on a given board is
/// decided by [`Board::check_move`][crate::board::Board::check_move].
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Move {
    colour: Colour,
    piece: PieceType,
    cells: Vec<Cell>,
}

impl Move {
    /// Construct the move that places `piece` for `colour` with the given
    /// orientation anchored at `anchor`. No validation is performed.
    pub fn from_orientation(
        colour: Colour,
        piece: PieceType,
        orientation: &Orientation,
        anchor: Cell,
    ) -> Self {
        let mut cells: Vec<Cell> = orientation
            .offsets()
            .iter()
            .map(|&(drow, dcol)| anchor.offset(drow, dcol))
            .collect();
        cells.sort_unstable();
        Self {
            colour,
            piece,
            cells,
        }
    }

    /// Construct a move from explicit cells, verifying that they form the
    /// claimed piece in one of its orientations.
    ///
    /// A mismatch is a caller bug (for example a hand-built move with the
    /// wrong piece type attached), reported as a [`ShapeMismatchError`]
    /// rather than an invalid-move rejection.
    pub fn new(
        colour: Colour,
        piece: PieceType,
        mut cells: Vec<Cell>,
    ) -> Result<Self, ShapeMismatchError> {
        cells.sort_unstable();
        cells.dedup();
        if !cells_form_piece(&cells, piece) {
            return Err(ShapeMismatchError::new(piece, cells));
        }
        Ok(Self {
            colour,
            piece,
            cells,
        })
    }

    /// The colour making this move.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The piece type being placed.
    pub fn piece(&self) -> PieceType {
        self.piece
    }

    /// The cells the move occupies, in sorted order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells the move occupies.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Whether the move occupies `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} at", self.colour, self.piece)?;
        for cell in &self.cells {
            write!(f, " {cell}")?;
        }
        Ok(())
    }
}

/// Check that `cells` (sorted, deduplicated) are a translate of one of the
/// orientations of `piece`. Sorting is translation invariant, so the cells
/// are congruent to an orientation exactly when the pairwise differences
/// from the respective first elements agree.
fn cells_form_piece(cells: &[Cell], piece: PieceType) -> bool {
    let shape = piece.shape();
    if cells.len() != shape.size() {
        return false;
    }
    shape.orientations().iter().any(|orientation| {
        let offsets = orientation.offsets();
        let (base_r, base_c) = offsets[0];
        let base = cells[0];
        offsets.iter().zip(cells).all(|(&(r, c), &cell)| {
            (cell.row - base.row, cell.col - base.col) == (r - base_r, c - base_c)
        })
    })
}

/// Error returned when the cells handed to [`Move::new`] do not form the
/// claimed piece.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("cells do not form piece {piece}")]
pub struct ShapeMismatchError {
    piece: PieceType,
    cells: Vec<Cell>,
}

impl ShapeMismatchError {
    fn new(piece: PieceType, cells: Vec<Cell>) -> Self {
        Self { piece, cells }
    }

    /// The piece type the cells were claimed to form.
    pub fn piece(&self) -> PieceType {
        self.piece
    }

    /// The offending cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Extract the offending cells from this error.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
