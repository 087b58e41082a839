//! Errors used by the [`Board`][super::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{moves::Move, pieces::PieceType, Colour};

use super::coordinate::Cell;

/// A single placement rule broken by a prospective move.
///
/// The variants are listed in the order the rules are checked. Bounds are
/// always checked first; an out-of-bounds move is never checked against any
/// other rule.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RuleViolation {
    /// A cell of the move lies outside the board.
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),
    /// The piece was already played by this colour.
    #[error("piece {piece} was already used by {colour}")]
    PieceUnavailable {
        /// Colour attempting the move.
        colour: Colour,
        /// The piece that is no longer in the colour's inventory.
        piece: PieceType,
    },
    /// A cell of the move is already occupied.
    #[error("cell {0} is already occupied")]
    Overlap(Cell),
    /// A cell of the move shares an edge with an existing cell of the same
    /// colour.
    #[error("cell {0} shares an edge with another {1} piece")]
    EdgeContact(Cell, Colour),
    /// No cell of the move lands on a board corner or touches an existing
    /// cell of the same colour diagonally.
    #[error("no cell lands on a board corner or diagonally touches a {0} piece")]
    MissingCornerContact(Colour),
}

/// Error returned when [`Board::play_move`][super::Board::play_move] rejects
/// a move. Carries the move back to the caller along with the rules it
/// broke, in check order.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("move \"{attempted}\" rejected: {violations:?}")]
pub struct InvalidMoveError {
    /// The move that was rejected.
    attempted: Move,
    /// The rules the move broke.
    violations: Vec<RuleViolation>,
}

impl InvalidMoveError {
    /// Construct an [`InvalidMoveError`] for the given move and violations.
    pub(super) fn new(attempted: Move, violations: Vec<RuleViolation>) -> Self {
        Self {
            attempted,
            violations,
        }
    }

    /// The rules the move broke, in check order.
    pub fn violations(&self) -> &[RuleViolation] {
        &self.violations
    }

    /// The move that was rejected.
    pub fn attempted(&self) -> &Move {
        &self.attempted
    }

    /// Extract the rejected move from this error.
    pub fn into_attempted(self) -> Move {
        self.attempted
    }
}

impl Debug for InvalidMoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
