//! Rule engine and legal-move generator for the board game Blokus.
//!
//! Blokus is played on a square grid by up to four colours, each owning one
//! of every polyomino piece of sizes one through five. A piece may only be
//! placed so that it touches an existing piece of the same colour corner to
//! corner, never edge to edge; a colour's opening piece must cover a corner
//! of the board.
//!
//! The heart of the crate is [`board::Board`], which validates and applies
//! moves and maintains the set of legal moves for every colour
//! incrementally, so that the full board never has to be re-scanned after
//! each play.
//!
//! ```
//! use blokus::{board::Board, pieces::PieceType, Colour};
//!
//! let mut board = Board::new(20);
//! let opening = board
//!     .legal_moves(Colour::Red)
//!     .iter()
//!     .find(|mv| mv.piece() == PieceType::I1)
//!     .cloned()
//!     .unwrap();
//! board.play_move(opening).unwrap();
//! assert_eq!(board.score(Colour::Red), 1);
//! ```
//!
//! With the `bots` feature (on by default), [`policy`] provides a handful of
//! ready-made move-selection strategies behind a single [`policy::Policy`]
//! trait, suitable for driving automated matches.

use strum::{Display, EnumString, VariantArray};

pub mod board;
pub mod moves;
pub mod pieces;
#[cfg(feature = "bots")]
pub mod policy;

pub use crate::{
    board::{Board, Cell, InvalidMoveError, RuleViolation},
    moves::Move,
    pieces::PieceType,
};

/// One of the four playing colours.
///
/// An empty grid cell is represented as `Option::<Colour>::None` rather than
/// with a sentinel variant, so every occupied cell carries exactly one
/// colour.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Display, EnumString, VariantArray,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Colour {
    Red,
    Green,
    Yellow,
    Blue,
}

#[cfg(test)]
mod tests {
    use super::Colour;

    #[test]
    fn colour_parses_case_insensitively() {
        assert_eq!("red".parse::<Colour>().unwrap(), Colour::Red);
        assert_eq!("Blue".parse::<Colour>().unwrap(), Colour::Blue);
        assert!("pink".parse::<Colour>().is_err());
    }

    #[test]
    fn colour_displays_lowercase() {
        assert_eq!(Colour::Yellow.to_string(), "yellow");
    }
}
