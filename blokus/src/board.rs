//! The playing board: grid state, per-colour inventories, the cached
//! legal-move sets, and the move history.

use std::collections::{HashMap, HashSet};

use strum::VariantArray;
use tracing::debug;

use crate::{moves::Move, pieces::PieceInventory, Colour};

use self::grid::Grid;
pub use self::{
    coordinate::Cell,
    errors::{InvalidMoveError, RuleViolation},
};

mod coordinate;
mod errors;
mod grid;
mod movegen;
mod rules;
#[cfg(test)]
mod tests;

/// Edge length of the standard four-colour board.
pub const DEFAULT_DIMENSION: usize = 20;

/// A Blokus board.
///
/// The board owns the grid, one [`PieceInventory`] per colour, and a cached
/// legal-move set per colour. The cache for a colour is populated the first
/// time [`Board::legal_moves`] is called for it, and from then on is kept in
/// step with the grid by [`Board::play_move`] instead of being recomputed.
///
/// All mutation goes through [`Board::play_move`]; a rejected move leaves
/// every part of the board untouched. Cells never revert to empty and a
/// colour plays each piece type at most once.
pub struct Board {
    /// Grid of cells occupied by pieces.
    grid: Grid,
    /// Remaining pieces per colour.
    inventories: HashMap<Colour, PieceInventory>,
    /// Cached legal moves per colour. A missing key means the set has never
    /// been requested for that colour.
    valid_moves: HashMap<Colour, HashSet<Move>>,
    /// Every move applied to this board, in play order.
    history: Vec<Move>,
}

impl Board {
    /// Create an empty `dimension` x `dimension` board with a full
    /// inventory for every colour.
    ///
    /// Panics if `dimension` is zero.
    pub fn new(dimension: usize) -> Self {
        match Self::try_new(dimension) {
            Some(board) => board,
            None => panic!("board dimension must be nonzero"),
        }
    }

    /// Create an empty `dimension` x `dimension` board, or `None` if
    /// `dimension` is zero.
    pub fn try_new(dimension: usize) -> Option<Self> {
        if dimension == 0 {
            return None;
        }
        Some(Self {
            grid: Grid::new(dimension),
            inventories: Colour::VARIANTS
                .iter()
                .map(|&colour| (colour, PieceInventory::full()))
                .collect(),
            valid_moves: HashMap::new(),
            history: Vec::new(),
        })
    }

    /// Edge length of the board.
    pub fn dimension(&self) -> usize {
        self.grid.dim()
    }

    /// Whether `cell` lies on the board.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.in_bounds(cell)
    }

    /// The colour occupying `cell`, or `None` if the cell is empty or out of
    /// bounds.
    pub fn colour_at(&self, cell: Cell) -> Option<Colour> {
        self.grid.get(cell)
    }

    /// The four absolute corners of the board.
    pub fn board_corners(&self) -> [Cell; 4] {
        let last = self.grid.dim() as i32 - 1;
        [
            Cell::new(0, 0),
            Cell::new(0, last),
            Cell::new(last, 0),
            Cell::new(last, last),
        ]
    }

    /// Row-major copy of the grid, for rendering or logging.
    pub fn grid_snapshot(&self) -> Vec<Option<Colour>> {
        self.grid.snapshot()
    }

    /// The remaining pieces for `colour`.
    pub fn inventory(&self, colour: Colour) -> &PieceInventory {
        &self.inventories[&colour]
    }

    /// Every move applied to this board, in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of grid cells owned by `colour`.
    pub fn score(&self, colour: Colour) -> usize {
        self.grid.count(colour)
    }

    /// The set of legal moves currently available to `colour`.
    ///
    /// The first call for a colour enumerates the set in full; later calls
    /// return the cached set, which [`Board::play_move`] keeps up to date.
    pub fn legal_moves(&mut self, colour: Colour) -> &HashSet<Move> {
        if !self.valid_moves.contains_key(&colour) {
            let moves = self.enumerate_moves(colour);
            debug!(colour = %colour, count = moves.len(), "computed initial move set");
            self.valid_moves.insert(colour, moves);
        }
        &self.valid_moves[&colour]
    }

    /// Validate `mv` and, if it is legal, apply it: paint its cells, remove
    /// the piece from the mover's inventory, record it in the history, and
    /// refresh the cached move sets of every colour.
    ///
    /// On rejection the error carries the move and the rules it broke, and
    /// the board is left exactly as it was.
    pub fn play_move(&mut self, mv: Move) -> Result<(), InvalidMoveError> {
        let violations = self.check_move(&mv);
        if !violations.is_empty() {
            return Err(InvalidMoveError::new(mv, violations));
        }
        for &cell in mv.cells() {
            self.grid.set(cell, mv.colour());
        }
        self.inventories
            .get_mut(&mv.colour())
            .unwrap()
            .remove(mv.piece());
        debug!(colour = %mv.colour(), piece = %mv.piece(), "played move");
        self.refresh_valid_moves(&mv);
        self.history.push(mv);
        Ok(())
    }

    /// A copy of this board with `mv` painted onto the grid, the piece
    /// removed from its colour's inventory, and no cached move sets.
    ///
    /// No rule checking is performed; this exists so callers can evaluate
    /// hypothetical positions. Panics if any cell of `mv` is out of bounds.
    pub fn with_move_applied(&self, mv: &Move) -> Board {
        let mut board = Board {
            grid: self.grid.clone(),
            inventories: self.inventories.clone(),
            valid_moves: HashMap::new(),
            history: self.history.clone(),
        };
        for &cell in mv.cells() {
            board.grid.set(cell, mv.colour());
        }
        board
            .inventories
            .get_mut(&mv.colour())
            .unwrap()
            .remove(mv.piece());
        board.history.push(mv.clone());
        board
    }
}

impl Default for Board {
    /// The standard empty 20x20 board.
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}
