//! Legal-move enumeration and the incremental upkeep of the per-colour move
//! caches.
//!
//! Enumeration anchors candidate moves at "origins": empty cells from which
//! a piece could establish the required corner contact. Because every
//! orientation contains its anchor cell (see the shape tables), a generated
//! move always covers its origin, which is what makes origin-driven
//! enumeration line up exactly with the rule checks.

use std::collections::HashSet;

use strum::VariantArray;
use tracing::trace;

use crate::{moves::Move, Colour};

use super::{Board, Cell};

impl Board {
    /// Whether `cell` is occupied by `colour` and sits on a corner of that
    /// colour's area: at most one same-colour neighbour along each axis,
    /// where the board border counts as a neighbour on the axes it bounds.
    /// All four border lines are treated alike.
    pub fn is_corner_of(&self, cell: Cell, colour: Colour) -> bool {
        if self.colour_at(cell) != Some(colour) {
            return false;
        }
        let last = self.dimension() as i32 - 1;
        let mut row_contacts = [cell.offset(-1, 0), cell.offset(1, 0)]
            .iter()
            .filter(|&&n| self.colour_at(n) == Some(colour))
            .count();
        if cell.row == 0 || cell.row == last {
            row_contacts += 1;
        }
        let mut col_contacts = [cell.offset(0, -1), cell.offset(0, 1)]
            .iter()
            .filter(|&&n| self.colour_at(n) == Some(colour))
            .count();
        if cell.col == 0 || cell.col == last {
            col_contacts += 1;
        }
        row_contacts <= 1 && col_contacts <= 1
    }

    /// The empty cells diagonally adjacent to `corner` from which `colour`
    /// could anchor a new piece: in bounds, unoccupied, and not sharing an
    /// edge with any existing cell of `colour`.
    ///
    /// This test is independent of any particular piece, so it prunes
    /// anchors before the per-piece enumeration ever runs. It is shared
    /// between the maintenance engine and the heuristic policies.
    pub fn valid_origins_from_corner(&self, corner: Cell, colour: Colour) -> Vec<Cell> {
        corner
            .diagonal_neighbours()
            .into_iter()
            .filter(|&origin| self.in_bounds(origin) && self.colour_at(origin).is_none())
            .filter(|&origin| {
                origin
                    .edge_neighbours()
                    .iter()
                    .all(|&n| self.colour_at(n) != Some(colour))
            })
            .collect()
    }

    /// Every cell of `colour` that passes [`Board::is_corner_of`].
    pub fn corner_cells(&self, colour: Colour) -> Vec<Cell> {
        let dim = self.dimension() as i32;
        (0..dim)
            .flat_map(|row| (0..dim).map(move |col| Cell::new(row, col)))
            .filter(|&cell| self.is_corner_of(cell, colour))
            .collect()
    }

    /// Compute the full legal-move set for `colour` from scratch, ignoring
    /// the cache.
    ///
    /// This is the brute-force path behind the first
    /// [`Board::legal_moves`][Board::legal_moves] call per colour. It takes
    /// only `&self`, so independent colours can be enumerated in parallel
    /// against a read-only board between plays.
    pub fn enumerate_moves(&self, colour: Colour) -> HashSet<Move> {
        self.moves_from_origins(colour, &self.candidate_origins(colour))
    }

    /// Anchor cells worth trying for `colour`: every still-empty board
    /// corner (the corner-contact rule accepts a board corner regardless of
    /// what the colour has already played), plus the valid origins opened by
    /// the colour's existing corner cells.
    fn candidate_origins(&self, colour: Colour) -> Vec<Cell> {
        let mut origins: Vec<Cell> = self
            .board_corners()
            .into_iter()
            .filter(|&corner| self.colour_at(corner).is_none())
            .collect();
        for corner in self.corner_cells(colour) {
            for origin in self.valid_origins_from_corner(corner, colour) {
                if !origins.contains(&origin) {
                    origins.push(origin);
                }
            }
        }
        origins
    }

    /// Build every legal move for `colour` anchored at one of `origins`,
    /// over the colour's remaining pieces and all their orientations.
    pub fn moves_from_origins(&self, colour: Colour, origins: &[Cell]) -> HashSet<Move> {
        let mut moves = HashSet::new();
        for &origin in origins {
            for piece in self.inventory(colour).iter() {
                for orientation in piece.shape().orientations() {
                    let mv = Move::from_orientation(colour, piece, orientation, origin);
                    if self.is_legal(&mv) {
                        moves.insert(mv);
                    }
                }
            }
        }
        moves
    }

    /// Bring every computed move cache back in step with the board after
    /// `played` has been applied to the grid and inventories.
    ///
    /// The mover's cache loses all moves of the spent piece type, every
    /// cache loses moves overlapping the new cells, and the mover's cache
    /// additionally drops moves brushing the new piece's edges (re-checked
    /// in full rather than assumed dead). New moves can appear only for the
    /// mover, anchored on origins opened by the corners of the new piece;
    /// other colours never gain moves from an opponent's play. Caches that
    /// were never requested stay unrequested.
    pub(super) fn refresh_valid_moves(&mut self, played: &Move) {
        let mover = played.colour();

        if let Some(cache) = self.valid_moves.get_mut(&mover) {
            cache.retain(|m| m.piece() != played.piece());
        }

        let fringe: HashSet<Cell> = played
            .cells()
            .iter()
            .flat_map(|&cell| cell.edge_neighbours())
            .filter(|&n| self.in_bounds(n))
            .collect();

        for &colour in Colour::VARIANTS {
            let Some(mut cache) = self.valid_moves.remove(&colour) else {
                continue;
            };
            cache.retain(|m| !m.cells().iter().any(|&cell| played.contains(cell)));
            if colour == mover {
                cache.retain(|m| {
                    !m.cells().iter().any(|cell| fringe.contains(cell)) || self.is_legal(m)
                });
            }
            self.valid_moves.insert(colour, cache);
        }

        if self.valid_moves.contains_key(&mover) {
            let mut origins: Vec<Cell> = Vec::new();
            for &cell in played.cells() {
                if !self.is_corner_of(cell, mover) {
                    continue;
                }
                for origin in self.valid_origins_from_corner(cell, mover) {
                    if !origins.contains(&origin) {
                        origins.push(origin);
                    }
                }
            }
            let discovered = self.moves_from_origins(mover, &origins);
            trace!(colour = %mover, discovered = discovered.len(), "merged newly enabled moves");
            if let Some(cache) = self.valid_moves.get_mut(&mover) {
                cache.extend(discovered);
            }
        }
    }
}
