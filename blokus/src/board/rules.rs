//! Legality checks for prospective moves.

use crate::moves::Move;

use super::{errors::RuleViolation, Board};

impl Board {
    /// Check `mv` against the placement rules and return the violations
    /// found.
    ///
    /// Bounds are checked first and unconditionally stop the check when they
    /// fail, since the remaining rules are meaningless off the board. The
    /// other rule categories run in a fixed order (piece availability,
    /// overlap, edge exclusion, corner contact) against the committed board
    /// state, and the first broken category ends the check.
    pub fn check_move(&self, mv: &Move) -> Vec<RuleViolation> {
        if let Some(violation) = self.check_bounds(mv) {
            return vec![violation];
        }
        let checks: [fn(&Self, &Move) -> Option<RuleViolation>; 4] = [
            Self::check_availability,
            Self::check_overlap,
            Self::check_edge_exclusion,
            Self::check_corner_contact,
        ];
        for check in checks {
            if let Some(violation) = check(self, mv) {
                return vec![violation];
            }
        }
        Vec::new()
    }

    /// Whether `mv` breaks none of the placement rules.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.check_move(mv).is_empty()
    }

    /// Every cell of the move must lie on the board.
    fn check_bounds(&self, mv: &Move) -> Option<RuleViolation> {
        mv.cells()
            .iter()
            .find(|&&cell| !self.in_bounds(cell))
            .map(|&cell| RuleViolation::OutOfBounds(cell))
    }

    /// The piece must still be in the mover's inventory.
    fn check_availability(&self, mv: &Move) -> Option<RuleViolation> {
        if self.inventory(mv.colour()).contains(mv.piece()) {
            None
        } else {
            Some(RuleViolation::PieceUnavailable {
                colour: mv.colour(),
                piece: mv.piece(),
            })
        }
    }

    /// No cell of the move may already be occupied.
    fn check_overlap(&self, mv: &Move) -> Option<RuleViolation> {
        mv.cells()
            .iter()
            .find(|&&cell| self.colour_at(cell).is_some())
            .map(|&cell| RuleViolation::Overlap(cell))
    }

    /// No cell of the move may share an edge with an existing cell of the
    /// same colour. Diagonal contact is fine; contact with other colours is
    /// fine. There is no exception at the board border.
    fn check_edge_exclusion(&self, mv: &Move) -> Option<RuleViolation> {
        for &cell in mv.cells() {
            for neighbour in cell.edge_neighbours() {
                if self.colour_at(neighbour) == Some(mv.colour()) {
                    return Some(RuleViolation::EdgeContact(cell, mv.colour()));
                }
            }
        }
        None
    }

    /// At least one cell of the move must land on an absolute board corner
    /// or touch an existing cell of the same colour diagonally. A colour's
    /// first move can only satisfy this through a board corner.
    fn check_corner_contact(&self, mv: &Move) -> Option<RuleViolation> {
        let corners = self.board_corners();
        for &cell in mv.cells() {
            if corners.contains(&cell) {
                return None;
            }
            if cell
                .diagonal_neighbours()
                .iter()
                .any(|&diagonal| self.colour_at(diagonal) == Some(mv.colour()))
            {
                return None;
            }
        }
        Some(RuleViolation::MissingCornerContact(mv.colour()))
    }
}
