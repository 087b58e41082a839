//! Cell storage shared by the board's queries and mutation paths.

use crate::Colour;

use super::coordinate::Cell;

/// Row-major storage for the board's cells. `None` marks an empty cell.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Edge length of the square grid.
    dim: usize,
    /// Cells that make up this grid.
    cells: Box<[Option<Colour>]>,
}

impl Grid {
    pub(super) fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim].into_boxed_slice(),
        }
    }

    pub(super) fn dim(&self) -> usize {
        self.dim
    }

    /// Whether the given [`Cell`] lies within the grid.
    pub(super) fn in_bounds(&self, cell: Cell) -> bool {
        let dim = self.dim as i32;
        (0..dim).contains(&cell.row) && (0..dim).contains(&cell.col)
    }

    /// Convert a cell to a linear index, or `None` if it is out of bounds.
    fn try_linearize(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.dim + cell.col as usize)
    }

    /// The colour occupying `cell`. `None` for an empty or out-of-bounds
    /// cell.
    pub(super) fn get(&self, cell: Cell) -> Option<Colour> {
        self.try_linearize(cell).and_then(|i| self.cells[i])
    }

    /// Paint `cell` with `colour`. Panics if the cell is out of bounds.
    pub(super) fn set(&mut self, cell: Cell, colour: Colour) {
        let i = self.try_linearize(cell).expect("cell out of bounds");
        self.cells[i] = Some(colour);
    }

    /// Number of cells currently painted with `colour`.
    pub(super) fn count(&self, colour: Colour) -> usize {
        self.cells.iter().filter(|&&c| c == Some(colour)).count()
    }

    /// Row-major copy of all cells.
    pub(super) fn snapshot(&self) -> Vec<Option<Colour>> {
        self.cells.to_vec()
    }
}
