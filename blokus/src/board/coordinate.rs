use std::fmt;

/// The coordinates of a single cell in the board grid. `(0, 0)` is the top
/// left corner; `row` grows downward and `col` grows rightward.
///
/// Components are signed so that anchor-plus-offset arithmetic is free to
/// produce positions off the board; those are rejected by the bounds check
/// rather than made unrepresentable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Vertical position of the cell.
    pub row: i32,
    /// Horizontal position of the cell.
    pub col: i32,
}

impl Cell {
    /// Construct a [`Cell`] from the given `row` and `col`.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced from this one by the given deltas.
    pub fn offset(self, drow: i32, dcol: i32) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// The four edge-sharing neighbours of this cell. No bounds checks.
    pub fn edge_neighbours(self) -> [Cell; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }

    /// The four diagonal neighbours of this cell. No bounds checks.
    pub fn diagonal_neighbours(self) -> [Cell; 4] {
        [
            self.offset(-1, -1),
            self.offset(-1, 1),
            self.offset(1, -1),
            self.offset(1, 1),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    /// Construct a [`Cell`] from the given `(row, col)` pair.
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    /// Convert the [`Cell`] into a `(row, col)` pair.
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
