use core::fmt;
use smallvec::SmallVec;

/// A cell coordinate on a row-major grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Orthogonal neighbours inside a `rows x cols` grid, in the order down, up, right,
    /// left. Every engine expands in this order, which fixes tie-breaks and makes visit
    /// traces reproducible.
    pub fn neighbors(&self, rows: usize, cols: usize) -> SmallVec<[Position; 4]> {
        let mut neighbors = SmallVec::new();
        if self.row + 1 < rows {
            neighbors.push(Position::new(self.row + 1, self.col));
        }
        if self.row > 0 {
            neighbors.push(Position::new(self.row - 1, self.col));
        }
        if self.col + 1 < cols {
            neighbors.push(Position::new(self.row, self.col + 1));
        }
        if self.col > 0 {
            neighbors.push(Position::new(self.row, self.col - 1));
        }
        neighbors
    }

    /// Whether the two positions share an edge.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Position {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
