use crate::cell::CellKind;
use crate::cell_map::CellMap;
use crate::error::GridError;
use crate::position::Position;
use core::fmt;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// [Grid] stores the [CellKind] of every cell in row-major order and maintains
/// connected components of traversable cells using a [UnionFind] structure, so that
/// reachability can be answered without running a search.
///
/// A search only ever borrows the grid immutably; mutate it between searches.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: CellMap<CellKind>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Creates a `rows x cols` grid filled with `default_value`. Components are generated
    /// right away.
    pub fn new(rows: usize, cols: usize, default_value: CellKind) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        let mut grid = Grid {
            cells: CellMap::new(rows, cols, default_value),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from nested rows. All rows must have the same length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Grid, GridError>
    where
        R: AsRef<[CellKind]>,
    {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Grid::new(n_rows, n_cols, CellKind::TerrainEasy)?;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != n_cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: n_cols,
                    found: cells.len(),
                });
            }
            for (col, kind) in cells.iter().enumerate() {
                grid.cells[Position::new(row, col)] = *kind;
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.in_bounds(self.rows(), self.cols())
    }

    /// Kind of the cell at `pos`. Panics if `pos` is out of bounds.
    #[inline]
    pub fn get(&self, pos: Position) -> CellKind {
        self.cells[pos]
    }

    pub fn kind_at(&self, pos: Position) -> Option<CellKind> {
        self.cells.get(pos).copied()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty
    /// if they are (potentially) broken apart by a newly blocked cell.
    pub fn set(&mut self, pos: Position, kind: CellKind) {
        let old = self.cells[pos];
        self.cells[pos] = kind;
        if old.is_traversable() && !kind.is_traversable() {
            self.components_dirty = true;
        } else if !old.is_traversable() && kind.is_traversable() {
            let p_ix = self.cells.compute_ix(pos);
            for n in self.passable_neighbors(pos) {
                self.components.union(p_ix, self.cells.compute_ix(n));
            }
        }
    }

    /// Whether a search may enter `pos`.
    #[inline]
    pub fn can_move_to(&self, pos: Position) -> bool {
        self.kind_at(pos).is_some_and(CellKind::is_traversable)
    }

    /// Traversable orthogonal neighbours of `pos` in the engine-wide order down, up,
    /// right, left.
    pub fn passable_neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        pos.neighbors(self.rows(), self.cols())
            .into_iter()
            .filter(|n| self.cells[*n].is_traversable())
            .collect()
    }

    /// First cell of the given kind in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Position> {
        self.cells.iter().find(|(_, k)| **k == kind).map(|(p, _)| p)
    }

    pub fn start(&self) -> Option<Position> {
        self.find(CellKind::Start)
    }

    pub fn goal(&self) -> Option<Position> {
        self.find(CellKind::Goal)
    }

    /// All cells with their positions in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.cells.iter().map(|(p, k)| (p, *k))
    }

    /// Total cost of following `path`: the entry cost of every cell after the first, so
    /// start and goal cells add nothing. Returns [None] if the path enters an impassable
    /// or out-of-bounds cell.
    pub fn path_cost(&self, path: &[Position]) -> Option<u32> {
        path.iter()
            .skip(1)
            .map(|p| self.kind_at(*p).and_then(CellKind::cost))
            .sum()
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn get_component(&self, pos: Position) -> usize {
        self.components.find(self.cells.compute_ix(pos))
    }

    /// Checks if start and goal are traversable and on the same component.
    pub fn reachable(&self, start: Position, goal: Position) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: Position, goal: Position) -> bool {
        if self.can_move_to(start) && self.can_move_to(goal) {
            let start_ix = self.cells.compute_ix(start);
            let goal_ix = self.cells.compute_ix(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable grid neighbours to
    /// the same components.
    pub fn generate_components(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        self.components = UnionFind::new(rows * cols);
        self.components_dirty = false;
        for row in 0..rows {
            for col in 0..cols {
                let pos = Position::new(row, col);
                if !self.cells[pos].is_traversable() {
                    continue;
                }
                let parent_ix = self.cells.compute_ix(pos);
                // Linking down and right covers every orthogonal edge once.
                for n in [Position::new(row + 1, col), Position::new(row, col + 1)] {
                    if self.can_move_to(n) {
                        let ix = self.cells.compute_ix(n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let line: String = (0..self.cols())
                .map(|col| self.cells[Position::new(row, col)].glyph())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Reads the text form printed by [Display](fmt::Display): one line per row, one glyph
    /// per cell. Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Grid, GridError> {
        let mut rows: Vec<Vec<CellKind>> = Vec::new();
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(col, glyph)| {
                    CellKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                        glyph,
                        position: Position::new(row, col),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }
        Grid::from_rows(&rows)
    }
}
