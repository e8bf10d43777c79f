use crate::position::Position;
use std::ops::{Index, IndexMut};

/// Dense `rows x cols` table indexed by [Position]. Backs the per-search parent maps,
/// visited sets and cost tables. Indexing outside the table panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMap<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    pub fn new(rows: usize, cols: usize, default_value: T) -> CellMap<T> {
        CellMap {
            rows,
            cols,
            data: vec![default_value; rows * cols],
        }
    }
}

impl<T> CellMap<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn compute_ix(&self, pos: Position) -> usize {
        assert!(
            pos.in_bounds(self.rows, self.cols),
            "{pos} outside {}x{} map",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if pos.in_bounds(self.rows, self.cols) {
            self.data.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Iterates cells in row-major order together with their position.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(ix, value)| (Position::new(ix / cols, ix % cols), value))
    }
}

impl<T> Index<Position> for CellMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Position) -> &T {
        let ix = self.compute_ix(pos);
        &self.data[ix]
    }
}

impl<T> IndexMut<Position> for CellMap<T> {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let ix = self.compute_ix(pos);
        &mut self.data[ix]
    }
}
