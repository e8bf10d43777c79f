use crate::cell_map::CellMap;
use crate::grid::Grid;
use crate::position::Position;
use itertools::Itertools;
use std::iter::successors;

/// Outcome of a search that ran to completion. Cancellation is reported separately as an
/// error, never as a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// Positions from start to goal, both inclusive.
    Found(Vec<Position>),
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&[Position]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<Position>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}

impl From<Option<Vec<Position>>> for PathResult {
    fn from(path: Option<Vec<Position>>) -> PathResult {
        path.map_or(PathResult::NotFound, PathResult::Found)
    }
}

/// Walks parent pointers back from `goal` and returns the path in start-to-goal order.
/// The start is the one cell on the chain without a parent.
pub(crate) fn reconstruct(parents: &CellMap<Option<Position>>, goal: Position) -> Vec<Position> {
    let mut path: Vec<Position> = successors(Some(goal), |p| parents[*p]).collect();
    path.reverse();
    path
}

/// Joins the two halves of a bidirectional search at `meeting`. Entries of the visited
/// maps are `Some(parent)` for visited cells, with the seed of each side having no parent.
pub(crate) fn splice(
    meeting: Position,
    forward: &CellMap<Option<Option<Position>>>,
    backward: &CellMap<Option<Option<Position>>>,
) -> Vec<Position> {
    let mut path: Vec<Position> = successors(Some(meeting), |p| forward[*p].flatten()).collect();
    path.reverse();
    path.extend(successors(backward[meeting].flatten(), |p| {
        backward[*p].flatten()
    }));
    path
}

/// Number of moves strictly between start and goal, i.e. the cells a path passes
/// through without counting its endpoints.
pub fn steps(path: &[Position]) -> usize {
    path.len().saturating_sub(2)
}

/// Checks that `path` runs from `start` to `goal` through traversable, orthogonally
/// adjacent cells.
pub fn is_valid_path(grid: &Grid, path: &[Position], start: Position, goal: Position) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&goal)
        && path.iter().all(|p| grid.can_move_to(*p))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

/// Whether no position occurs twice in `positions`.
pub fn all_distinct(positions: &[Position]) -> bool {
    positions.iter().all_unique()
}
