use std::collections::VecDeque;

use crate::cell_map::CellMap;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::path::{reconstruct, PathResult};
use crate::position::Position;
use crate::solver::GridSolver;
use crate::visit::{Tracer, VisitationSink};

/// Breadth-first search. Ignores terrain cost and returns a path with the fewest cells.
///
/// Cells are marked as discovered when they are queued, so every cell enters the queue at
/// most once and is expanded at most once.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled> {
        let mut discovered = CellMap::new(grid.rows(), grid.cols(), false);
        let mut parents: CellMap<Option<Position>> = CellMap::new(grid.rows(), grid.cols(), None);
        let mut queue = VecDeque::from([start]);
        discovered[start] = true;

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return Ok(PathResult::Found(reconstruct(&parents, goal)));
            }
            tracer.visit(current)?;
            for n in grid.passable_neighbors(current) {
                if !discovered[n] {
                    discovered[n] = true;
                    parents[n] = Some(current);
                    queue.push_back(n);
                }
            }
        }
        Ok(PathResult::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::{CancellationToken, TraceRecorder};

    fn solve(grid: &Grid, start: Position, goal: Position) -> (PathResult, Vec<Position>) {
        let mut recorder = TraceRecorder::new();
        let result = BfsSolver
            .search(grid, start, goal, &CancellationToken::new(), &mut recorder)
            .unwrap();
        (result, recorder.into_order())
    }

    /// Asserts that the fewest-cells path is found even when it crosses hard terrain.
    #[test]
    fn ignores_terrain_cost() {
        // |S^^G|
        // |....|
        let grid: Grid = "S^^G\n....".parse().unwrap();
        let (result, _) = solve(&grid, Position::new(0, 0), Position::new(0, 3));
        let path = result.into_path().unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(grid.path_cost(&path), Some(6));
    }

    /// Asserts the visit order follows the down, up, right, left neighbour order.
    #[test]
    fn visit_order_is_breadth_first() {
        // |S..|
        // |...|
        // |..G|
        let grid: Grid = "S..\n...\n..G".parse().unwrap();
        let (result, order) = solve(&grid, Position::new(0, 0), Position::new(2, 2));
        assert_eq!(result.path().map(<[Position]>::len), Some(5));
        assert_eq!(
            &order[..5],
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(2, 0),
                Position::new(1, 1),
            ]
        );
        assert!(!order.contains(&Position::new(2, 2)));
    }

    #[test]
    fn walled_off_goal() {
        let grid: Grid = "S.#.G".parse().unwrap();
        let (result, order) = solve(&grid, Position::new(0, 0), Position::new(0, 4));
        assert_eq!(result, PathResult::NotFound);
        assert_eq!(order, vec![Position::new(0, 0), Position::new(0, 1)]);
    }
}
