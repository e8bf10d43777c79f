use crate::cell_map::CellMap;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::path::{reconstruct, PathResult};
use crate::position::Position;
use crate::solver::GridSolver;
use crate::visit::{Tracer, VisitationSink};

/// Depth-first search. Follows one branch until it is exhausted before backtracking, so it
/// only guarantees that a path is found if one exists, not that the path is short.
///
/// A cell may sit on the stack several times; it is closed when first popped and later
/// copies are skipped. Its parent is the cell that pushed the copy that got popped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled> {
        let mut closed = CellMap::new(grid.rows(), grid.cols(), false);
        let mut parents: CellMap<Option<Position>> = CellMap::new(grid.rows(), grid.cols(), None);
        let mut stack: Vec<(Position, Option<Position>)> = vec![(start, None)];

        while let Some((current, parent)) = stack.pop() {
            if closed[current] {
                continue;
            }
            parents[current] = parent;
            if current == goal {
                return Ok(PathResult::Found(reconstruct(&parents, goal)));
            }
            closed[current] = true;
            tracer.visit(current)?;
            for n in grid.passable_neighbors(current) {
                if !closed[n] {
                    stack.push((n, Some(current)));
                }
            }
        }
        Ok(PathResult::NotFound)
    }
}
