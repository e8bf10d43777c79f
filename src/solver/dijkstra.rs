use crate::cell::CellKind;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::path::PathResult;
use crate::position::Position;
use crate::solver::{best_first::best_first, GridSolver};
use crate::visit::{Tracer, VisitationSink};

/// Uniform-cost search: expands cells in order of accumulated terrain cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled> {
        best_first(grid, start, goal, tracer, CellKind::cost, |_| 0)
    }
}
