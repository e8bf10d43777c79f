use crate::cell::CellKind;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::path::PathResult;
use crate::position::Position;
use crate::solver::{best_first::best_first, GridSolver};
use crate::visit::{Tracer, VisitationSink};

/// A* search guided by Manhattan distance to the goal. Returns a path of minimal total
/// terrain cost, like [DijkstraSolver](crate::solver::dijkstra::DijkstraSolver), while
/// usually expanding fewer cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

/// Lower bound on the remaining cost to a fixed goal.
///
/// Every step costs at least 1 except a step into a [CellKind::Start] or [CellKind::Goal]
/// cell, which is free wherever that cell lies. The bound is the exact cost on the same
/// grid with all walls removed and all terrain costing 1: the cheapest chain of straight
/// hops through free cells. Such a bound never drops by more than the cost of a step, so
/// A* can close cells for good.
#[derive(Clone, Debug)]
pub struct Heuristic {
    goal: Position,
    goal_is_free: bool,
    /// Free cells other than the goal, with their bound to the goal.
    shortcuts: Vec<(Position, u32)>,
}

impl Heuristic {
    pub fn new(grid: &Grid, goal: Position) -> Heuristic {
        let free: Vec<Position> = grid
            .cells()
            .filter(|&(p, kind)| p != goal && kind.cost() == Some(0))
            .map(|(p, _)| p)
            .collect();
        let mut heuristic = Heuristic {
            goal,
            goal_is_free: grid.get(goal).cost() == Some(0),
            shortcuts: Vec::with_capacity(free.len()),
        };
        // Dense Dijkstra towards the goal over the free cells.
        let mut bound: Vec<u32> = free.iter().map(|&z| heuristic.direct(z)).collect();
        let mut done = vec![false; free.len()];
        loop {
            let next = (0..free.len())
                .filter(|&i| !done[i])
                .min_by_key(|&i| bound[i]);
            let Some(i) = next else {
                break;
            };
            done[i] = true;
            for j in 0..free.len() {
                if !done[j] {
                    bound[j] = bound[j].min(hop_into_free(free[j], free[i]) + bound[i]);
                }
            }
        }
        heuristic.shortcuts = free.into_iter().zip(bound).collect();
        heuristic
    }

    /// Bound for walking straight to the goal.
    fn direct(&self, p: Position) -> u32 {
        match p.manhattan_distance(&self.goal) as u32 {
            0 => 0,
            d => d - u32::from(self.goal_is_free),
        }
    }

    pub fn estimate(&self, p: Position) -> u32 {
        self.shortcuts
            .iter()
            .map(|&(z, bound)| hop_into_free(p, z) + bound)
            .fold(self.direct(p), u32::min)
    }
}

/// Cost bound of walking straight from `from` into the free cell `to`.
fn hop_into_free(from: Position, to: Position) -> u32 {
    (from.manhattan_distance(&to) as u32).saturating_sub(1)
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled> {
        let heuristic = Heuristic::new(grid, goal);
        best_first(grid, start, goal, tracer, CellKind::cost, |p| {
            heuristic.estimate(p)
        })
    }
}
