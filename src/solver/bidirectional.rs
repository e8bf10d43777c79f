use std::collections::VecDeque;

use crate::cell_map::CellMap;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::path::{splice, PathResult};
use crate::position::Position;
use crate::solver::GridSolver;
use crate::visit::{Tracer, VisitationSink};

/// Two breadth-first frontiers, one growing from the start and one from the goal, taking
/// turns one step at a time. The search ends at the first cell reached by both sides.
///
/// The first meeting cell does not necessarily lie on a shortest path, so the returned
/// path can be longer than the one BFS finds. In exchange the two frontiers usually cover
/// far fewer cells than a single one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BidirectionalSolver;

/// One side of the search. `visited` holds `Some(parent)` for every cell this side has
/// dequeued; its seed has no parent.
struct Frontier {
    queue: VecDeque<(Position, Option<Position>)>,
    visited: CellMap<Option<Option<Position>>>,
}

impl Frontier {
    fn new(grid: &Grid, seed: Position) -> Frontier {
        Frontier {
            queue: VecDeque::from([(seed, None)]),
            visited: CellMap::new(grid.rows(), grid.cols(), None),
        }
    }

    /// Dequeues one cell. Returns it as the meeting point if the other side has visited it
    /// already, in which case it is not reported again.
    fn step<S: VisitationSink + ?Sized>(
        &mut self,
        grid: &Grid,
        other: &Frontier,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<Option<Position>, Cancelled> {
        let Some((current, parent)) = self.queue.pop_front() else {
            return Ok(None);
        };
        if self.visited[current].is_some() {
            return Ok(None);
        }
        self.visited[current] = Some(parent);
        if other.visited[current].is_some() {
            return Ok(Some(current));
        }
        tracer.visit(current)?;
        for n in grid.passable_neighbors(current) {
            if self.visited[n].is_none() {
                self.queue.push_back((n, Some(current)));
            }
        }
        Ok(None)
    }
}

impl GridSolver for BidirectionalSolver {
    fn name(&self) -> &'static str {
        "bidirectional"
    }

    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled> {
        if start == goal {
            return Ok(PathResult::Found(vec![start]));
        }
        let mut forward = Frontier::new(grid, start);
        let mut backward = Frontier::new(grid, goal);

        // Either frontier running dry means its whole component was explored without
        // meeting the other side.
        while !forward.queue.is_empty() && !backward.queue.is_empty() {
            if let Some(meeting) = forward.step(grid, &backward, tracer)? {
                return Ok(PathResult::Found(splice(
                    meeting,
                    &forward.visited,
                    &backward.visited,
                )));
            }
            if let Some(meeting) = backward.step(grid, &forward, tracer)? {
                return Ok(PathResult::Found(splice(
                    meeting,
                    &forward.visited,
                    &backward.visited,
                )));
            }
        }
        Ok(PathResult::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{all_distinct, is_valid_path};
    use crate::visit::{CancellationToken, TraceRecorder};

    fn solve(grid: &Grid, start: Position, goal: Position) -> (PathResult, Vec<Position>) {
        let mut recorder = TraceRecorder::new();
        let result = BidirectionalSolver
            .search(grid, start, goal, &CancellationToken::new(), &mut recorder)
            .unwrap();
        (result, recorder.into_order())
    }

    #[test]
    fn corridor_meets_in_the_middle() {
        // |S...G|
        let grid: Grid = "S...G".parse().unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(0, 4);
        let (result, order) = solve(&grid, start, goal);
        let expected: Vec<Position> = (0..5).map(|c| Position::new(0, c)).collect();
        assert_eq!(result, PathResult::Found(expected));
        // Alternating sides: S, G, (0,1), (0,3), (0,2) and then (0,2) again from the goal
        // side, which is the meeting point and not reported twice.
        assert_eq!(
            order,
            vec![
                Position::new(0, 0),
                Position::new(0, 4),
                Position::new(0, 1),
                Position::new(0, 3),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn goal_is_reported_by_backward_side() {
        let grid: Grid = "S.\n.G".parse().unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(1, 1);
        let (result, order) = solve(&grid, start, goal);
        let path = result.into_path().unwrap();
        assert!(is_valid_path(&grid, &path, start, goal));
        assert_eq!(path.len(), 3);
        assert!(order.contains(&goal));
        assert!(all_distinct(&order));
    }

    #[test]
    fn exhausted_frontier_means_no_path() {
        // |S.#..|
        // |..#.G|
        let grid: Grid = "S.#..\n..#.G".parse().unwrap();
        let (result, order) = solve(&grid, Position::new(0, 0), Position::new(1, 4));
        assert_eq!(result, PathResult::NotFound);
        assert!(all_distinct(&order));
    }
}
