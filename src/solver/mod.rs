use crate::error::{Cancelled, Endpoint, SearchError, UnknownName};
use crate::grid::Grid;
use crate::path::PathResult;
use crate::position::Position;
use crate::visit::{CancellationToken, Tracer, VisitationSink};
use core::fmt;
use itertools::Itertools;
use log::{debug, warn};
use std::str::FromStr;

pub mod astar;
mod best_first;
pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use bidirectional::BidirectionalSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// A search engine over a [Grid]. Implementors provide [run](GridSolver::run); callers use
/// [search](GridSolver::search), which checks the request and wires up cancellation.
pub trait GridSolver {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Runs the search on a validated request, reporting each expanded cell through
    /// `tracer`. Returns early with [Cancelled] as soon as the tracer does.
    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled>;

    /// Searches a path from `start` to `goal`, passing every expanded cell to `sink`.
    ///
    /// Fails with [SearchError::Cancelled] if `cancel` is triggered before or during any
    /// visit, and rejects endpoints that are out of bounds or impassable.
    fn search<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        cancel: &CancellationToken,
        sink: &mut S,
    ) -> Result<PathResult, SearchError> {
        validate(grid, start, goal)?;
        debug!("{}: searching {} -> {}", self.name(), start, goal);
        let mut tracer = Tracer::new(sink, cancel);
        let result = self.run(grid, start, goal, &mut tracer)?;
        match result.path() {
            Some(path) => debug!(
                "{}: found path of {} cells after {} expansions",
                self.name(),
                path.len(),
                tracer.expanded()
            ),
            None => debug!(
                "{}: no path after {} expansions",
                self.name(),
                tracer.expanded()
            ),
        }
        Ok(result)
    }
}

/// Checks that both endpoints lie on the grid and can be entered.
pub fn validate(grid: &Grid, start: Position, goal: Position) -> Result<(), SearchError> {
    for (endpoint, position) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        let error = match grid.kind_at(position) {
            None => SearchError::OutOfBounds {
                endpoint,
                position,
                rows: grid.rows(),
                cols: grid.cols(),
            },
            Some(kind) if !kind.is_traversable() => SearchError::Impassable { endpoint, position },
            Some(_) => continue,
        };
        warn!("Rejecting search request: {error}");
        return Err(error);
    }
    Ok(())
}

/// The available search engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::Bidirectional,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth first search",
            Algorithm::Dfs => "Depth first search",
            Algorithm::Dijkstra => "Dijkstra's algorithm",
            Algorithm::Astar => "A* search",
            Algorithm::Bidirectional => "Bidirectional search",
        }
    }

    /// Whether the returned path is guaranteed to have minimal total terrain cost.
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar)
    }
}

impl GridSolver for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => BfsSolver.name(),
            Algorithm::Dfs => DfsSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
            Algorithm::Astar => AstarSolver.name(),
            Algorithm::Bidirectional => BidirectionalSolver.name(),
        }
    }

    fn run<S: VisitationSink + ?Sized>(
        &self,
        grid: &Grid,
        start: Position,
        goal: Position,
        tracer: &mut Tracer<'_, S>,
    ) -> Result<PathResult, Cancelled> {
        match self {
            Algorithm::Bfs => BfsSolver.run(grid, start, goal, tracer),
            Algorithm::Dfs => DfsSolver.run(grid, start, goal, tracer),
            Algorithm::Dijkstra => DijkstraSolver.run(grid, start, goal, tracer),
            Algorithm::Astar => AstarSolver.run(grid, start, goal, tracer),
            Algorithm::Bidirectional => BidirectionalSolver.run(grid, start, goal, tracer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Algorithm, UnknownName> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName {
                what: "algorithm",
                name: s.to_owned(),
                expected: Algorithm::ALL.iter().map(|a| a.name()).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use crate::visit::TraceRecorder;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(" AStar ".parse::<Algorithm>(), Ok(Algorithm::Astar));
        assert!("greedy".parse::<Algorithm>().is_err());
    }

    #[test]
    fn rejects_bad_endpoints() {
        let grid: Grid = "S#\n.G".parse().unwrap();
        let cancel = CancellationToken::new();
        let mut recorder = TraceRecorder::new();
        let err = Algorithm::Bfs
            .search(
                &grid,
                Position::new(0, 0),
                Position::new(2, 0),
                &cancel,
                &mut recorder,
            )
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                position: Position::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        let err = Algorithm::Astar
            .search(
                &grid,
                Position::new(0, 1),
                Position::new(1, 1),
                &cancel,
                &mut recorder,
            )
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::Impassable {
                endpoint: Endpoint::Start,
                position: Position::new(0, 1)
            }
        );
        assert!(recorder.is_empty());
        assert_eq!(grid.get(Position::new(0, 1)), CellKind::Impassable);
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid: Grid = "#.#\n...\n#.#".parse().unwrap();
        let p = Position::new(1, 1);
        for algorithm in Algorithm::ALL {
            let mut recorder = TraceRecorder::new();
            let result = algorithm
                .search(&grid, p, p, &CancellationToken::new(), &mut recorder)
                .unwrap();
            assert_eq!(result, PathResult::Found(vec![p]), "{algorithm}");
            assert!(recorder.is_empty(), "{algorithm}");
        }
    }

    #[test]
    fn isolated_start_equal_to_goal() {
        let grid: Grid = "###\n#.#\n###".parse().unwrap();
        let p = Position::new(1, 1);
        for algorithm in Algorithm::ALL {
            let result = algorithm
                .search(&grid, p, p, &CancellationToken::new(), &mut TraceRecorder::new())
                .unwrap();
            assert!(result.is_found(), "{algorithm}");
        }
    }
}
