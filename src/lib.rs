//! # grid_trace
//!
//! Search engines for a grid pathfinding visualizer. Implements
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and
//! [bidirectional](https://en.wikipedia.org/wiki/Bidirectional_search) search over a
//! 4-connected grid whose cells carry a terrain cost.
//!
//! Every expanded cell is passed to a [VisitationSink] in expansion order, which is what
//! a visualizer animates. The sink is also where a search can be paced and cancelled
//! through a [CancellationToken]. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) so
//! callers can tell in advance whether a search will succeed.
//!
//! ```
//! use grid_trace::{search, Algorithm, CancellationToken, Grid, TraceRecorder};
//!
//! let grid: Grid = "S.~\n.#.\n..G".parse().unwrap();
//! let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
//! let mut trace = TraceRecorder::new();
//! let result = search(Algorithm::Astar, &grid, start, goal, &CancellationToken::new(), &mut trace)
//!     .unwrap();
//! assert_eq!(grid.path_cost(result.path().unwrap()), Some(3));
//! ```
pub mod cell;
pub mod cell_map;
pub mod config;
pub mod error;
pub mod grid;
mod open_set;
pub mod path;
pub mod position;
pub mod race;
pub mod solver;
pub mod visit;

pub use cell::CellKind;
pub use config::{BoardSize, Settings};
pub use error::{Cancelled, GridError, SearchError};
pub use grid::Grid;
pub use path::PathResult;
pub use position::Position;
pub use solver::{Algorithm, GridSolver};
pub use visit::{CancellationToken, Paced, TraceRecorder, VisitationSink};

/// Runs `algorithm` from `start` to `goal` on `grid`, passing every expanded cell to
/// `sink`. Shorthand for [GridSolver::search] on the [Algorithm].
pub fn search<S: VisitationSink + ?Sized>(
    algorithm: Algorithm,
    grid: &Grid,
    start: Position,
    goal: Position,
    cancel: &CancellationToken,
    sink: &mut S,
) -> Result<PathResult, SearchError> {
    algorithm.search(grid, start, goal, cancel, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wall-only 1x5 corridor broken in the middle.
    #[test]
    fn broken_corridor_has_no_path() {
        let grid = Grid::from_rows(&[[false, false, true, false, false].map(CellKind::from_blocked)])
            .unwrap();
        let start = Position::new(0, 0);
        let goal = Position::new(0, 4);
        assert!(grid.unreachable(start, goal));
        for algorithm in Algorithm::ALL {
            let result = search(
                algorithm,
                &grid,
                start,
                goal,
                &CancellationToken::new(),
                &mut TraceRecorder::new(),
            );
            assert_eq!(result, Ok(PathResult::NotFound), "{algorithm}");
        }
    }
}
