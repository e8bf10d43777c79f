//! Runs several algorithms side by side on the same grid, the way a visualizer animates them
//! next to each other. Each algorithm gets its own thread and its own trace; all of them
//! share one cancellation token.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;
use log::info;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::error::SearchError;
use crate::grid::Grid;
use crate::path::{steps, PathResult};
use crate::position::Position;
use crate::solver::{Algorithm, GridSolver};
use crate::visit::{CancellationToken, Paced, TraceRecorder};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// What one algorithm produced during a race.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub outcome: Result<PathResult, SearchError>,
    /// Expanded cells in the order they were reported. Also filled for cancelled runs, up
    /// to the point of cancellation.
    pub visited: Vec<Position>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn path(&self) -> Option<&[Position]> {
        self.outcome.as_ref().ok().and_then(PathResult::path)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.outcome, Err(SearchError::Cancelled))
    }

    /// Cells on the path between start and goal.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(steps)
    }

    pub fn cost(&self, grid: &Grid) -> Option<u32> {
        self.path().and_then(|path| grid.path_cost(path))
    }

    /// Number of expanded terrain cells, leaving out the start and goal markers.
    pub fn visited_terrain(&self, grid: &Grid) -> usize {
        self.visited
            .iter()
            .filter(|&&p| grid.get(p).is_terrain())
            .count()
    }

    /// One-line summary for display next to the animation.
    pub fn summary<'a>(&'a self, grid: &'a Grid) -> Summary<'a> {
        Summary { report: self, grid }
    }
}

pub struct Summary<'a> {
    report: &'a RunReport,
    grid: &'a Grid,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = self.report;
        write!(f, "{}: ", report.algorithm.title())?;
        match &report.outcome {
            Ok(PathResult::Found(path)) => write!(
                f,
                "{} steps, cost {}",
                steps(path),
                self.grid.path_cost(path).unwrap_or_default()
            )?,
            Ok(PathResult::NotFound) => write!(f, "no path")?,
            Err(e) => write!(f, "{e}")?,
        }
        write!(
            f,
            ", {} cells visited in {:.1?}",
            report.visited_terrain(self.grid),
            report.elapsed
        )
    }
}

fn run_one(
    algorithm: Algorithm,
    grid: &Grid,
    start: Position,
    goal: Position,
    delay: Option<Duration>,
    cancel: &CancellationToken,
) -> RunReport {
    let mut sink = Paced::new(TraceRecorder::new(), delay, cancel.clone());
    let started = Instant::now();
    let outcome = algorithm.search(grid, start, goal, cancel, &mut sink);
    let elapsed = started.elapsed();
    let report = RunReport {
        algorithm,
        outcome,
        visited: sink.into_inner().into_order(),
        elapsed,
    };
    info!("{}", report.summary(grid));
    report
}

/// Runs every algorithm in `algorithms` concurrently from `start` to `goal`, pacing each
/// trace according to `settings`. Duplicate entries run once. Reports come back in the
/// order the algorithms were given, after all of them have finished or been cancelled.
pub fn run_all(
    grid: &Grid,
    start: Position,
    goal: Position,
    algorithms: &[Algorithm],
    settings: &Settings,
    cancel: &CancellationToken,
) -> FxIndexMap<Algorithm, RunReport> {
    let delay = settings.pacing_delay();
    info!(
        "Racing {} algorithms at {} moves per second",
        algorithms.len(),
        settings.moves_per_second()
    );
    thread::scope(|s| {
        let handles = algorithms
            .iter()
            .copied()
            .unique()
            .map(|algorithm| {
                let handle = s.spawn(move || run_one(algorithm, grid, start, goal, delay, cancel));
                (algorithm, handle)
            })
            .collect_vec();
        handles
            .into_iter()
            .map(|(algorithm, handle)| {
                let report = handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                (algorithm, report)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use crate::config::{BoardSize, MAX_MOVES_PER_SECOND};

    fn full_speed() -> Settings {
        Settings::new(MAX_MOVES_PER_SECOND, BoardSize::Small)
    }

    #[test]
    fn reports_keep_request_order() {
        // |S.~.|
        // |.#^.|
        // |...G|
        let grid: Grid = "S.~.\n.#^.\n...G".parse().unwrap();
        let start = grid.start().unwrap();
        let goal = grid.goal().unwrap();
        let algorithms = [
            Algorithm::Astar,
            Algorithm::Bfs,
            Algorithm::Astar,
            Algorithm::Bidirectional,
        ];
        let reports = run_all(
            &grid,
            start,
            goal,
            &algorithms,
            &full_speed(),
            &CancellationToken::new(),
        );
        assert_eq!(
            reports.keys().copied().collect_vec(),
            vec![Algorithm::Astar, Algorithm::Bfs, Algorithm::Bidirectional]
        );
        for report in reports.values() {
            assert!(report.path().is_some(), "{}", report.algorithm);
            assert_eq!(report.steps(), Some(4), "{}", report.algorithm);
            assert!(!report.visited.is_empty());
        }
        // Down the left column and along the bottom row.
        assert_eq!(reports[&Algorithm::Astar].cost(&grid), Some(4));
    }

    #[test]
    fn visited_terrain_skips_markers() {
        let grid: Grid = "S.G".parse().unwrap();
        let reports = run_all(
            &grid,
            Position::new(0, 0),
            Position::new(0, 2),
            &[Algorithm::Bidirectional],
            &full_speed(),
            &CancellationToken::new(),
        );
        let report = &reports[&Algorithm::Bidirectional];
        // Start, goal and then the middle cell from the start side.
        assert_eq!(report.visited.len(), 3);
        assert_eq!(report.visited_terrain(&grid), 1);
        assert_eq!(report.cost(&grid), Some(1));
    }

    #[test]
    fn cancelled_race_reports_every_algorithm() {
        let grid = Grid::new(20, 20, CellKind::TerrainEasy).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let reports = run_all(
            &grid,
            Position::new(0, 0),
            Position::new(19, 19),
            &Algorithm::ALL,
            &Settings::default(),
            &cancel,
        );
        assert_eq!(reports.len(), Algorithm::ALL.len());
        for report in reports.values() {
            assert!(report.is_cancelled(), "{}", report.algorithm);
            assert!(report.visited.is_empty());
            assert_eq!(report.path(), None);
        }
    }
}
