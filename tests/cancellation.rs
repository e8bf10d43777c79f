/// Cancellation is observed at every visit: a search stops reporting cells once the token
/// is set and returns an error instead of a partial result.
use grid_trace::{
    race, search, Algorithm, BoardSize, CancellationToken, Cancelled, CellKind, Grid, Position,
    SearchError, Settings, TraceRecorder,
};
use std::thread;
use std::time::Duration;

fn open_grid() -> Grid {
    let size = BoardSize::Medium;
    Grid::new(size.rows(), size.cols(), CellKind::TerrainEasy).unwrap()
}

#[test]
fn cancelled_before_start() {
    let grid = open_grid();
    let cancel = CancellationToken::new();
    cancel.cancel();
    for algorithm in Algorithm::ALL {
        let mut recorder = TraceRecorder::new();
        let result = search(
            algorithm,
            &grid,
            Position::new(0, 0),
            Position::new(14, 24),
            &cancel,
            &mut recorder,
        );
        assert_eq!(result, Err(SearchError::Cancelled), "{algorithm}");
        assert!(recorder.is_empty(), "{algorithm}");
    }
}

#[test]
fn sink_can_stop_the_search() {
    const LIMIT: usize = 7;
    let grid = open_grid();
    for algorithm in Algorithm::ALL {
        let mut seen = Vec::new();
        let mut sink = |p: Position| -> Result<(), Cancelled> {
            if seen.len() == LIMIT {
                return Err(Cancelled);
            }
            seen.push(p);
            Ok(())
        };
        let result = search(
            algorithm,
            &grid,
            Position::new(0, 0),
            Position::new(14, 24),
            &CancellationToken::new(),
            &mut sink,
        );
        assert!(result.unwrap_err().is_cancelled(), "{algorithm}");
        assert_eq!(seen.len(), LIMIT, "{algorithm}");
    }
}

#[test]
fn token_set_during_a_visit_stops_after_it() {
    let grid = open_grid();
    for algorithm in Algorithm::ALL {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let mut count = 0;
        let mut sink = |_: Position| -> Result<(), Cancelled> {
            count += 1;
            if count == 3 {
                trigger.cancel();
            }
            Ok(())
        };
        let result = search(
            algorithm,
            &grid,
            Position::new(0, 0),
            Position::new(14, 24),
            &cancel,
            &mut sink,
        );
        assert_eq!(result, Err(SearchError::Cancelled), "{algorithm}");
        assert_eq!(count, 3, "{algorithm}");
    }
}

#[test]
fn race_can_be_cancelled_from_another_thread() {
    let grid = open_grid();
    let cancel = CancellationToken::new();
    // One move per second: without cancellation this would run for minutes.
    let settings = Settings::new(1, BoardSize::Medium);
    let reports = thread::scope(|s| {
        let trigger = cancel.clone();
        s.spawn(move || {
            thread::sleep(Duration::from_millis(50));
            trigger.cancel();
        });
        race::run_all(
            &grid,
            Position::new(0, 0),
            Position::new(14, 24),
            &Algorithm::ALL,
            &settings,
            &cancel,
        )
    });
    assert_eq!(reports.len(), Algorithm::ALL.len());
    for report in reports.values() {
        assert!(report.is_cancelled(), "{}", report.algorithm);
        // At most the first cell is reported before the first pause.
        assert!(report.visited.len() <= 1, "{}", report.algorithm);
    }
}
