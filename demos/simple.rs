use grid_trace::{search, Algorithm, CancellationToken, CellKind, Grid, Position, TraceRecorder};

// In this example a path is found on a grid with shape
// #####
// #S..#
// #.#.#
// #..G#
// #####
// S marks the start
// G marks the goal
fn main() {
    let mut grid = Grid::new(5, 5, CellKind::Impassable).unwrap();
    for row in 1..4 {
        for col in 1..4 {
            grid.set(Position::new(row, col), CellKind::TerrainEasy);
        }
    }
    grid.set(Position::new(2, 2), CellKind::Impassable);
    grid.update();
    let start = Position::new(1, 1);
    let goal = Position::new(3, 3);
    grid.set(start, CellKind::Start);
    grid.set(goal, CellKind::Goal);
    println!("{grid}");

    let mut trace = TraceRecorder::new();
    let result = search(
        Algorithm::Bfs,
        &grid,
        start,
        goal,
        &CancellationToken::new(),
        &mut trace,
    )
    .unwrap();
    println!("Visited {} cells", trace.len());
    if let Some(path) = result.path() {
        println!("A path has been found:");
        for p in path {
            println!("{p}");
        }
    }
}
