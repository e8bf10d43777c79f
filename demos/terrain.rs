use clap::Parser;
use grid_trace::{
    search, Algorithm, CancellationToken, Grid, Paced, Position, Settings, TraceRecorder,
};
use log::info;

const MAP: &str = "
    S....~~~~....
    .###.~^^~.##.
    .#...~^^~..#.
    .#.###^^###..
    ...~~~~~~~..G
";

/// Runs one algorithm on a small terrain map and prints the visit order and the path.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "astar")]
    algorithm: Algorithm,

    /// Cells per second reported to the trace, 30 disables pacing.
    #[arg(long, default_value_t = 30)]
    moves_per_second: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings::default().with_moves_per_second(args.moves_per_second);

    let grid: Grid = MAP.parse().unwrap();
    let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
    print!("{grid}");

    let cancel = CancellationToken::new();
    let mut sink = Paced::new(TraceRecorder::new(), settings.pacing_delay(), cancel.clone());
    let result = search(args.algorithm, &grid, start, goal, &cancel, &mut sink).unwrap();
    let trace = sink.into_inner();
    info!("{} expanded {} cells", args.algorithm.title(), trace.len());

    match result.path() {
        Some(path) => {
            for row in 0..grid.rows() {
                let line: String = (0..grid.cols())
                    .map(|col| {
                        let p = Position::new(row, col);
                        let kind = grid.get(p);
                        if path.contains(&p) && kind.is_terrain() {
                            '*'
                        } else if trace.order().contains(&p) && kind.is_terrain() {
                            'o'
                        } else {
                            kind.glyph()
                        }
                    })
                    .collect();
                println!("{line}");
            }
            println!(
                "{}: {} cells, cost {}",
                args.algorithm,
                path.len(),
                grid.path_cost(path).unwrap_or_default()
            );
        }
        None => println!("{}: no path", args.algorithm),
    }
}
