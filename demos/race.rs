use clap::Parser;
use grid_trace::{race, Algorithm, BoardSize, CancellationToken, CellKind, Grid, Settings};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Races every algorithm on a random board and prints one summary line per algorithm.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "medium")]
    board_size: BoardSize,

    #[arg(long, default_value_t = 30)]
    moves_per_second: u32,

    /// Share of cells that are walls.
    #[arg(long, default_value_t = 0.25)]
    wall_density: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn random_grid(size: BoardSize, wall_density: f64, rng: &mut StdRng) -> Grid {
    let (rows, cols) = size.dimensions();
    let cells: Vec<Vec<CellKind>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.gen_bool(wall_density) {
                        CellKind::Impassable
                    } else {
                        [
                            CellKind::TerrainEasy,
                            CellKind::TerrainEasy,
                            CellKind::TerrainMedium,
                            CellKind::TerrainHard,
                        ][rng.gen_range(0..4)]
                    }
                })
                .collect()
        })
        .collect();
    let mut grid = Grid::from_rows(&cells).unwrap();
    grid.set((0, 0).into(), CellKind::Start);
    grid.set((rows - 1, cols - 1).into(), CellKind::Goal);
    grid
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings::new(args.moves_per_second, args.board_size);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let grid = random_grid(settings.board_size, args.wall_density.clamp(0.0, 1.0), &mut rng);
    let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
    print!("{grid}");
    if grid.unreachable(start, goal) {
        println!("The goal cannot be reached from the start.");
    }

    let reports = race::run_all(
        &grid,
        start,
        goal,
        &Algorithm::ALL,
        &settings,
        &CancellationToken::new(),
    );
    for report in reports.values() {
        println!("{}", report.summary(&grid));
    }
}
