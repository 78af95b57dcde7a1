//! Random square maze searched with and without corner cutting, plus a
//! batch searcher answering queries from a worker thread.
//!
//! Run: cargo run --bin maze

use rand::SeedableRng;
use rand::rngs::StdRng;
use waygrid_core::{GridCoordinate, GridError, GridSettings, GridSize, GridStore, Topology};
use waygrid_demos::{print_board, scatter_obstacles};
use waygrid_paths::{BatchPathfinder, find_path, path_cost};

const WIDTH: i32 = 24;
const HEIGHT: i32 = 12;
const TOPOLOGY: Topology = Topology::SQUARE_DIAGONAL;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GridError> {
    let mut rng = StdRng::seed_from_u64(7);
    let start = GridCoordinate::xy(0, 0);
    let end = GridCoordinate::xy(WIDTH - 1, HEIGHT - 1);

    let settings = GridSettings::new(GridSize::flat(WIDTH, HEIGHT), TOPOLOGY);
    let mut store = GridStore::new(&settings);
    scatter_obstacles(&mut store, &mut rng, 70, &[start, end]);

    for allow in [true, false] {
        let path = find_path(&store, start, end, allow)?;
        let label = if allow {
            "corner cutting"
        } else {
            "no corner cutting"
        };
        match path_cost(TOPOLOGY, start, &path) {
            Some(cost) if !path.is_empty() => {
                println!("{label}: {} steps, cost {cost}", path.len());
            }
            _ => println!("{label}: no path"),
        }
        print_board(&store, start, end, &path);
        println!();
    }

    // A batch searcher owns its buffers, so a worker thread can answer a
    // stream of queries without allocating per search.
    let mut batch = BatchPathfinder::new(store.size());
    let worker_store = store.clone();
    let handle = std::thread::spawn(move || -> Result<Vec<(GridCoordinate, usize)>, GridError> {
        let mut reached = Vec::new();
        for target in [
            GridCoordinate::xy(WIDTH - 1, 0),
            GridCoordinate::xy(0, HEIGHT - 1),
            GridCoordinate::xy(WIDTH / 2, HEIGHT / 2),
        ] {
            let path = batch.find_path(&worker_store, start, target, false)?;
            reached.push((target, path.len()));
        }
        Ok(reached)
    });
    let reached = handle.join().expect("worker thread panicked")?;
    for (target, steps) in reached {
        if steps == 0 {
            println!("worker: {target} unreachable");
        } else {
            println!("worker: {target} in {steps} steps");
        }
    }
    Ok(())
}
