//! Pointy-top hex board with a path overlay and world-space mapping.
//!
//! Run: cargo run --bin hexfield

use rand::SeedableRng;
use rand::rngs::StdRng;
use waygrid_core::{
    GridCoordinate, GridError, GridSettings, GridSize, GridStore, HexOrientation, Topology,
    WorldPoint,
};
use waygrid_demos::{print_hex_board, scatter_obstacles};
use waygrid_paths::{find_path, hex_distance, path_cost};

const WIDTH: i32 = 14;
const HEIGHT: i32 = 9;
const ORIENTATION: HexOrientation = HexOrientation::PointyTop;
const TOPOLOGY: Topology = Topology::Hex {
    orientation: ORIENTATION,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GridError> {
    let mut rng = StdRng::seed_from_u64(11);
    let start = GridCoordinate::xy(0, HEIGHT / 2);
    let end = GridCoordinate::xy(WIDTH - 1, HEIGHT / 2);

    let settings = GridSettings::new(GridSize::flat(WIDTH, HEIGHT), TOPOLOGY)
        .with_cell_size(2.0)
        .with_origin(WorldPoint::new(1.0, 1.0, 0.0));
    let mut store = GridStore::new(&settings);
    scatter_obstacles(&mut store, &mut rng, 35, &[start, end]);

    let path = find_path(&store, start, end, true)?;
    if path.is_empty() {
        println!("no path from {start} to {end}");
    } else {
        let cost = path_cost(TOPOLOGY, start, &path).expect("searches return table-legal paths");
        println!(
            "{start} -> {end}: {} steps (straight-line {}), cost {cost}",
            path.len(),
            hex_distance(ORIENTATION, start, end)
        );
    }
    print_hex_board(&store, start, end, &path);
    println!();

    // Staggered world centers: odd rows sit half a cell to the right.
    for coord in [start, start.shift(0, 1, 0), end] {
        if let Some(world) = store.grid_to_world(coord) {
            println!("{coord} sits at {world}");
        }
    }
    let probe = WorldPoint::new(6.3, 4.8, 0.0);
    match store.world_to_grid(probe) {
        Some(cell) => println!("world {probe} falls in cell {cell}"),
        None => println!("world {probe} is off the board"),
    }
    Ok(())
}
