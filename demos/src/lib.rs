//! Shared board helpers for the demo binaries: random obstacles and
//! ASCII rendering of the z = 0 plane with a path overlay.

use rand::{Rng, RngExt};
use waygrid_core::{GridCoordinate, GridStore};

/// Knock out up to `count` random cells, never touching `keep`.
pub fn scatter_obstacles(
    store: &mut GridStore,
    rng: &mut impl Rng,
    count: usize,
    keep: &[GridCoordinate],
) {
    let size = store.size();
    let mut placed = 0;
    let mut attempts = 0;
    while placed < count && attempts < count * 20 {
        attempts += 1;
        let c = GridCoordinate::xy(
            rng.random_range(0..size.width),
            rng.random_range(0..size.height),
        );
        if keep.contains(&c) || !store.is_walkable(c) {
            continue;
        }
        store.set_walkable(c, false);
        placed += 1;
    }
}

fn glyph(
    store: &GridStore,
    start: GridCoordinate,
    end: GridCoordinate,
    path: &[GridCoordinate],
    c: GridCoordinate,
) -> char {
    if c == start {
        '@'
    } else if c == end {
        '>'
    } else if path.contains(&c) {
        '*'
    } else if store.is_walkable(c) {
        '.'
    } else {
        '#'
    }
}

/// Print a square board with the path overlaid.
pub fn print_board(
    store: &GridStore,
    start: GridCoordinate,
    end: GridCoordinate,
    path: &[GridCoordinate],
) {
    let size = store.size();
    for y in 0..size.height {
        let mut line = String::new();
        for x in 0..size.width {
            line.push(glyph(store, start, end, path, GridCoordinate::xy(x, y)));
        }
        println!("{line}");
    }
}

/// Print a pointy-top hex board: odd rows indent half a cell.
pub fn print_hex_board(
    store: &GridStore,
    start: GridCoordinate,
    end: GridCoordinate,
    path: &[GridCoordinate],
) {
    let size = store.size();
    for y in 0..size.height {
        let mut line = String::new();
        if y & 1 == 1 {
            line.push(' ');
        }
        for x in 0..size.width {
            line.push(glyph(store, start, end, path, GridCoordinate::xy(x, y)));
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}
