//! Single-shot search entry point.

use waygrid_core::{GridCoordinate, GridError, GridStore};

use crate::engine::{self, SearchBuffers};

/// Find the cheapest path from `start` to `end` on `store`.
///
/// The result runs from the cell after `start` through `end` inclusive,
/// so `path.last()` is the destination and `start` itself never appears.
/// An empty vector means there is no route: the endpoints coincide, the
/// end cell is unwalkable, or every way through is blocked.
///
/// With `allow_corner_cutting` false, a diagonal move is only taken when
/// the cells it slips between (see
/// [`Topology::corner_cells`](waygrid_core::Topology::corner_cells)) are
/// all in range and walkable.
///
/// Buffers are allocated per call; use
/// [`BatchPathfinder`](crate::BatchPathfinder) to amortize them over many
/// searches.
///
/// # Errors
///
/// [`GridError::OutOfRange`] if `start` or `end` lies outside the store.
/// The store is never touched before validation.
pub fn find_path(
    store: &GridStore,
    start: GridCoordinate,
    end: GridCoordinate,
    allow_corner_cutting: bool,
) -> Result<Vec<GridCoordinate>, GridError> {
    let mut buffers = SearchBuffers::with_capacity(store.size());
    engine::search(store, start, end, allow_corner_cutting, &mut buffers)?;
    Ok(buffers.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_cost;
    use waygrid_core::{GridSettings, GridSize, HexOrientation, Topology, UNREACHABLE};

    const CARDINAL: Topology = Topology::Square { diagonals: false };
    const DIAGONAL: Topology = Topology::SQUARE_DIAGONAL;
    const POINTY: Topology = Topology::Hex {
        orientation: HexOrientation::PointyTop,
    };
    const FLAT: Topology = Topology::Hex {
        orientation: HexOrientation::FlatTop,
    };

    fn open_store(width: i32, height: i32, topology: Topology) -> GridStore {
        GridStore::new(&GridSettings::new(GridSize::flat(width, height), topology))
    }

    fn block(store: &mut GridStore, cells: &[(i32, i32)]) {
        for &(x, y) in cells {
            store.set_walkable(GridCoordinate::xy(x, y), false);
        }
    }

    /// End reached, start excluded, every cell walkable.
    fn assert_reaches(
        store: &GridStore,
        start: GridCoordinate,
        end: GridCoordinate,
        path: &[GridCoordinate],
    ) {
        assert_eq!(path.last(), Some(&end));
        assert!(!path.contains(&start));
        for &c in path {
            assert!(store.is_walkable(c), "path crosses blocked cell {c}");
        }
    }

    /// Cheapest cost by exhaustive relaxation, corner rule included.
    /// `None` when `end` cannot be reached. No heuristic, no open list:
    /// an independent oracle for the search result.
    fn relaxation_sweep_cost(
        store: &GridStore,
        start: GridCoordinate,
        end: GridCoordinate,
        allow_corner_cutting: bool,
    ) -> Option<i32> {
        let size = store.size();
        let topology = store.topology();
        let mut dist = vec![UNREACHABLE; store.len()];
        dist[size.index_of(start).unwrap()] = 0;
        let mut changed = true;
        while changed {
            changed = false;
            for idx in 0..store.len() {
                if dist[idx] == UNREACHABLE {
                    continue;
                }
                let at = size.coord_at(idx);
                for step in topology.steps(at) {
                    let next = at + step.delta;
                    let Some(ni) = size.index_of(next) else {
                        continue;
                    };
                    if !store.is_walkable(next) {
                        continue;
                    }
                    if !allow_corner_cutting
                        && topology
                            .corner_cells(at, step.delta)
                            .as_slice()
                            .iter()
                            .any(|&c| !store.is_walkable(c))
                    {
                        continue;
                    }
                    if dist[idx] + step.cost < dist[ni] {
                        dist[ni] = dist[idx] + step.cost;
                        changed = true;
                    }
                }
            }
        }
        let d = dist[size.index_of(end).unwrap()];
        (d != UNREACHABLE).then_some(d)
    }

    #[test]
    fn adjacent_end_is_a_single_hop() {
        let store = open_store(3, 3, CARDINAL);
        let path = find_path(&store, GridCoordinate::ZERO, GridCoordinate::xy(1, 0), true)
            .unwrap();
        assert_eq!(path, vec![GridCoordinate::xy(1, 0)]);
    }

    #[test]
    fn start_equals_end_is_immediately_empty() {
        let mut store = open_store(3, 3, DIAGONAL);
        // Even a fully blocked board cannot make this fail.
        store.fill_walkable(false);
        let at = GridCoordinate::xy(1, 1);
        assert_eq!(find_path(&store, at, at, false).unwrap(), vec![]);
    }

    #[test]
    fn straight_line_runs_forward_from_start() {
        let store = open_store(8, 1, CARDINAL);
        let path = find_path(&store, GridCoordinate::ZERO, GridCoordinate::xy(7, 0), true)
            .unwrap();
        let expected: Vec<_> = (1..8).map(|x| GridCoordinate::xy(x, 0)).collect();
        assert_eq!(path, expected);
        assert_eq!(path_cost(CARDINAL, GridCoordinate::ZERO, &path), Some(70));
    }

    #[test]
    fn diagonals_beat_staircases() {
        let store = open_store(5, 5, DIAGONAL);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::xy(4, 4);
        let path = find_path(&store, start, end, true).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path_cost(DIAGONAL, start, &path), Some(56));
        assert_reaches(&store, start, end, &path);
    }

    #[test]
    fn cardinal_grids_never_move_diagonally() {
        let store = open_store(5, 5, CARDINAL);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::xy(3, 3);
        let path = find_path(&store, start, end, true).unwrap();
        assert_eq!(path.len(), 6);
        // path_cost only accepts hops present in the topology table.
        assert_eq!(path_cost(CARDINAL, start, &path), Some(60));
    }

    #[test]
    fn equal_cost_routes_resolve_to_the_earliest_expansion() {
        // Two routes of cost 20 around a 2x2 board. The move table runs
        // N, E, S, W, and ties in the open list go to the earliest entry,
        // so the east-first route wins. Pinned: callers rely on repeated
        // searches returning identical paths.
        let store = open_store(2, 2, CARDINAL);
        let path = find_path(&store, GridCoordinate::ZERO, GridCoordinate::xy(1, 1), true)
            .unwrap();
        assert_eq!(path, vec![GridCoordinate::xy(1, 0), GridCoordinate::xy(1, 1)]);
    }

    #[test]
    fn blocked_corner_forces_the_long_way_round() {
        let mut store = open_store(3, 3, DIAGONAL);
        block(&mut store, &[(1, 0)]);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::xy(1, 1);

        let cutting = find_path(&store, start, end, true).unwrap();
        assert_eq!(cutting, vec![end]);
        assert_eq!(path_cost(DIAGONAL, start, &cutting), Some(14));

        let walled = find_path(&store, start, end, false).unwrap();
        assert_eq!(walled, vec![GridCoordinate::xy(0, 1), end]);
        assert_eq!(path_cost(DIAGONAL, start, &walled), Some(20));
    }

    #[test]
    fn pinched_corner_is_impassable_without_cutting() {
        let mut store = open_store(3, 3, DIAGONAL);
        block(&mut store, &[(1, 0), (0, 1)]);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::xy(1, 1);
        assert_eq!(find_path(&store, start, end, true).unwrap(), vec![end]);
        assert_eq!(find_path(&store, start, end, false).unwrap(), vec![]);
    }

    #[test]
    fn walled_off_end_has_no_path() {
        let mut store = open_store(5, 5, DIAGONAL);
        block(&mut store, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        let start = GridCoordinate::xy(0, 2);
        let end = GridCoordinate::xy(4, 2);
        assert_eq!(find_path(&store, start, end, true).unwrap(), vec![]);
        assert_eq!(find_path(&store, start, end, false).unwrap(), vec![]);
    }

    #[test]
    fn unwalkable_end_is_no_path() {
        let mut store = open_store(3, 3, DIAGONAL);
        block(&mut store, &[(2, 2)]);
        let path = find_path(&store, GridCoordinate::ZERO, GridCoordinate::xy(2, 2), true)
            .unwrap();
        assert_eq!(path, vec![]);
    }

    #[test]
    fn unwalkable_start_can_still_be_left() {
        // Only entry into a cell is gated on walkability; standing on a
        // blocked cell does not trap the searcher.
        let mut store = open_store(3, 1, CARDINAL);
        block(&mut store, &[(0, 0)]);
        let path = find_path(&store, GridCoordinate::ZERO, GridCoordinate::xy(2, 0), true)
            .unwrap();
        assert_eq!(path, vec![GridCoordinate::xy(1, 0), GridCoordinate::xy(2, 0)]);
    }

    #[test]
    fn out_of_range_endpoints_are_errors() {
        let store = open_store(3, 3, DIAGONAL);
        let size = store.size();
        let inside = GridCoordinate::xy(1, 1);

        for bad in [
            GridCoordinate::xy(3, 0),
            GridCoordinate::xy(0, -1),
            GridCoordinate::new(0, 0, 1),
        ] {
            assert_eq!(
                find_path(&store, bad, inside, true),
                Err(GridError::OutOfRange { coord: bad, size })
            );
            assert_eq!(
                find_path(&store, inside, bad, false),
                Err(GridError::OutOfRange { coord: bad, size })
            );
        }
    }

    #[test]
    fn repeated_searches_are_identical_and_leave_the_store_alone() {
        let mut store = open_store(6, 6, DIAGONAL);
        block(&mut store, &[(1, 1), (2, 2), (3, 1), (4, 4), (1, 4)]);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::xy(5, 5);

        let first = find_path(&store, start, end, false).unwrap();
        let second = find_path(&store, start, end, false).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);

        // Searches relax a snapshot, never the store itself.
        for (_, node) in &store {
            assert!(!node.is_visited());
        }
        assert_eq!(store.count_walkable(), 31);
    }

    #[test]
    fn costs_match_an_exhaustive_sweep() {
        // Rooms and a gap, awkward for a heuristic that hugs the diagonal.
        let obstacles = [
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (3, 0),
            (3, 1),
            (3, 2),
            (4, 4),
            (5, 2),
            (5, 3),
            (2, 4),
        ];
        let ends = [
            GridCoordinate::ZERO,
            GridCoordinate::xy(5, 0),
            GridCoordinate::xy(0, 5),
            GridCoordinate::xy(5, 5),
            GridCoordinate::xy(4, 2),
            GridCoordinate::xy(2, 3),
        ];
        for topology in [CARDINAL, DIAGONAL, POINTY, FLAT] {
            let mut store = open_store(6, 6, topology);
            block(&mut store, &obstacles);
            for allow in [false, true] {
                for &start in &ends {
                    for &end in &ends {
                        if start == end {
                            continue;
                        }
                        let path = find_path(&store, start, end, allow).unwrap();
                        let expected = if store.is_walkable(end) {
                            relaxation_sweep_cost(&store, start, end, allow)
                        } else {
                            None
                        };
                        match expected {
                            None => assert_eq!(path, vec![], "{topology:?} {start}->{end}"),
                            Some(cost) => {
                                assert_reaches(&store, start, end, &path);
                                assert_eq!(
                                    path_cost(topology, start, &path),
                                    Some(cost),
                                    "{topology:?} allow={allow} {start}->{end}"
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn hex_distances_span_both_parities() {
        for topology in [POINTY, FLAT] {
            let store = open_store(4, 4, topology);
            let start = GridCoordinate::ZERO;
            let end = GridCoordinate::xy(3, 3);
            let path = find_path(&store, start, end, true).unwrap();
            assert_eq!(path.len(), 5, "{topology:?}");
            assert_eq!(path_cost(topology, start, &path), Some(50));
            assert_reaches(&store, start, end, &path);
        }
    }

    #[test]
    fn hex_board_with_a_wall_detours() {
        let mut store = open_store(5, 5, POINTY);
        block(&mut store, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let start = GridCoordinate::xy(0, 2);
        let end = GridCoordinate::xy(4, 2);
        let path = find_path(&store, start, end, true).unwrap();
        assert_reaches(&store, start, end, &path);
        assert_eq!(
            path_cost(POINTY, start, &path),
            relaxation_sweep_cost(&store, start, end, true)
        );
    }

    #[test]
    fn cube_paths_ride_triple_diagonals() {
        let store = GridStore::new(&GridSettings::new(GridSize::new(3, 3, 3), Topology::Cube));
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::new(2, 2, 2);
        let path = find_path(&store, start, end, false).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path_cost(Topology::Cube, start, &path), Some(28));
    }

    #[test]
    fn cube_corner_rule_gates_every_axis() {
        let mut store = GridStore::new(&GridSettings::new(GridSize::new(2, 2, 2), Topology::Cube));
        store.set_walkable(GridCoordinate::new(1, 0, 0), false);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::new(1, 1, 1);

        let cutting = find_path(&store, start, end, true).unwrap();
        assert_eq!(cutting, vec![end]);

        // The x projection is blocked, so the triple diagonal is out; the
        // cheapest detour is a two-axis diagonal plus a straight step.
        let walled = find_path(&store, start, end, false).unwrap();
        assert_eq!(walled.len(), 2);
        assert_eq!(path_cost(Topology::Cube, start, &walled), Some(24));
    }

    #[test]
    fn layered_hex_corner_rule_checks_plane_and_pillar() {
        let settings = GridSettings::new(GridSize::new(2, 1, 2), POINTY);
        let start = GridCoordinate::ZERO;
        let end = GridCoordinate::new(1, 0, 1);

        // Open board: the combined step goes straight there.
        let store = GridStore::new(&settings);
        assert_eq!(find_path(&store, start, end, false).unwrap(), vec![end]);

        // In-plane cell blocked: climb first, then step across.
        let mut store = GridStore::new(&settings);
        store.set_walkable(GridCoordinate::new(1, 0, 0), false);
        assert_eq!(find_path(&store, start, end, true).unwrap(), vec![end]);
        assert_eq!(
            find_path(&store, start, end, false).unwrap(),
            vec![GridCoordinate::new(0, 0, 1), end]
        );

        // Pillar cell blocked: step across first, then climb.
        let mut store = GridStore::new(&settings);
        store.set_walkable(GridCoordinate::new(0, 0, 1), false);
        assert_eq!(
            find_path(&store, start, end, false).unwrap(),
            vec![GridCoordinate::new(1, 0, 0), end]
        );
    }

    #[test]
    fn pure_vertical_steps_cost_straight() {
        let store = GridStore::new(&GridSettings::new(GridSize::new(1, 1, 3), POINTY));
        let path = find_path(&store, GridCoordinate::ZERO, GridCoordinate::new(0, 0, 2), false)
            .unwrap();
        assert_eq!(path, vec![GridCoordinate::new(0, 0, 1), GridCoordinate::new(0, 0, 2)]);
        assert_eq!(path_cost(POINTY, GridCoordinate::ZERO, &path), Some(20));
    }
}
