//! The search loop shared by both entry points.
//!
//! Both public pathfinders run the same loop over the same buffer shape;
//! they differ only in who owns the buffers. Keeping one loop here keeps
//! their outputs identical by construction.

use waygrid_core::{GridCoordinate, GridError, GridNode, GridSize, GridStore, NO_PARENT};

use crate::heuristic;

/// Node, open-list, closed-flag and output buffers for one search.
///
/// The open list is an insertion-ordered `Vec` of flat indices; membership
/// is a linear scan and the lowest-f pick is a linear scan with strict
/// `<`, so equal-f ties always go to the earliest-inserted candidate.
/// That pick order is part of the output contract, not an accident.
pub(crate) struct SearchBuffers {
    pub(crate) nodes: Vec<GridNode>,
    pub(crate) open: Vec<usize>,
    pub(crate) closed: Vec<bool>,
    pub(crate) path: Vec<GridCoordinate>,
}

impl SearchBuffers {
    pub(crate) fn with_capacity(size: GridSize) -> Self {
        let len = size.len();
        Self {
            nodes: Vec::with_capacity(len),
            open: Vec::with_capacity(len),
            closed: Vec::with_capacity(len),
            path: Vec::with_capacity(len),
        }
    }
}

/// Run one A* search, leaving the result in `buffers.path`.
///
/// The path runs from the cell after `start` through `end` inclusive; it
/// is left empty when `start == end`, when `end` is unwalkable, and when
/// no route exists. Out-of-range endpoints fail before any buffer is
/// touched.
pub(crate) fn search(
    store: &GridStore,
    start: GridCoordinate,
    end: GridCoordinate,
    allow_corner_cutting: bool,
    buffers: &mut SearchBuffers,
) -> Result<(), GridError> {
    let size = store.size();
    let start_idx = size
        .index_of(start)
        .ok_or(GridError::OutOfRange { coord: start, size })?;
    let end_idx = size
        .index_of(end)
        .ok_or(GridError::OutOfRange { coord: end, size })?;

    buffers.path.clear();
    if start_idx == end_idx || !store.is_walkable(end) {
        return Ok(());
    }

    let topology = store.topology();
    store.snapshot_into(&mut buffers.nodes);
    buffers.open.clear();
    buffers.closed.clear();
    buffers.closed.resize(store.len(), false);
    let SearchBuffers {
        nodes,
        open,
        closed,
        path,
    } = buffers;

    nodes[start_idx].relax(0, heuristic::estimate(topology, start, end), NO_PARENT);
    open.push(start_idx);

    let found = 'search: loop {
        let Some(pos) = lowest_f(open, nodes) else {
            // Open list exhausted: the end is cut off.
            break 'search false;
        };
        let current = open.remove(pos);
        if current == end_idx {
            break 'search true;
        }
        closed[current] = true;

        let from = nodes[current].position;
        let current_g = nodes[current].g_cost();

        for step in topology.steps(from) {
            let next = from + step.delta;
            let Some(ni) = size.index_of(next) else {
                continue;
            };
            if closed[ni] || !nodes[ni].is_walkable {
                continue;
            }
            if !allow_corner_cutting
                && topology
                    .corner_cells(from, step.delta)
                    .as_slice()
                    .iter()
                    .any(|&c| !store.is_walkable(c))
            {
                continue;
            }

            let tentative = current_g + step.cost;
            let node = &mut nodes[ni];
            if tentative < node.g_cost() {
                // h is computed once, the first time a node is reached.
                let h = if node.is_visited() {
                    node.h_cost()
                } else {
                    heuristic::estimate(topology, next, end)
                };
                node.relax(tentative, h, current);
                if !open.contains(&ni) {
                    open.push(ni);
                }
            }
        }
    };

    if found {
        // Walk predecessor links back from the end; the start node has no
        // predecessor and stays out of the result.
        let mut ci = end_idx;
        while ci != start_idx {
            path.push(nodes[ci].position);
            ci = nodes[ci].came_from();
        }
        path.reverse();
    }
    Ok(())
}

/// Position in `open` of the lowest-f entry, earliest entry on ties.
fn lowest_f(open: &[usize], nodes: &[GridNode]) -> Option<usize> {
    let mut best_pos = None;
    let mut best_f = i32::MAX;
    for (pos, &idx) in open.iter().enumerate() {
        let f = nodes[idx].f_cost();
        if f < best_f {
            best_f = f;
            best_pos = Some(pos);
        }
    }
    best_pos
}
