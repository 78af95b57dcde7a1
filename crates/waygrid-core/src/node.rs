//! Per-cell search records: [`GridNode`] and its sentinels.

use crate::coord::GridCoordinate;

/// Sentinel g-cost of a node no search has reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel came-from index of a node with no predecessor: the start node,
/// or any node the search has not relaxed.
pub const NO_PARENT: usize = usize::MAX;

/// One cell's state during a path search.
///
/// Walkability and position are plain data. The cost fields are private:
/// `f = g + h` must hold after every mutation and the came-from field may
/// only be [`NO_PARENT`] on unvisited and start nodes, so
/// [`relax`](Self::relax) is the sole way to write them.
///
/// Nodes live for a single search. The store builds a fresh buffer of them
/// per call (walkability copied, costs at sentinels) and the buffer is
/// dropped or recycled once the path has been read out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridNode {
    /// Whether the cell can be entered. Mutable between searches via the
    /// store; never changed by a search.
    pub is_walkable: bool,
    /// The cell's own coordinate, denormalized for path reconstruction.
    pub position: GridCoordinate,
    g_cost: i32,
    h_cost: i32,
    f_cost: i32,
    came_from: usize,
}

impl GridNode {
    /// A fresh, unvisited node: `g = UNREACHABLE`, `h = 0`, `f = 0`, no
    /// predecessor.
    #[inline]
    pub const fn new(position: GridCoordinate, is_walkable: bool) -> Self {
        Self {
            is_walkable,
            position,
            g_cost: UNREACHABLE,
            h_cost: 0,
            f_cost: 0,
            came_from: NO_PARENT,
        }
    }

    /// Accumulated cost from the start node, [`UNREACHABLE`] until visited.
    #[inline]
    pub const fn g_cost(self) -> i32 {
        self.g_cost
    }

    /// Heuristic estimate to the end node, computed when first relaxed.
    #[inline]
    pub const fn h_cost(self) -> i32 {
        self.h_cost
    }

    /// Open-set priority: `g + h`.
    #[inline]
    pub const fn f_cost(self) -> i32 {
        self.f_cost
    }

    /// Flat index of the predecessor on the best known path, or
    /// [`NO_PARENT`].
    #[inline]
    pub const fn came_from(self) -> usize {
        self.came_from
    }

    /// Whether a search has reached this node.
    #[inline]
    pub const fn is_visited(self) -> bool {
        self.g_cost != UNREACHABLE
    }

    /// Record a better path into this node: set `g` and `h`, recompute
    /// `f`, and point back at the predecessor.
    #[inline]
    pub fn relax(&mut self, g_cost: i32, h_cost: i32, came_from: usize) {
        self.g_cost = g_cost;
        self.h_cost = h_cost;
        self.f_cost = g_cost + h_cost;
        self.came_from = came_from;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_is_unvisited() {
        let n = GridNode::new(GridCoordinate::xy(2, 3), true);
        assert!(n.is_walkable);
        assert!(!n.is_visited());
        assert_eq!(n.g_cost(), UNREACHABLE);
        assert_eq!(n.h_cost(), 0);
        assert_eq!(n.f_cost(), 0);
        assert_eq!(n.came_from(), NO_PARENT);
    }

    #[test]
    fn relax_keeps_f_consistent() {
        let mut n = GridNode::new(GridCoordinate::ZERO, true);
        n.relax(24, 30, 7);
        assert!(n.is_visited());
        assert_eq!(n.g_cost(), 24);
        assert_eq!(n.h_cost(), 30);
        assert_eq!(n.f_cost(), 54);
        assert_eq!(n.came_from(), 7);

        n.relax(14, 30, 3);
        assert_eq!(n.f_cost(), 44);
        assert_eq!(n.came_from(), 3);
    }
}
