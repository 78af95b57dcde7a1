//! Persistent grid storage and its configuration.
//!
//! A [`GridStore`] owns one [`GridNode`] per cell in row-major layout and
//! answers bounds, walkability and neighborhood queries. Searches never
//! mutate a store: they copy it with [`GridStore::snapshot_into`] and relax
//! the copy.

use crate::coord::{CoordIter, GridCoordinate, GridSize, WorldPoint};
use crate::node::GridNode;
use crate::topology::{HexOrientation, Topology};

/// Center-to-center spacing across staggered hex rows, in cell sizes.
/// Equals `sqrt(3) / 2`, so all six hex neighbors sit one cell size away.
const HEX_ROW_SPACING: f32 = 0.866_025_4;

/// Configuration for a [`GridStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSettings {
    /// Grid bounds.
    pub size: GridSize,
    /// Neighbor structure of the grid.
    pub topology: Topology,
    /// World-space distance between adjacent cell centers. Must be
    /// positive.
    pub cell_size: f32,
    /// World-space position of the center of cell `(0, 0, 0)`.
    pub origin: WorldPoint,
}

impl GridSettings {
    /// Settings with unit cell size and a world origin at zero.
    pub const fn new(size: GridSize, topology: Topology) -> Self {
        Self {
            size,
            topology,
            cell_size: 1.0,
            origin: WorldPoint::ZERO,
        }
    }

    #[must_use]
    pub const fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    #[must_use]
    pub const fn with_origin(mut self, origin: WorldPoint) -> Self {
        self.origin = origin;
        self
    }
}

/// The persistent node buffer of a board.
#[derive(Debug, Clone)]
pub struct GridStore {
    settings: GridSettings,
    nodes: Vec<GridNode>,
}

impl GridStore {
    /// Create a store with every cell walkable.
    pub fn new(settings: &GridSettings) -> Self {
        let nodes = settings.size.iter().map(|c| GridNode::new(c, true)).collect();
        Self {
            settings: *settings,
            nodes,
        }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.settings.size
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.settings.topology
    }

    #[inline]
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Number of cells in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `coord` lies inside the grid bounds.
    #[inline]
    pub fn is_in_range(&self, coord: GridCoordinate) -> bool {
        self.settings.size.contains(coord)
    }

    /// Whether `coord` is in range and holds a walkable cell.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoordinate) -> bool {
        match self.settings.size.index_of(coord) {
            Some(idx) => self.nodes[idx].is_walkable,
            None => false,
        }
    }

    /// The node at `coord`, or `None` if out of range.
    pub fn node(&self, coord: GridCoordinate) -> Option<GridNode> {
        let idx = self.settings.size.index_of(coord)?;
        Some(self.nodes[idx])
    }

    /// Replace the node at `coord`. Does nothing if out of range.
    ///
    /// The stored node's position is normalized to the addressed cell, so
    /// a node copied from another cell cannot desynchronize the buffer.
    pub fn set(&mut self, coord: GridCoordinate, mut node: GridNode) {
        if let Some(idx) = self.settings.size.index_of(coord) {
            node.position = coord;
            self.nodes[idx] = node;
        }
    }

    /// Set the walkability flag at `coord`. Does nothing if out of range.
    pub fn set_walkable(&mut self, coord: GridCoordinate, walkable: bool) {
        if let Some(idx) = self.settings.size.index_of(coord) {
            self.nodes[idx].is_walkable = walkable;
        }
    }

    /// Set every cell's walkability flag.
    pub fn fill_walkable(&mut self, walkable: bool) {
        for node in &mut self.nodes {
            node.is_walkable = walkable;
        }
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_walkable).count()
    }

    /// Iterate over `(GridCoordinate, GridNode)` pairs in row-major order.
    pub fn iter(&self) -> StoreIter<'_> {
        StoreIter {
            coords: self.settings.size.iter(),
            nodes: self.nodes.iter(),
        }
    }

    /// Fill `buf` with the in-range neighbors of `coord` under the
    /// store's topology, in table order.
    ///
    /// Walkability is not consulted. `buf` is cleared first; an
    /// out-of-range `coord` leaves it empty.
    pub fn neighbors(&self, coord: GridCoordinate, buf: &mut Vec<GridCoordinate>) {
        buf.clear();
        if !self.is_in_range(coord) {
            return;
        }
        for step in self.settings.topology.steps(coord) {
            let next = coord + step.delta;
            if self.is_in_range(next) {
                buf.push(next);
            }
        }
    }

    /// World-space center of the cell at `coord`, or `None` if out of
    /// range.
    ///
    /// Square and cube cells sit on an axis-aligned lattice spaced
    /// `cell_size` apart. Hex cells are staggered: alternate rows
    /// (pointy-top) or columns (flat-top) are shoved half a cell, with
    /// `sqrt(3) / 2` spacing across rows, so all six neighbors of a cell
    /// are `cell_size` away. Layers stack along world z.
    pub fn grid_to_world(&self, coord: GridCoordinate) -> Option<WorldPoint> {
        if !self.is_in_range(coord) {
            return None;
        }
        let GridSettings {
            cell_size, origin, ..
        } = self.settings;
        let (x, y) = match self.settings.topology {
            Topology::Square { .. } | Topology::Cube => (coord.x as f32, coord.y as f32),
            Topology::Hex {
                orientation: HexOrientation::PointyTop,
            } => (
                coord.x as f32 + stagger(coord.y),
                coord.y as f32 * HEX_ROW_SPACING,
            ),
            Topology::Hex {
                orientation: HexOrientation::FlatTop,
            } => (
                coord.x as f32 * HEX_ROW_SPACING,
                coord.y as f32 + stagger(coord.x),
            ),
        };
        Some(WorldPoint::new(
            origin.x + cell_size * x,
            origin.y + cell_size * y,
            origin.z + cell_size * coord.z as f32,
        ))
    }

    /// The cell whose center is nearest to `point`, or `None` if that
    /// cell is out of range.
    ///
    /// Inverts [`grid_to_world`](Self::grid_to_world) by rounding the
    /// staggered row (or column) first and the remaining axes against it.
    /// Exact on cell centers; between centers it picks by rounding, which
    /// is close enough for coarse queries.
    pub fn world_to_grid(&self, point: WorldPoint) -> Option<GridCoordinate> {
        let GridSettings {
            cell_size, origin, ..
        } = self.settings;
        let dx = (point.x - origin.x) / cell_size;
        let dy = (point.y - origin.y) / cell_size;
        let dz = (point.z - origin.z) / cell_size;
        let (x, y) = match self.settings.topology {
            Topology::Square { .. } | Topology::Cube => (dx.round() as i32, dy.round() as i32),
            Topology::Hex {
                orientation: HexOrientation::PointyTop,
            } => {
                let y = (dy / HEX_ROW_SPACING).round() as i32;
                ((dx - stagger(y)).round() as i32, y)
            }
            Topology::Hex {
                orientation: HexOrientation::FlatTop,
            } => {
                let x = (dx / HEX_ROW_SPACING).round() as i32;
                (x, (dy - stagger(x)).round() as i32)
            }
        };
        let coord = GridCoordinate::new(x, y, dz.round() as i32);
        self.is_in_range(coord).then_some(coord)
    }

    /// Copy the store's cells into `buf` as fresh search nodes.
    ///
    /// Walkability and positions carry over; costs and predecessor links
    /// are reset, so `buf` is ready for a new search. `buf` is cleared
    /// first and reuses its capacity.
    pub fn snapshot_into(&self, buf: &mut Vec<GridNode>) {
        buf.clear();
        buf.extend(
            self.nodes
                .iter()
                .map(|n| GridNode::new(n.position, n.is_walkable)),
        );
    }
}

/// Iterator over `(GridCoordinate, GridNode)` pairs of a store, row-major.
pub struct StoreIter<'a> {
    coords: CoordIter,
    nodes: std::slice::Iter<'a, GridNode>,
}

impl Iterator for StoreIter<'_> {
    type Item = (GridCoordinate, GridNode);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.coords.next()?, *self.nodes.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl ExactSizeIterator for StoreIter<'_> {}

impl<'a> IntoIterator for &'a GridStore {
    type Item = (GridCoordinate, GridNode);
    type IntoIter = StoreIter<'a>;

    fn into_iter(self) -> StoreIter<'a> {
        self.iter()
    }
}

#[inline]
fn stagger(i: i32) -> f32 {
    if i & 1 == 0 { 0.0 } else { 0.5 }
}
