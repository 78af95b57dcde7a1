//! Grid topologies: move tables, move costs and the corner-cutting rule.
//!
//! A [`Topology`] maps a coordinate to the fixed table of candidate moves
//! out of it. Tables are immutable constants selected by variant (and by
//! row/column parity for hex grids), so neighbor expansion order is the
//! same on every run.

use crate::coord::GridCoordinate;

/// Cost of a straight step: one axis on square grids, one cell in the hex
/// plane, or one vertical layer.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal (multi-axis) step on square and cube grids.
pub const DIAGONAL_COST: i32 = 14;

/// A candidate move: the coordinate delta and the cost of taking it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub delta: GridCoordinate,
    pub cost: i32,
}

const fn step(dx: i32, dy: i32, dz: i32, cost: i32) -> Step {
    Step {
        delta: GridCoordinate::new(dx, dy, dz),
        cost,
    }
}

/// Hexagonal cell orientation, which fixes the offset-coordinate scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexOrientation {
    /// Pointy-top cells in odd-r offset rows: odd rows are shoved +x.
    PointyTop,
    /// Flat-top cells in odd-q offset columns: odd columns are shoved +y.
    FlatTop,
}

/// The neighbor structure of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// 2D square cells: 4-connected, or 8-connected when `diagonals` is
    /// set.
    Square { diagonals: bool },
    /// 3D box cells, 26-connected.
    Cube,
    /// Hexagonal cells in offset coordinates: 6-connected in the plane,
    /// plus vertical and combined moves on grids with depth.
    Hex { orientation: HexOrientation },
}

// ---------------------------------------------------------------------------
// Square and cube tables
// ---------------------------------------------------------------------------

/// Cardinal square moves, clockwise from north.
const SQUARE_4: [Step; 4] = [
    step(0, -1, 0, STRAIGHT_COST),
    step(1, 0, 0, STRAIGHT_COST),
    step(0, 1, 0, STRAIGHT_COST),
    step(-1, 0, 0, STRAIGHT_COST),
];

/// All square moves, clockwise from north.
const SQUARE_8: [Step; 8] = [
    step(0, -1, 0, STRAIGHT_COST),
    step(1, -1, 0, DIAGONAL_COST),
    step(1, 0, 0, STRAIGHT_COST),
    step(1, 1, 0, DIAGONAL_COST),
    step(0, 1, 0, STRAIGHT_COST),
    step(-1, 1, 0, DIAGONAL_COST),
    step(-1, 0, 0, STRAIGHT_COST),
    step(-1, -1, 0, DIAGONAL_COST),
];

/// The 26 box moves: layer below, own layer, layer above, each row-major.
///
/// Single-axis moves cost [`STRAIGHT_COST`]; every multi-axis move costs
/// [`DIAGONAL_COST`], three-axis moves included.
const CUBE_26: [Step; 26] = cube_steps();

const fn cube_steps() -> [Step; 26] {
    let mut steps = [step(0, 0, 0, 0); 26];
    let mut i = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    let axes = (dx != 0) as i32 + (dy != 0) as i32 + (dz != 0) as i32;
                    let cost = if axes == 1 { STRAIGHT_COST } else { DIAGONAL_COST };
                    steps[i] = step(dx, dy, dz, cost);
                    i += 1;
                }
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    steps
}

// ---------------------------------------------------------------------------
// Hex tables
// ---------------------------------------------------------------------------
//
// Offset coordinates stagger alternate rows (pointy-top) or columns
// (flat-top), so the in-plane ring deltas depend on the parity of the
// node's own row or column. Ring order is clockwise: NE E SE SW W NW for
// pointy-top, N NE SE S SW NW for flat-top.

const POINTY_EVEN_RING: [Step; 6] = [
    step(0, -1, 0, STRAIGHT_COST),
    step(1, 0, 0, STRAIGHT_COST),
    step(0, 1, 0, STRAIGHT_COST),
    step(-1, 1, 0, STRAIGHT_COST),
    step(-1, 0, 0, STRAIGHT_COST),
    step(-1, -1, 0, STRAIGHT_COST),
];

const POINTY_ODD_RING: [Step; 6] = [
    step(1, -1, 0, STRAIGHT_COST),
    step(1, 0, 0, STRAIGHT_COST),
    step(1, 1, 0, STRAIGHT_COST),
    step(0, 1, 0, STRAIGHT_COST),
    step(-1, 0, 0, STRAIGHT_COST),
    step(0, -1, 0, STRAIGHT_COST),
];

const FLAT_EVEN_RING: [Step; 6] = [
    step(0, -1, 0, STRAIGHT_COST),
    step(1, -1, 0, STRAIGHT_COST),
    step(1, 0, 0, STRAIGHT_COST),
    step(0, 1, 0, STRAIGHT_COST),
    step(-1, 0, 0, STRAIGHT_COST),
    step(-1, -1, 0, STRAIGHT_COST),
];

const FLAT_ODD_RING: [Step; 6] = [
    step(0, -1, 0, STRAIGHT_COST),
    step(1, 0, 0, STRAIGHT_COST),
    step(1, 1, 0, STRAIGHT_COST),
    step(0, 1, 0, STRAIGHT_COST),
    step(-1, 1, 0, STRAIGHT_COST),
    step(-1, 0, 0, STRAIGHT_COST),
];

const HEX_POINTY_EVEN: [Step; 20] = hex_steps(POINTY_EVEN_RING);
const HEX_POINTY_ODD: [Step; 20] = hex_steps(POINTY_ODD_RING);
const HEX_FLAT_EVEN: [Step; 20] = hex_steps(FLAT_EVEN_RING);
const HEX_FLAT_ODD: [Step; 20] = hex_steps(FLAT_ODD_RING);

/// Extend a 6-step in-plane ring with layer moves: the ring itself, the
/// two pure vertical steps, then the ring combined with a layer change
/// (upward six first). A layer change adds [`STRAIGHT_COST`] on top of
/// the in-plane cost.
const fn hex_steps(ring: [Step; 6]) -> [Step; 20] {
    let mut steps = [step(0, 0, 0, 0); 20];
    let mut i = 0;
    while i < 6 {
        steps[i] = ring[i];
        i += 1;
    }
    steps[6] = step(0, 0, 1, STRAIGHT_COST);
    steps[7] = step(0, 0, -1, STRAIGHT_COST);
    let mut j = 0;
    while j < 6 {
        let d = ring[j].delta;
        let cost = ring[j].cost + STRAIGHT_COST;
        steps[8 + j] = step(d.x, d.y, 1, cost);
        steps[14 + j] = step(d.x, d.y, -1, cost);
        j += 1;
    }
    steps
}

// ---------------------------------------------------------------------------
// Topology methods
// ---------------------------------------------------------------------------

impl Topology {
    /// 8-connected square shorthand.
    pub const SQUARE_DIAGONAL: Self = Self::Square { diagonals: true };

    /// The move table out of a node at `at`.
    ///
    /// Square and cube tables are position-independent; hex tables depend
    /// on the parity of the row (pointy-top) or column (flat-top) of `at`.
    /// Deltas may leave the grid — callers range-check the destination.
    #[inline]
    pub fn steps(self, at: GridCoordinate) -> &'static [Step] {
        match self {
            Self::Square { diagonals: false } => &SQUARE_4,
            Self::Square { diagonals: true } => &SQUARE_8,
            Self::Cube => &CUBE_26,
            Self::Hex {
                orientation: HexOrientation::PointyTop,
            } => {
                if at.y & 1 == 0 {
                    &HEX_POINTY_EVEN
                } else {
                    &HEX_POINTY_ODD
                }
            }
            Self::Hex {
                orientation: HexOrientation::FlatTop,
            } => {
                if at.x & 1 == 0 {
                    &HEX_FLAT_EVEN
                } else {
                    &HEX_FLAT_ODD
                }
            }
        }
    }

    /// The cells flanking the step `delta` out of `from`.
    ///
    /// When diagonal corner cutting is disallowed, a step may only be
    /// taken if every flanking cell is in range and walkable. Straight
    /// steps and in-plane hex steps have no flanking cells.
    ///
    /// Square and cube grids flank a multi-axis step with its single-axis
    /// projections. Hex grids flank a combined in-plane + layer step with
    /// the in-plane cell on the origin layer and the cell directly above
    /// or below the origin.
    pub fn corner_cells(self, from: GridCoordinate, delta: GridCoordinate) -> CornerCells {
        let mut cells = CornerCells::NONE;
        match self {
            Self::Square { .. } | Self::Cube => {
                let axes = (delta.x != 0) as u32 + (delta.y != 0) as u32 + (delta.z != 0) as u32;
                if axes < 2 {
                    return cells;
                }
                if delta.x != 0 {
                    cells.push(from.shift(delta.x, 0, 0));
                }
                if delta.y != 0 {
                    cells.push(from.shift(0, delta.y, 0));
                }
                if delta.z != 0 {
                    cells.push(from.shift(0, 0, delta.z));
                }
            }
            Self::Hex { .. } => {
                if delta.z != 0 && (delta.x != 0 || delta.y != 0) {
                    cells.push(from.shift(delta.x, delta.y, 0));
                    cells.push(from.shift(0, 0, delta.z));
                }
            }
        }
        cells
    }
}

/// Up to three cells flanking a diagonal step. See
/// [`Topology::corner_cells`].
#[derive(Copy, Clone, Debug)]
pub struct CornerCells {
    cells: [GridCoordinate; 3],
    len: usize,
}

impl CornerCells {
    const NONE: Self = Self {
        cells: [GridCoordinate::ZERO; 3],
        len: 0,
    };

    fn push(&mut self, c: GridCoordinate) {
        self.cells[self.len] = c;
        self.len += 1;
    }

    /// The flanking cells, at most three.
    #[inline]
    pub fn as_slice(&self) -> &[GridCoordinate] {
        &self.cells[..self.len]
    }

    /// Whether the step has no flanking cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
