//! Admissible distance estimates for the search.

use waygrid_core::{DIAGONAL_COST, GridCoordinate, HexOrientation, STRAIGHT_COST, Topology};

/// Octile estimate for square and cube grids under the 10/14 cost model.
///
/// With sorted absolute deltas `a >= b >= c`, the unobstructed cost is
/// `10*a + 4*b`: the largest delta paces the path, the middle delta rides
/// in diagonal moves at 4 extra apiece, and the smallest delta rides in
/// multi-axis moves for free (every multi-axis move costs a flat 14).
/// Exact on an open grid, so never an overestimate on an obstructed one.
#[inline]
pub fn octile(a: GridCoordinate, b: GridCoordinate) -> i32 {
    let mut d = [(a.x - b.x).abs(), (a.y - b.y).abs(), (a.z - b.z).abs()];
    d.sort_unstable();
    STRAIGHT_COST * d[2] + (DIAGONAL_COST - STRAIGHT_COST) * d[1]
}

/// Number of hex steps between two cells, layers ignored.
///
/// Offset coordinates convert to cube coordinates per the orientation;
/// the step count is half the L1 norm of the cube delta.
#[inline]
pub fn hex_distance(orientation: HexOrientation, a: GridCoordinate, b: GridCoordinate) -> i32 {
    let (aq, ar) = offset_to_cube(orientation, a);
    let (bq, br) = offset_to_cube(orientation, b);
    let dq = (aq - bq).abs();
    let dr = (ar - br).abs();
    let ds = ((-aq - ar) - (-bq - br)).abs();
    (dq + dr + ds) / 2
}

/// Odd-r rows (pointy-top) and odd-q columns (flat-top) unstagger into
/// axial `(q, r)`; the implicit third cube axis is `-q - r`.
fn offset_to_cube(orientation: HexOrientation, c: GridCoordinate) -> (i32, i32) {
    match orientation {
        HexOrientation::PointyTop => (c.x - (c.y - (c.y & 1)) / 2, c.y),
        HexOrientation::FlatTop => (c.x, c.y - (c.x - (c.x & 1)) / 2),
    }
}

/// Admissible cost estimate from `from` to `to` under `topology`.
///
/// Hex grids price the in-plane step count and the layer delta at
/// [`STRAIGHT_COST`] each; a combined step pays both at once, so the sum
/// stays admissible on layered boards.
#[inline]
pub fn estimate(topology: Topology, from: GridCoordinate, to: GridCoordinate) -> i32 {
    match topology {
        Topology::Square { .. } | Topology::Cube => octile(from, to),
        Topology::Hex { orientation } => {
            STRAIGHT_COST * hex_distance(orientation, from, to)
                + STRAIGHT_COST * (from.z - to.z).abs()
        }
    }
}
