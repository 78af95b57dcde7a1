//! Path replay and costing.

use waygrid_core::{GridCoordinate, Topology};

/// Total cost of walking `path` out of `start`, hop by hop.
///
/// Each consecutive delta must be a single move from the topology's
/// table at the cell it leaves; otherwise the path is not walkable as
/// given and the result is `None`. Walkability and bounds are the
/// store's business, not this function's. An empty path costs 0.
pub fn path_cost(
    topology: Topology,
    start: GridCoordinate,
    path: &[GridCoordinate],
) -> Option<i32> {
    let mut total = 0;
    let mut at = start;
    for &next in path {
        let delta = next - at;
        let step = topology.steps(at).iter().find(|s| s.delta == delta)?;
        total += step.cost;
        at = next;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::HexOrientation;

    #[test]
    fn sums_table_costs() {
        let topology = Topology::SQUARE_DIAGONAL;
        let path = [
            GridCoordinate::xy(1, 1),
            GridCoordinate::xy(2, 1),
            GridCoordinate::xy(3, 2),
        ];
        assert_eq!(path_cost(topology, GridCoordinate::ZERO, &path), Some(38));
        assert_eq!(path_cost(topology, GridCoordinate::ZERO, &[]), Some(0));
    }

    #[test]
    fn rejects_hops_missing_from_the_table() {
        // A knight jump is no square move.
        assert_eq!(
            path_cost(
                Topology::SQUARE_DIAGONAL,
                GridCoordinate::ZERO,
                &[GridCoordinate::xy(2, 1)],
            ),
            None
        );
        // A diagonal is legal with diagonals on, illegal with them off.
        let hop = [GridCoordinate::xy(1, 1)];
        assert_eq!(
            path_cost(Topology::SQUARE_DIAGONAL, GridCoordinate::ZERO, &hop),
            Some(14)
        );
        assert_eq!(
            path_cost(Topology::Square { diagonals: false }, GridCoordinate::ZERO, &hop),
            None
        );
    }

    #[test]
    fn respects_hex_parity_per_cell() {
        let topology = Topology::Hex {
            orientation: HexOrientation::PointyTop,
        };
        // (0, 1) -> (1, 2) is a legal odd-row step; the same delta is
        // not in the even-row table.
        assert_eq!(
            path_cost(topology, GridCoordinate::xy(0, 1), &[GridCoordinate::xy(1, 2)]),
            Some(10)
        );
        assert_eq!(
            path_cost(topology, GridCoordinate::xy(0, 0), &[GridCoordinate::xy(1, 1)]),
            None
        );
    }
}
