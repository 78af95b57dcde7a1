//! **waygrid-core** — Grid pathfinding board types.
//!
//! This crate provides the foundational types used across the *waygrid*
//! ecosystem: grid coordinates and sizes, search nodes with their cost
//! sentinels, topologies (square, cube and hex move tables with the
//! corner-cutting rule), the persistent node store with its settings, and
//! the shared error type.

pub mod coord;
pub mod error;
pub mod node;
pub mod store;
pub mod topology;

pub use coord::{CoordIter, GridCoordinate, GridSize, WorldPoint};
pub use error::GridError;
pub use node::{GridNode, NO_PARENT, UNREACHABLE};
pub use store::{GridSettings, GridStore, StoreIter};
pub use topology::{CornerCells, DIAGONAL_COST, HexOrientation, STRAIGHT_COST, Step, Topology};
