//! **waygrid-paths** — A* search over square and hexagonal grids.
//!
//! This crate finds cheapest paths on a [`GridStore`](waygrid_core::GridStore)
//! under any of its topologies (4-/8-connected squares, 26-connected
//! cubes, pointy- or flat-top hexes with layers):
//!
//! - [`find_path`] — single-shot search with call-owned buffers
//! - [`BatchPathfinder`] — owns its buffers and reuses them across
//!   searches, for repeated queries and worker threads
//! - [`path_cost`] — replay a returned path against the move tables
//!
//! Both searchers share one loop and return the same sequences: forward
//! order, start excluded, end included, empty for no route. Results are
//! deterministic; equal-cost ties always resolve the same way.

mod batch;
mod cost;
mod engine;
mod heuristic;
mod sequential;

pub use batch::BatchPathfinder;
pub use cost::path_cost;
pub use heuristic::{estimate, hex_distance, octile};
pub use sequential::find_path;
