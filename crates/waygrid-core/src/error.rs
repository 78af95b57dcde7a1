//! Error type shared by grid stores and the search entry points.

use thiserror::Error;

use crate::coord::{GridCoordinate, GridSize};

/// Errors reported by grid operations.
///
/// An unreachable destination is not an error: searches report it as an
/// empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate fell outside the grid bounds.
    #[error("coordinate {coord} is outside the {size} grid")]
    OutOfRange {
        coord: GridCoordinate,
        size: GridSize,
    },
}
