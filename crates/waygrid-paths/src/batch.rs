//! Reusable-buffer pathfinder for repeated and off-thread searches.

use waygrid_core::{GridCoordinate, GridError, GridSize, GridStore};

use crate::engine::{self, SearchBuffers};

/// A pathfinder that owns its search buffers.
///
/// Construction sizes the node, open-list, closed-flag and output
/// buffers for a grid; every [`find_path`](Self::find_path) call reuses
/// them, so steady-state searches allocate nothing. Handing a store
/// larger than the sizing grid is fine: the buffers grow once and stay
/// grown. Everything is released when the value drops.
///
/// One search runs at a time per value (`&mut self`), and the value can
/// be moved to a worker thread and queried there.
pub struct BatchPathfinder {
    size: GridSize,
    buffers: SearchBuffers,
}

impl BatchPathfinder {
    /// Create a pathfinder with buffers sized for `size`.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            buffers: SearchBuffers::with_capacity(size),
        }
    }

    /// The grid size the buffers are currently sized for.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Find the cheapest path from `start` to `end` on `store`.
    ///
    /// Same contract as [`find_path`](crate::find_path): forward order,
    /// start excluded, end included, empty slice for no route. The slice
    /// borrows this pathfinder's output buffer and is valid until the
    /// next call.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfRange`] if `start` or `end` lies outside the
    /// store. The previous result is clobbered only after validation.
    pub fn find_path(
        &mut self,
        store: &GridStore,
        start: GridCoordinate,
        end: GridCoordinate,
        allow_corner_cutting: bool,
    ) -> Result<&[GridCoordinate], GridError> {
        if store.len() > self.size.len() {
            log::debug!(
                "growing search buffers from {} ({} cells) to {} ({} cells)",
                self.size,
                self.size.len(),
                store.size(),
                store.len()
            );
            self.size = store.size();
        }
        engine::search(store, start, end, allow_corner_cutting, &mut self.buffers)?;
        Ok(&self.buffers.path)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BatchPathfinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.size.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BatchPathfinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = GridSize::deserialize(deserializer)?;
        Ok(BatchPathfinder::new(size))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn round_trips_as_its_sizing_grid() {
        let batch = BatchPathfinder::new(GridSize::new(7, 5, 2));
        let json = serde_json::to_string(&batch).unwrap();
        let back: BatchPathfinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), GridSize::new(7, 5, 2));
    }
}
