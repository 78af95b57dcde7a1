//! Geometry primitives: [`GridCoordinate`], [`GridSize`] and [`WorldPoint`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// GridCoordinate
// ---------------------------------------------------------------------------

/// An integer cell coordinate. `z` is 0 everywhere on flat (2D) grids.
///
/// Coordinates compare by exact component equality and hash as map keys.
/// There is deliberately no `Ord`: cells on a board have no meaningful
/// total order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoordinate {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a coordinate on the z = 0 plane.
    #[inline]
    pub const fn xy(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Return a coordinate shifted by (dx, dy, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for GridCoordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GridCoordinate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Grid bounds: `width × height × depth` cells, with depth 1 on flat grids.
///
/// A coordinate is in range when it lies in the half-open box
/// `[0, width) × [0, height) × [0, depth)`. Cells are addressed by a flat
/// index `x + y*width + z*width*height` into a one-dimensional buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl GridSize {
    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32, depth: i32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Create a flat (depth 1) size.
    #[inline]
    pub const fn flat(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            depth: 1,
        }
    }

    /// Total number of cells. Zero if any dimension is not positive.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width as usize) * (self.height as usize) * (self.depth as usize)
    }

    /// Whether the grid holds no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0 || self.depth <= 0
    }

    /// Whether `c` lies inside the half-open bounds.
    #[inline]
    pub fn contains(self, c: GridCoordinate) -> bool {
        c.x >= 0
            && c.x < self.width
            && c.y >= 0
            && c.y < self.height
            && c.z >= 0
            && c.z < self.depth
    }

    /// Convert a coordinate to its flat index, or `None` if out of range.
    #[inline]
    pub fn index_of(self, c: GridCoordinate) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let (w, h) = (self.width as usize, self.height as usize);
        Some(c.x as usize + c.y as usize * w + c.z as usize * w * h)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// The index must be below [`len`](Self::len).
    #[inline]
    pub fn coord_at(self, idx: usize) -> GridCoordinate {
        let (w, h) = (self.width as usize, self.height as usize);
        GridCoordinate::new((idx % w) as i32, ((idx / w) % h) as i32, (idx / (w * h)) as i32)
    }

    /// Iterate every coordinate in flat-index order (x fastest, then y,
    /// then z).
    #[inline]
    pub fn iter(self) -> CoordIter {
        CoordIter {
            size: self,
            idx: 0,
            len: self.len(),
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

impl IntoIterator for GridSize {
    type Item = GridCoordinate;
    type IntoIter = CoordIter;
    #[inline]
    fn into_iter(self) -> CoordIter {
        self.iter()
    }
}

/// Flat-index-order iterator over the coordinates of a [`GridSize`].
#[derive(Clone, Debug)]
pub struct CoordIter {
    size: GridSize,
    idx: usize,
    len: usize,
}

impl Iterator for CoordIter {
    type Item = GridCoordinate;

    #[inline]
    fn next(&mut self) -> Option<GridCoordinate> {
        if self.idx >= self.len {
            return None;
        }
        let c = self.size.coord_at(self.idx);
        self.idx += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CoordIter {}

// ---------------------------------------------------------------------------
// WorldPoint
// ---------------------------------------------------------------------------

/// A position in continuous world space, used by grid↔world conversions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new world point.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
