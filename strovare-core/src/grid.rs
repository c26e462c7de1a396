//! ## strovare-core::grid
//! **Integer cell coordinates and inclusive rectangular bounds**

use thiserror::Error;

/// Raised when grid construction sees a negative upper-right vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid grid bounds: upper-right vertex ({x}, {y}) must be non-negative")]
pub struct InvalidBounds {
    pub x: i64,
    pub y: i64,
}

/// An integer cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Target coordinates after adding `delta` scaled by `distance`.
    ///
    /// Widened to `i128` so a target just past the numeric edge of the
    /// coordinate range stays exact for bounds checks and diagnostics
    /// instead of wrapping.
    #[inline]
    pub const fn translated(self, delta: (i64, i64), distance: i64) -> (i128, i128) {
        (
            self.x as i128 + delta.0 as i128 * distance as i128,
            self.y as i128 + delta.1 as i128 * distance as i128,
        )
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive rectangular bounds from the origin to an upper-right vertex.
///
/// A `(0, 0)` vertex is a valid single-cell grid; negative vertices are
/// rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    upper_right: Position,
}

impl Grid {
    /// Creates bounds spanning `(0, 0)..=(max_x, max_y)`.
    pub fn new(max_x: i64, max_y: i64) -> Result<Self, InvalidBounds> {
        if max_x < 0 || max_y < 0 {
            return Err(InvalidBounds { x: max_x, y: max_y });
        }
        Ok(Self {
            upper_right: Position::new(max_x, max_y),
        })
    }

    /// The declared upper-right vertex.
    #[inline]
    pub const fn upper_right(&self) -> Position {
        self.upper_right
    }

    /// Whether `position` lies inside the bounds, edges included.
    #[inline]
    pub const fn contains(&self, position: Position) -> bool {
        self.contains_target(position.x as i128, position.y as i128)
    }

    /// Containment for widened target coordinates from [`Position::translated`],
    /// edges included.
    #[inline]
    pub const fn contains_target(&self, x: i128, y: i128) -> bool {
        x >= 0 && y >= 0 && x <= self.upper_right.x as i128 && y <= self.upper_right.y as i128
    }
}
