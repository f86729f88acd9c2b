//! Per-cell translate + quarter-turn rotation.
//!
//! Shapes are described in cell-local coordinates (origin at the cell's top
//! left, extent `size`). A [`Transform`] maps them into canvas space for one
//! grid cell, rotating clockwise by 0, 90, 180 or 270 degrees about the
//! cell's square.
//!
//! Rotation is applied to each point before it reaches the renderer rather
//! than by a canvas-level transform. Some backends rotate hole paths
//! incorrectly at large sizes; pre-rotated coordinates sidestep that.

use n_draw::Point;

/// Translation and rotation for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Left edge of the cell.
    x: f64,
    /// Top edge of the cell.
    y: f64,
    /// Cell width and height.
    size: f64,
    /// Clockwise quarter turns: 0, 1, 2 or 3. Anything else is treated as 0.
    rotation: u32,
}

impl Transform {
    /// The no-op transform used before any cell is established.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 0);

    #[must_use]
    pub const fn new(x: f64, y: f64, size: f64, rotation: u32) -> Self {
        Self { x, y, size, rotation }
    }

    #[inline]
    #[must_use]
    pub const fn rotation(&self) -> u32 {
        self.rotation
    }

    /// Map a cell-local point to canvas space.
    #[must_use]
    pub fn point(&self, x: f64, y: f64) -> Point {
        self.rect_origin(x, y, 0.0, 0.0)
    }

    /// Map the top-left corner of a `w`×`h` rectangle at local `(x, y)`.
    ///
    /// The returned point is the top-left corner of the rectangle *after*
    /// rotation, which is a different local corner for each rotation.
    #[must_use]
    pub fn rect_origin(&self, x: f64, y: f64, w: f64, h: f64) -> Point {
        let right = self.x + self.size;
        let bottom = self.y + self.size;
        match self.rotation {
            1 => Point::new(right - y - h, self.y + x),
            2 => Point::new(right - x - w, bottom - y - h),
            3 => Point::new(self.x + y, bottom - x - w),
            _ => Point::new(self.x + x, self.y + y),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
