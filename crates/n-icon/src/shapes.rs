//! The shape catalog.
//!
//! Every shape draws into one cell of side `cell`, in cell-local
//! coordinates; the caller has already pointed the [`Graphics`] transform
//! at the target cell. Outer shapes fill the 12 ring positions, center
//! shapes the inner 2×2 block.
//!
//! Geometry here is part of each icon's identity. Constants, truncation
//! points and the small-cell branches must not change.

use std::fmt::Debug;

use n_draw::Renderer;

use crate::graphics::Graphics;
use crate::num::trunc;

/// Something the generator can place in a cell.
pub trait Shape: Copy + Debug {
    /// Draw into the current cell. `position` is the index of the cell
    /// within its group.
    fn draw<R: Renderer + ?Sized>(self, g: &mut Graphics<'_, R>, cell: f64, position: usize);
}

// ---------------------------------------------------------------------------
// OuterShape
// ---------------------------------------------------------------------------

/// Shapes for the side and corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterShape {
    /// Lower-left half of the cell, split along the diagonal.
    Diagonal,
    /// Lower-left half of the bottom half of the cell.
    LowTriangle,
    Rhombus,
    /// Circle inset by a sixth of the cell on every side.
    Circle,
}

impl OuterShape {
    pub const COUNT: u32 = 4;

    /// Variant for a hash nibble; wraps modulo [`Self::COUNT`].
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => Self::Diagonal,
            1 => Self::LowTriangle,
            2 => Self::Rhombus,
            _ => Self::Circle,
        }
    }
}

impl Shape for OuterShape {
    fn draw<R: Renderer + ?Sized>(self, g: &mut Graphics<'_, R>, cell: f64, _position: usize) {
        match self {
            Self::Diagonal => g.add_triangle(0.0, 0.0, cell, cell, 0, false),
            Self::LowTriangle => g.add_triangle(0.0, cell / 2.0, cell, cell / 2.0, 0, false),
            Self::Rhombus => g.add_rhombus(0.0, 0.0, cell, cell, false),
            Self::Circle => {
                let m = cell / 6.0;
                g.add_circle(m, m, cell - 2.0 * m, false);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CenterShape
// ---------------------------------------------------------------------------

/// Shapes for the four center positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterShape {
    /// Full cell with the bottom-right corner clipped.
    ClippedCorner,
    /// Tall triangle against the right edge.
    EdgeTriangle,
    /// Square pushed toward the bottom-right.
    OffsetSquare,
    /// Square with a border on every side.
    InsetSquare,
    /// Small circle near the bottom-right.
    SmallCircle,
    /// Full cell with a triangle cut out.
    TriangleHole,
    /// Full cell with a notch cut into the bottom-right.
    Notch,
    /// Triangle in the bottom-right quarter.
    QuarterTriangle,
    /// Full cell minus the bottom-right corner triangle.
    Stair,
    /// Full cell with a square cut out.
    SquareHole,
    /// Full cell with a circle cut out.
    CircleHole,
    /// Drawn the same as [`Self::QuarterTriangle`]; kept distinct so that
    /// nibble values map one-to-one onto variants.
    QuarterTriangleAlt,
    /// Full cell with a rhombus cut out.
    RhombusHole,
    /// One large circle spanning the center block, drawn once per group.
    Accent,
}

impl CenterShape {
    pub const COUNT: u32 = 14;

    /// Variant for a hash nibble; wraps modulo [`Self::COUNT`].
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => Self::ClippedCorner,
            1 => Self::EdgeTriangle,
            2 => Self::OffsetSquare,
            3 => Self::InsetSquare,
            4 => Self::SmallCircle,
            5 => Self::TriangleHole,
            6 => Self::Notch,
            7 => Self::QuarterTriangle,
            8 => Self::Stair,
            9 => Self::SquareHole,
            10 => Self::CircleHole,
            11 => Self::QuarterTriangleAlt,
            12 => Self::RhombusHole,
            _ => Self::Accent,
        }
    }
}

impl Shape for CenterShape {
    fn draw<R: Renderer + ?Sized>(self, g: &mut Graphics<'_, R>, cell: f64, position: usize) {
        match self {
            Self::ClippedCorner => {
                let k = cell * 0.42;
                g.add_polygon(
                    &[
                        (0.0, 0.0),
                        (cell, 0.0),
                        (cell, cell - k * 2.0),
                        (cell - k, cell),
                        (0.0, cell),
                    ],
                    false,
                );
            }
            Self::EdgeTriangle => {
                let w = trunc(cell * 0.5);
                let h = trunc(cell * 0.8);
                g.add_triangle(cell - w, 0.0, w, h, 2, false);
            }
            Self::OffsetSquare => {
                let w = trunc(cell / 3.0);
                g.add_rectangle(w, w, cell - w, cell - w, false);
            }
            Self::InsetSquare => {
                // Small cells keep at least a one-unit border; integer
                // rounding would otherwise erase it.
                let inner = cell * 0.1;
                let outer = if cell < 6.0 {
                    1.0
                } else if cell < 8.0 {
                    2.0
                } else {
                    trunc(cell * 0.25)
                };
                let inner = if inner > 1.0 {
                    trunc(inner)
                } else if inner > 0.5 {
                    1.0
                } else {
                    inner
                };
                let side = cell - inner - outer;
                g.add_rectangle(outer, outer, side, side, false);
            }
            Self::SmallCircle => {
                let m = trunc(cell * 0.15);
                let w = trunc(cell * 0.5);
                g.add_circle(cell - w - m, cell - w - m, w, false);
            }
            Self::TriangleHole => {
                let inner = cell * 0.1;
                let mut outer = inner * 4.0;
                if outer > 3.0 {
                    outer = trunc(outer);
                }
                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_polygon(
                    &[
                        (outer, outer),
                        (cell - inner, outer),
                        (outer + (cell - outer - inner) / 2.0, cell - inner),
                    ],
                    true,
                );
            }
            Self::Notch => g.add_polygon(
                &[
                    (0.0, 0.0),
                    (cell, 0.0),
                    (cell, cell * 0.7),
                    (cell * 0.4, cell * 0.4),
                    (cell * 0.7, cell),
                    (0.0, cell),
                ],
                false,
            ),
            Self::QuarterTriangle | Self::QuarterTriangleAlt => {
                let half = cell / 2.0;
                g.add_triangle(half, half, half, half, 3, false);
            }
            Self::Stair => {
                let half = cell / 2.0;
                g.add_rectangle(0.0, 0.0, cell, half, false);
                g.add_rectangle(0.0, half, half, half, false);
                g.add_triangle(half, half, half, half, 1, false);
            }
            Self::SquareHole => {
                let inner = cell * 0.14;
                let outer = if cell < 4.0 {
                    1.0
                } else if cell < 6.0 {
                    2.0
                } else {
                    trunc(cell * 0.35)
                };
                let inner = if cell < 8.0 { inner } else { trunc(inner) };
                let side = cell - outer - inner;
                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_rectangle(outer, outer, side, side, true);
            }
            Self::CircleHole => {
                let inner = cell * 0.12;
                let outer = inner * 3.0;
                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_circle(outer, outer, cell - inner - outer, true);
            }
            Self::RhombusHole => {
                let m = cell * 0.25;
                g.add_rectangle(0.0, 0.0, cell, cell, false);
                g.add_rhombus(m, m, cell - m, cell - m, true);
            }
            Self::Accent => {
                if position == 0 {
                    let m = cell * 0.4;
                    g.add_circle(m, m, cell * 1.2, false);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
