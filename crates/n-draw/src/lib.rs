// SPDX-License-Identifier: MIT
//
// n-draw — the drawing surface for n-ident.
//
// The icon generator never talks to a concrete output format. It emits
// colored batches of closed polygons and circles through the `Renderer`
// trait, and a backend decides what they become:
//
//   generator → Renderer::{begin_shape, add_polygon, add_circle, end_shape}
//             → SvgRenderer  (path data grouped by fill color)
//             → Recorder     (plain command list, for tests and tooling)
//
// Color strings cross this boundary fully resolved (`#rrggbb` or
// `#rrggbbaa`); short forms are expanded by `color::parse_color` before
// anything reaches a backend.

pub mod color;
pub mod record;
pub mod renderer;
pub mod svg;

pub use record::{DrawCommand, Recorder};
pub use renderer::{Point, Renderer};
pub use svg::{SvgRenderer, SvgWriter};
