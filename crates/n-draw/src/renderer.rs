// SPDX-License-Identifier: MIT
//
// Renderer trait — the sink every icon is drawn into.
//
// A renderer receives primitives already transformed into canvas space.
// Rotation and translation happen before emission, so a backend only has
// to append geometry; it never manages a transform stack of its own.
//
// Winding carries meaning: polygons arrive clockwise, and a primitive that
// should punch a hole out of its shape arrives counter-clockwise (reversed
// polygon points, or `counter_clockwise = true` for circles). Backends that
// fill with the nonzero rule get holes for free.

// ─── Point ───────────────────────────────────────────────────────────────────

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

/// Drawing surface interface consumed by the icon generator.
///
/// The generator calls these methods in a fixed order for each icon:
///
/// 1. [`set_background`](Renderer::set_background): at most once, first
/// 2. [`begin_shape`](Renderer::begin_shape): once per shape group
/// 3. [`add_polygon`](Renderer::add_polygon) /
///    [`add_circle`](Renderer::add_circle): any number of times
/// 4. [`end_shape`](Renderer::end_shape): closes the group
/// 5. [`finish`](Renderer::finish): once, after the last group
///
/// Only the primitive sinks, [`begin_shape`](Renderer::begin_shape) and
/// [`icon_size`](Renderer::icon_size) are required.
pub trait Renderer {
    /// Icon width and height, in renderer units.
    fn icon_size(&self) -> u32;

    /// Fill the whole icon with a color in `#rrggbbaa` form.
    fn set_background(&mut self, _color: &str) {}

    /// Start a batch of primitives sharing one fill color (`#rrggbb[aa]`).
    fn begin_shape(&mut self, color: &str);

    /// Close the batch opened by the last [`begin_shape`](Renderer::begin_shape).
    fn end_shape(&mut self) {}

    /// Append a closed polygon. Points are in drawing order.
    fn add_polygon(&mut self, points: &[Point]);

    /// Append a circle given the top-left corner of its bounding box.
    fn add_circle(&mut self, point: Point, diameter: f64, counter_clockwise: bool);

    /// The icon is complete; flush or finalize any batched output.
    fn finish(&mut self) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn icon_size(&self) -> u32 {
        (**self).icon_size()
    }

    fn set_background(&mut self, color: &str) {
        (**self).set_background(color);
    }

    fn begin_shape(&mut self, color: &str) {
        (**self).begin_shape(color);
    }

    fn end_shape(&mut self) {
        (**self).end_shape();
    }

    fn add_polygon(&mut self, points: &[Point]) {
        (**self).add_polygon(points);
    }

    fn add_circle(&mut self, point: Point, diameter: f64, counter_clockwise: bool) {
        (**self).add_circle(point, diameter, counter_clockwise);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
