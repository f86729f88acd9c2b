//! Cell-local drawing helpers on top of a [`Renderer`].
//!
//! Shapes call these with coordinates relative to the current cell; every
//! point goes through the active [`Transform`] before it reaches the
//! renderer. The `invert` flag emits the primitive with reversed winding so
//! it cuts a hole in whatever it overlaps within the same shape group.

use n_draw::{Point, Renderer};

use crate::transform::Transform;

/// Drawing context for one icon.
pub struct Graphics<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    transform: Transform,
}

impl<'a, R: Renderer + ?Sized> Graphics<'a, R> {
    #[must_use]
    pub const fn new(renderer: &'a mut R) -> Self {
        Self {
            renderer,
            transform: Transform::IDENTITY,
        }
    }

    /// Target a new cell.
    pub const fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Direct access to the renderer, for calls that bypass the transform
    /// (shape group boundaries, background).
    pub fn renderer_mut(&mut self) -> &mut R {
        self.renderer
    }

    /// Polygon through `points`, reversed when `invert` is set.
    pub fn add_polygon(&mut self, points: &[(f64, f64)], invert: bool) {
        let transform = self.transform;
        let map = |&(x, y): &(f64, f64)| transform.point(x, y);

        let mapped: Vec<Point> = if invert {
            points.iter().rev().map(map).collect()
        } else {
            points.iter().map(map).collect()
        };
        self.renderer.add_polygon(&mapped);
    }

    /// Circle whose bounding box has its top-left corner at `(x, y)`.
    ///
    /// Inverted circles are drawn counter-clockwise.
    pub fn add_circle(&mut self, x: f64, y: f64, size: f64, invert: bool) {
        let origin = self.transform.rect_origin(x, y, size, size);
        self.renderer.add_circle(origin, size, invert);
    }

    pub fn add_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64, invert: bool) {
        self.add_polygon(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)], invert);
    }

    /// Right triangle filling half of the `w`×`h` box.
    ///
    /// `corner` picks which box corner is left out, counting clockwise from
    /// the top-right: 0 top-right, 1 bottom-right, 2 bottom-left, 3 top-left.
    /// Values above 3 wrap.
    pub fn add_triangle(&mut self, x: f64, y: f64, w: f64, h: f64, corner: u32, invert: bool) {
        let mut points = vec![(x + w, y), (x + w, y + h), (x, y + h), (x, y)];
        points.remove((corner % 4) as usize);
        self.add_polygon(&points, invert);
    }

    /// Rhombus touching the midpoints of the box edges.
    pub fn add_rhombus(&mut self, x: f64, y: f64, w: f64, h: f64, invert: bool) {
        self.add_polygon(
            &[
                (x + w / 2.0, y),
                (x + w, y + h / 2.0),
                (x + w / 2.0, y + h),
                (x, y + h / 2.0),
            ],
            invert,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
