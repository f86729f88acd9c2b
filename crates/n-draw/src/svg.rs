// SPDX-License-Identifier: MIT
//
// SVG backend.
//
// Three pieces, from the inside out:
//
//   SvgPath     — path data (`d` attribute) for one fill color. Polygons
//                 become `M…L…Z` runs, circles become two half-arcs.
//   SvgWriter   — the document: opening `<svg>` tag, optional background
//                 `<rect>`, one `<path>` per color, closing tag.
//   SvgRenderer — the `Renderer` implementation. Batches primitives into
//                 one `SvgPath` per color (in first-use order) and hands the
//                 batches to the writer on `finish`.
//
// Every measure is rounded to one decimal before printing. Icons are small
// and the extra digits more than double the output size for no visible gain.

// Measures are rounded with separate multiply and add so output matches
// byte-for-byte across implementations; a fused multiply-add rounds once.
#![allow(clippy::suboptimal_flops)]

use std::fmt::{self, Write as _};

use crate::color::split_alpha;
use crate::renderer::{Point, Renderer};

const XMLNS: &str = "http://www.w3.org/2000/svg";

// ─── Number formatting ───────────────────────────────────────────────────────

/// Round a measure to a single decimal, truncating toward zero after the
/// half-step bias (so negatives round toward zero).
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn svg_value(value: f64) -> f64 {
    // `as i64` saturates and maps NaN to 0.
    ((value * 10.0 + 0.5) as i64) as f64 / 10.0
}

/// Display wrapper printing a rounded measure without a trailing `.0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns -0.0 into 0.0.
        write!(f, "{}", self.0 + 0.0)
    }
}

// ─── SvgPath ─────────────────────────────────────────────────────────────────

/// Path data for one fill color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgPath {
    data: String,
}

impl SvgPath {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: String::new() }
    }

    /// The accumulated `d` attribute value.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Append a closed polygon.
    pub fn add_polygon(&mut self, points: &[Point]) {
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(self.data, "{cmd}{} {}", Num(svg_value(p.x)), Num(svg_value(p.y)));
        }
        self.data.push('Z');
    }

    /// Append a circle as two half-arcs starting at the left edge.
    ///
    /// `counter_clockwise` flips the sweep flag, which turns the circle into
    /// a hole when it overlaps a clockwise path of the same color.
    pub fn add_circle(&mut self, point: Point, diameter: f64, counter_clockwise: bool) {
        let sweep = u8::from(!counter_clockwise);
        let radius = Num(svg_value(diameter / 2.0));
        let d = svg_value(diameter);

        let _ = write!(
            self.data,
            "M{} {}a{radius},{radius} 0 1,{sweep} {},0a{radius},{radius} 0 1,{sweep} {},0",
            Num(svg_value(point.x)),
            Num(svg_value(point.y + diameter / 2.0)),
            Num(d),
            Num(-d),
        );
    }
}

// ─── SvgWriter ───────────────────────────────────────────────────────────────

/// Builds the SVG document string.
#[derive(Debug, Clone)]
pub struct SvgWriter {
    icon_size: u32,
    tag: String,
}

impl SvgWriter {
    /// Start a document for a square icon of `icon_size` pixels.
    #[must_use]
    pub fn new(icon_size: u32) -> Self {
        let tag = format!(
            r#"<svg xmlns="{XMLNS}" width="{icon_size}px" height="{icon_size}px" viewBox="0 0 {icon_size} {icon_size}">"#
        );
        Self { icon_size, tag }
    }

    #[inline]
    #[must_use]
    pub const fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Fill the background. A zero opacity writes nothing.
    ///
    /// - `fill`: color in `#rrggbb` form
    /// - `opacity`: in [0.0, 1.0]
    pub fn set_background(&mut self, fill: &str, opacity: f64) {
        if opacity > 0.0 {
            let _ = write!(
                self.tag,
                r#"<rect width="100%" height="100%" fill="{fill}" opacity="{opacity:.2}"/>"#
            );
        }
    }

    /// Append a `<path>` element with the given fill and data string.
    pub fn append_path(&mut self, color: &str, data: &str) {
        let _ = write!(self.tag, r#"<path fill="{color}" d="{data}"/>"#);
    }

    /// Close the document and return it.
    #[must_use]
    pub fn into_svg(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}</svg>", self.tag)
    }
}

// ─── SvgRenderer ─────────────────────────────────────────────────────────────

/// [`Renderer`] producing an SVG document.
///
/// All primitives of one color end up in a single `<path>`, so holes punched
/// by counter-clockwise primitives work across shape groups of that color.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    writer: SvgWriter,
    /// Paths by fill color, in order of first use.
    paths: Vec<(String, SvgPath)>,
    /// Index into `paths` of the open shape.
    current: Option<usize>,
}

impl SvgRenderer {
    #[must_use]
    pub const fn new(writer: SvgWriter) -> Self {
        Self {
            writer,
            paths: Vec::new(),
            current: None,
        }
    }

    /// Renderer over a fresh [`SvgWriter`] of the given size.
    #[must_use]
    pub fn with_size(icon_size: u32) -> Self {
        Self::new(SvgWriter::new(icon_size))
    }

    /// Give back the writer. Call after [`Renderer::finish`].
    #[must_use]
    pub fn into_writer(self) -> SvgWriter {
        self.writer
    }

    fn current_path(&mut self) -> Option<&mut SvgPath> {
        let index = self.current?;
        self.paths.get_mut(index).map(|(_, path)| path)
    }
}

impl Renderer for SvgRenderer {
    fn icon_size(&self) -> u32 {
        self.writer.icon_size()
    }

    fn set_background(&mut self, color: &str) {
        match split_alpha(color) {
            Some((fill, opacity)) => self.writer.set_background(fill, opacity),
            None => log::warn!("ignoring malformed background color {color:?}"),
        }
    }

    fn begin_shape(&mut self, color: &str) {
        let index = match self.paths.iter().position(|(c, _)| c == color) {
            Some(index) => index,
            None => {
                self.paths.push((color.to_owned(), SvgPath::new()));
                self.paths.len() - 1
            }
        };
        self.current = Some(index);
    }

    fn add_polygon(&mut self, points: &[Point]) {
        match self.current_path() {
            Some(path) => path.add_polygon(points),
            None => log::warn!("polygon emitted outside of a shape, dropped"),
        }
    }

    fn add_circle(&mut self, point: Point, diameter: f64, counter_clockwise: bool) {
        match self.current_path() {
            Some(path) => path.add_circle(point, diameter, counter_clockwise),
            None => log::warn!("circle emitted outside of a shape, dropped"),
        }
    }

    fn finish(&mut self) {
        for (color, path) in &self.paths {
            self.writer.append_path(color, path.data());
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
