//! Icon generation: hash + configuration → renderer calls.
//!
//! The icon is a 4×4 grid inside a padded square:
//!
//! ```text
//!   C S S C      C = corner (4 cells, outer shape)
//!   S M M S      S = side   (8 cells, outer shape)
//!   S M M S      M = center (4 cells, center shape)
//!   C S S C
//! ```
//!
//! Each group draws one shape variant in one color. Sides and corners turn
//! the shape a quarter further at every position, which gives the ring its
//! pinwheel look; center cells are never rotated.
//!
//! Hash digits consumed:
//!
//! | digits         | meaning                         |
//! |----------------|---------------------------------|
//! | last 7         | hue                             |
//! | 8, 9, 10       | color slot for each group       |
//! | 2 / 3          | side shape / first rotation     |
//! | 4 / 5          | corner shape / first rotation   |
//! | 1              | center shape                    |

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use n_draw::{Renderer, SvgRenderer};

use crate::config::Config;
use crate::graphics::Graphics;
use crate::hash::IconHash;
use crate::num::trunc;
use crate::shapes::{CenterShape, OuterShape, Shape};
use crate::theme::Theme;
use crate::transform::Transform;

/// Largest value of the seven hue digits.
const HUE_MAX: f64 = 0xFFF_FFFF as f64;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Grid placement inside an icon, all in whole renderer units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Empty border on every side.
    pub padding: f64,
    /// Icon size minus both paddings.
    pub inner_size: f64,
    /// Side of one grid cell.
    pub cell: f64,
    /// Left edge of the grid.
    pub x: f64,
    /// Top edge of the grid.
    pub y: f64,
}

impl Layout {
    /// Place the grid in an `icon_size` square with `padding` given as a
    /// fraction of the icon size.
    ///
    /// Padding is not clamped. Up to 0.5 the cell is never negative, though
    /// `inner_size` can reach -1 on odd sizes. Above 0.5 the paddings
    /// overlap, `inner_size` and `cell` go negative and the grid is drawn
    /// mirrored around the origin, exactly as the arithmetic says.
    #[must_use]
    pub fn new(icon_size: u32, padding: f64) -> Self {
        let icon_size = f64::from(icon_size);
        let padding = trunc(0.5 + icon_size * padding);
        let inner_size = icon_size - padding * 2.0;
        let cell = trunc(inner_size / 4.0);
        let origin = trunc(padding + inner_size / 2.0 - cell * 2.0);

        Self {
            padding,
            inner_size,
            cell,
            x: origin,
            y: origin,
        }
    }

    /// Transform targeting grid cell `(col, row)`.
    #[must_use]
    pub fn cell_transform(&self, (col, row): (u8, u8), rotation: u32) -> Transform {
        Transform::new(
            self.x + f64::from(col) * self.cell,
            self.y + f64::from(row) * self.cell,
            self.cell,
            rotation,
        )
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Slot pairs that must not both appear in one icon: the two darks and the
/// two lights would wash each other out.
const CLASHING: [[usize; 2]; 2] = [
    [Theme::DARK_GRAY, Theme::DARK_COLOR],
    [Theme::LIGHT_GRAY, Theme::LIGHT_COLOR],
];

/// Theme slot for each group: sides, corners, center.
///
/// A candidate from a clashing pair falls back to [`Theme::MID_COLOR`] when
/// any member of that pair, itself included, was already picked.
#[must_use]
pub fn select_colors(hash: &IconHash) -> [usize; 3] {
    let mut picked: Vec<usize> = Vec::with_capacity(3);

    for i in 0..3 {
        let mut slot = hash.nibble(8 + i) as usize % Theme::LEN;
        let clashes = CLASHING
            .iter()
            .any(|pair| pair.contains(&slot) && pair.iter().any(|s| picked.contains(s)));
        if clashes {
            slot = Theme::MID_COLOR;
        }
        picked.push(slot);
    }

    [picked[0], picked[1], picked[2]]
}

/// Hue in [0, 1] from the last seven hash digits.
#[must_use]
pub fn hue(hash: &IconHash) -> f64 {
    f64::from(hash.hue_bits()) / HUE_MAX
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// One ring or block of cells sharing a shape and a color.
struct Group {
    name: &'static str,
    /// Index into the result of [`select_colors`].
    color: usize,
    shape_digit: usize,
    /// `None` for groups that are never rotated.
    rotation_digit: Option<usize>,
    positions: &'static [(u8, u8)],
}

const SIDES: Group = Group {
    name: "sides",
    color: 0,
    shape_digit: 2,
    rotation_digit: Some(3),
    positions: &[(1, 0), (2, 0), (2, 3), (1, 3), (0, 1), (3, 1), (3, 2), (0, 2)],
};

const CORNERS: Group = Group {
    name: "corners",
    color: 1,
    shape_digit: 4,
    rotation_digit: Some(5),
    positions: &[(0, 0), (3, 0), (3, 3), (0, 3)],
};

const CENTER: Group = Group {
    name: "center",
    color: 2,
    shape_digit: 1,
    rotation_digit: None,
    positions: &[(1, 1), (2, 1), (2, 2), (1, 2)],
};

struct Context<'g, 'r, R: Renderer + ?Sized> {
    graphics: &'g mut Graphics<'r, R>,
    hash: &'g IconHash,
    layout: Layout,
    theme: &'g Theme,
    colors: [usize; 3],
}

impl<R: Renderer + ?Sized> Context<'_, '_, R> {
    fn render_group(&mut self, group: &Group, shape: impl Shape) {
        let start = group.rotation_digit.map_or(0, |d| self.hash.nibble(d));
        let color = self.theme.color(self.colors[group.color]);

        log::trace!("{}: {shape:?} in {color}, rotation from {start}", group.name);

        self.graphics.renderer_mut().begin_shape(color);
        for (i, (&cell, turn)) in group.positions.iter().zip(start..).enumerate() {
            self.graphics.set_transform(self.layout.cell_transform(cell, turn % 4));
            shape.draw(self.graphics, self.layout.cell, i);
        }
        self.graphics.renderer_mut().end_shape();
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Draw the icon for `hash` into `renderer`.
///
/// The renderer's [`icon_size`](Renderer::icon_size) decides the scale.
/// Equal inputs always produce the same sequence of calls.
pub fn generate<R: Renderer + ?Sized>(renderer: &mut R, hash: &IconHash, config: &Config) {
    if !config.back_color.is_empty() {
        renderer.set_background(&config.back_color);
    }

    let layout = Layout::new(renderer.icon_size(), config.padding);
    let hue = hue(hash);
    let theme = Theme::build(hue, config);
    let colors = select_colors(hash);

    log::debug!(
        "icon {hash}: size={} cell={} hue={hue:.4} colors={colors:?}",
        renderer.icon_size(),
        layout.cell,
    );

    let mut graphics = Graphics::new(renderer);
    let mut ctx = Context {
        graphics: &mut graphics,
        hash,
        layout,
        theme: &theme,
        colors,
    };

    ctx.render_group(&SIDES, OuterShape::from_index(hash.nibble(SIDES.shape_digit)));
    ctx.render_group(&CORNERS, OuterShape::from_index(hash.nibble(CORNERS.shape_digit)));
    ctx.render_group(&CENTER, CenterShape::from_index(hash.nibble(CENTER.shape_digit)));

    graphics.renderer_mut().finish();
}

/// Render `hash` as a standalone SVG document.
#[must_use]
pub fn to_svg(hash: &IconHash, size: u32, config: &Config) -> String {
    let mut renderer = SvgRenderer::with_size(size);
    generate(&mut renderer, hash, config);
    renderer.into_writer().into_svg()
}

/// Render `hash` as an SVG `data:` URI, ready for an `<img src>`.
#[must_use]
pub fn to_base64_svg(hash: &IconHash, size: u32, config: &Config) -> String {
    svg_data_uri(&to_svg(hash, size, config))
}

/// Wrap a finished SVG document in a base64 `data:` URI.
#[must_use]
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_draw::{DrawCommand, Recorder};
    use pretty_assertions::assert_eq;

    fn hash(s: &str) -> IconHash {
        IconHash::parse(s).unwrap()
    }

    fn record(h: &str, size: u32, config: &Config) -> Recorder {
        let mut rec = Recorder::new(size);
        generate(&mut rec, &hash(h), config);
        rec
    }

    // ── Layout ───────────────────────────────────────────────────────────

    #[test]
    fn layout_at_common_sizes() {
        let l = Layout::new(100, 0.08);
        assert_eq!((l.padding, l.inner_size, l.cell, l.x, l.y), (8.0, 84.0, 21.0, 8.0, 8.0));

        let l = Layout::new(64, 0.08);
        assert_eq!((l.padding, l.inner_size, l.cell, l.x), (5.0, 54.0, 13.0, 6.0));

        let l = Layout::new(30, 0.08);
        assert_eq!((l.padding, l.cell, l.x), (2.0, 6.0, 3.0));
    }

    #[test]
    fn layout_degenerate_sizes() {
        let l = Layout::new(1, 0.08);
        assert_eq!((l.padding, l.cell, l.x), (0.0, 0.0, 0.0));
        let l = Layout::new(2, 0.08);
        assert_eq!((l.cell, l.x), (0.0, 1.0));
    }

    #[test]
    fn grid_fits_inside_padding() {
        for size in 1..=512 {
            for padding in [0.0, 0.08, 0.15, 0.3, 0.5] {
                let l = Layout::new(size, padding);
                assert!(l.cell >= 0.0, "size {size}, padding {padding}");
                assert!(l.inner_size >= -1.0, "size {size}, padding {padding}");
                // An inner size of -1 still leaves an empty (zero) cell.
                assert!(4.0 * l.cell <= l.inner_size.max(0.0), "size {size}, padding {padding}");
            }
        }
    }

    #[test]
    fn odd_size_at_half_padding() {
        let l = Layout::new(1, 0.5);
        assert_eq!((l.padding, l.inner_size, l.cell, l.x), (1.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn padding_over_half_gives_negative_cells() {
        let l = Layout::new(100, 0.6);
        assert_eq!((l.padding, l.inner_size, l.cell, l.x, l.y), (60.0, -20.0, -5.0, 60.0, 60.0));

        let l = Layout::new(10, 1.0);
        assert_eq!((l.padding, l.inner_size, l.cell, l.x), (10.0, -10.0, -2.0, 9.0));
    }

    #[test]
    fn padding_over_half_still_renders() {
        let config = Config::resolve(Some(&crate::Options {
            padding: Some(0.6),
            ..crate::Options::default()
        }));
        let rec = record("a3f9c1b2e7d04f8891", 100, &config);
        assert_eq!(rec.shape_colors().len(), 3);
        assert_eq!(rec.primitive_count(), 16);
    }

    #[test]
    fn cell_transform_offsets_by_whole_cells() {
        let l = Layout::new(100, 0.08);
        assert_eq!(l.cell_transform((2, 3), 1), Transform::new(50.0, 71.0, 21.0, 1));
    }

    // ── Colors ───────────────────────────────────────────────────────────

    #[test]
    fn color_selection_fixtures() {
        assert_eq!(select_colors(&hash("a3f9c1b2e7d04f8891")), [4, 2, 1]);
        assert_eq!(select_colors(&hash("0000000014d")), [1, 4, 3]);
        assert_eq!(select_colors(&hash("000000000432")), [0, 1, 3]);
    }

    #[test]
    fn clashing_slot_falls_back_to_mid_color() {
        // 0 then 4: dark gray and dark color.
        assert_eq!(select_colors(&hash("0000000004400000")), [0, 1, 1]);
        // 2 then 3: light gray and light color.
        assert_eq!(select_colors(&hash("0000000002300000")), [0, 2, 1]);
        assert_eq!(select_colors(&hash("0000000040000000")), [4, 1, 1]);
    }

    #[test]
    fn repeated_clashing_slot_also_falls_back() {
        assert_eq!(select_colors(&hash("00000000000")), [0, 1, 1]);
        assert_eq!(select_colors(&hash("ffffffffffff")), [0, 1, 1]);
    }

    #[test]
    fn hue_range() {
        assert_eq!(hue(&hash("00000000000")), 0.0);
        assert_eq!(hue(&hash("ffffffffffff")), 1.0);
        assert_eq!(hue(&hash("a3f9c1b2e7d04f8891")), 0.019_417_349_321_459_79);
    }

    // ── Generation ───────────────────────────────────────────────────────

    #[test]
    fn call_structure() {
        let rec = record("a3f9c1b2e7d04f8891", 100, &Config::default());
        let cmds = rec.commands();

        // Default background is fully transparent but still set.
        assert_eq!(cmds[0], DrawCommand::Background("#00000000".into()));
        assert_eq!(cmds.last(), Some(&DrawCommand::Finish));

        let begins = cmds.iter().filter(|c| matches!(c, DrawCommand::BeginShape(_))).count();
        let ends = cmds.iter().filter(|c| matches!(c, DrawCommand::EndShape)).count();
        assert_eq!((begins, ends), (3, 3));
        assert_eq!(rec.shape_colors(), vec!["#a84538", "#e8e8e8", "#d17f75"]);
        assert_eq!(rec.primitive_count(), 16);
    }

    #[test]
    fn empty_back_color_skips_background() {
        let config = Config {
            back_color: String::new(),
            ..Config::default()
        };
        let rec = record("a3f9c1b2e7d04f8891", 100, &config);
        assert!(matches!(rec.commands()[0], DrawCommand::BeginShape(_)));
    }

    #[test]
    fn deterministic() {
        let a = record("0123456789abcdef0123", 64, &Config::default());
        let b = record("0123456789abcdef0123", 64, &Config::default());
        assert_eq!(a, b);
    }

    #[test]
    fn accent_center_draws_once() {
        // Digit 1 = 'd' selects the sparse center variant.
        let rec = record("0d00000000000", 100, &Config::default());
        let cmds = rec.commands();
        let center_start = cmds
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::BeginShape(_)))
            .map(|(i, _)| i)
            .nth(2)
            .unwrap();
        let center_primitives = cmds[center_start..].iter().filter(|c| c.is_primitive()).count();
        assert_eq!(center_primitives, 1);
        assert_eq!(
            cmds[center_start + 1],
            DrawCommand::Circle {
                point: n_draw::Point::new(37.4, 37.4),
                diameter: 25.2,
                counter_clockwise: false,
            }
        );
    }

    #[test]
    fn to_svg_has_one_path_per_distinct_color() {
        let svg = to_svg(&hash("a3f9c1b2e7d04f8891"), 100, &Config::default());
        assert_eq!(svg.matches("<path ").count(), 3);
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn base64_svg_wraps_the_document() {
        let h = hash("a3f9c1b2e7d04f8891");
        let uri = to_base64_svg(&h, 8, &Config::default());

        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        // `<svg xmlns="` in base64.
        assert!(payload.starts_with("PHN2ZyB4bWxucz0i"), "{payload}");
        assert!(payload.ends_with("PC9zdmc+"), "{payload}");

        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), to_svg(&h, 8, &Config::default()));
    }
}
