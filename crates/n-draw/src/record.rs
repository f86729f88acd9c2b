// SPDX-License-Identifier: MIT
//
// Recording backend — keeps every renderer call as a plain value.
//
// Useful wherever the drawing itself is the thing under inspection:
// determinism checks (two recordings of the same icon must be equal),
// structural assertions (how many shape groups, which colors), and
// tooling that wants the geometry without parsing SVG back.

use crate::renderer::{Point, Renderer};

// ─── DrawCommand ─────────────────────────────────────────────────────────────

/// One renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `set_background` with its `#rrggbbaa` color.
    Background(String),
    /// `begin_shape` with its fill color.
    BeginShape(String),
    EndShape,
    Polygon(Vec<Point>),
    Circle {
        point: Point,
        diameter: f64,
        counter_clockwise: bool,
    },
    Finish,
}

impl DrawCommand {
    /// Whether this is a polygon or circle.
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Polygon(_) | Self::Circle { .. })
    }
}

// ─── Recorder ────────────────────────────────────────────────────────────────

/// [`Renderer`] that stores the calls it receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder {
    icon_size: u32,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    #[must_use]
    pub const fn new(icon_size: u32) -> Self {
        Self {
            icon_size,
            commands: Vec::new(),
        }
    }

    /// Everything recorded so far, in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Fill colors passed to `begin_shape`, in call order.
    #[must_use]
    pub fn shape_colors(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::BeginShape(color) => Some(color.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of polygons and circles recorded.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.commands.iter().filter(|cmd| cmd.is_primitive()).count()
    }
}

impl Renderer for Recorder {
    fn icon_size(&self) -> u32 {
        self.icon_size
    }

    fn set_background(&mut self, color: &str) {
        self.commands.push(DrawCommand::Background(color.to_owned()));
    }

    fn begin_shape(&mut self, color: &str) {
        self.commands.push(DrawCommand::BeginShape(color.to_owned()));
    }

    fn end_shape(&mut self) {
        self.commands.push(DrawCommand::EndShape);
    }

    fn add_polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::Polygon(points.to_vec()));
    }

    fn add_circle(&mut self, point: Point, diameter: f64, counter_clockwise: bool) {
        self.commands.push(DrawCommand::Circle {
            point,
            diameter,
            counter_clockwise,
        });
    }

    fn finish(&mut self) {
        self.commands.push(DrawCommand::Finish);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
