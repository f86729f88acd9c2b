//! The 5-slot icon palette.
//!
//! One hue, five colors: two grays and three tints of the hue. Slot order
//! is fixed because the generator selects colors by index.

use crate::config::Config;
use crate::hsl::corrected_hsl;

/// Colors available to one icon, all `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: [String; Self::LEN],
}

impl Theme {
    pub const DARK_GRAY: usize = 0;
    pub const MID_COLOR: usize = 1;
    pub const LIGHT_GRAY: usize = 2;
    pub const LIGHT_COLOR: usize = 3;
    pub const DARK_COLOR: usize = 4;

    /// Number of slots.
    pub const LEN: usize = 5;

    /// Build the palette for a hash-derived hue in [0, 1].
    ///
    /// The hue is first snapped to the configured hue restriction.
    #[must_use]
    pub fn build(hue: f64, config: &Config) -> Self {
        let hue = config.hue(hue);
        let color = config.saturation.color;
        let gray = config.saturation.grayscale;

        Self {
            colors: [
                corrected_hsl(hue, gray, config.grayscale_lightness(0.0)),
                corrected_hsl(hue, color, config.color_lightness(0.5)),
                corrected_hsl(hue, gray, config.grayscale_lightness(1.0)),
                corrected_hsl(hue, color, config.color_lightness(1.0)),
                corrected_hsl(hue, color, config.color_lightness(0.0)),
            ],
        }
    }

    /// The color in `slot`. Panics if `slot >= Theme::LEN`.
    #[must_use]
    pub fn color(&self, slot: usize) -> &str {
        &self.colors[slot]
    }

    #[must_use]
    pub const fn colors(&self) -> &[String; Self::LEN] {
        &self.colors
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
