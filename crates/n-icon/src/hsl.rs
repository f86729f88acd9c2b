//! HSL → hex color math.
//!
//! Hue, saturation and lightness are all fractions in [0, 1] (hue in turns,
//! not degrees). Conversion follows the CSS3 color module algorithm; output
//! is always a 7-character `#rrggbb` string.
//!
//! [`corrected_hsl`] adds a per-hue lightness correction on top. Raw HSL
//! lightness is not perceptually even: at equal L, yellow reads much lighter
//! than blue. The corrector table holds the perceived "middle" lightness for
//! each hue sextant and rescales the input around it.

use std::fmt::Write as _;

use crate::num::trunc_int;

/// Perceived middle lightness per hue sextant. Index 6 wraps back to red.
const CORRECTORS: [f64; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

/// Convert HSL to `#rrggbb`, correcting lightness for the hue.
#[must_use]
pub fn corrected_hsl(hue: f64, saturation: f64, lightness: f64) -> String {
    let corrector = CORRECTORS[sextant(hue)];

    let lightness = if lightness < 0.5 {
        lightness * corrector * 2.0
    } else {
        corrector + (lightness - 0.5) * (1.0 - corrector) * 2.0
    };

    hsl(hue, saturation, lightness)
}

/// Convert HSL to `#rrggbb`.
///
/// Based on <http://www.w3.org/TR/2011/REC-css3-color-20110607/#hsl-color>.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');

    if saturation == 0.0 {
        let gray = lightness * 255.0;
        for _ in 0..3 {
            push_byte(&mut out, gray);
        }
    } else {
        let m2 = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = lightness * 2.0 - m2;

        push_byte(&mut out, hue_to_channel(m1, m2, hue * 6.0 + 2.0));
        push_byte(&mut out, hue_to_channel(m1, m2, hue * 6.0));
        push_byte(&mut out, hue_to_channel(m1, m2, hue * 6.0 - 2.0));
    }

    out
}

/// Index into [`CORRECTORS`]: the nearest sextant boundary.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn sextant(hue: f64) -> usize {
    (trunc_int(hue * 6.0 + 0.5).max(0) as usize).min(CORRECTORS.len() - 1)
}

/// One channel, scaled to [0, 255], for a hue position `h` in sextants.
fn hue_to_channel(m1: f64, m2: f64, h: f64) -> f64 {
    let h = if h < 0.0 {
        h + 6.0
    } else if h > 6.0 {
        h - 6.0
    } else {
        h
    };

    255.0
        * if h < 1.0 {
            m1 + (m2 - m1) * h
        } else if h < 3.0 {
            m2
        } else if h < 4.0 {
            m1 + (m2 - m1) * (4.0 - h)
        } else {
            m1
        }
}

/// Append a channel value as two hex digits: truncated, clamped to [0, 255].
fn push_byte(out: &mut String, value: f64) {
    let byte = trunc_int(value).clamp(0, 255);
    let _ = write!(out, "{byte:02x}");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
