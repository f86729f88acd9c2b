//! Icon configuration — user overrides merged onto fixed defaults.
//!
//! Two layers:
//!
//! - [`Options`]: what a caller supplies. Every field is optional; loadable
//!   from TOML or JSON with the same camelCase keys.
//! - [`Config`]: the resolved value the generator reads. Built once per
//!   icon by [`Config::resolve`] and never mutated.
//!
//! # Defaults
//!
//! | Key                    | Default      |
//! |------------------------|--------------|
//! | `hues`                 | `[]` (any)   |
//! | `lightness.color`      | `[0.4, 0.8]` |
//! | `lightness.grayscale`  | `[0.3, 0.9]` |
//! | `saturation.color`     | `0.5`        |
//! | `saturation.grayscale` | `0.0`        |
//! | `backColor`            | `"#0000"`    |
//! | `padding`              | `0.08`       |
//!
//! # Merge semantics
//!
//! The merge is shallow. A top-level key present in the overrides replaces
//! the default wholesale; `lightness` and `saturation` are not merged with
//! the default record key by key. A field left out *inside* a supplied
//! `lightness` or `saturation` record falls back to its default value.

use std::fs;
use std::path::Path;

use n_draw::color::parse_color;
use serde::Deserialize;

use crate::error::ConfigError;

/// A `[min, max]` lightness range.
pub type Range = [f64; 2];

const DEFAULT_COLOR_LIGHTNESS: Range = [0.4, 0.8];
const DEFAULT_GRAYSCALE_LIGHTNESS: Range = [0.3, 0.9];
const DEFAULT_COLOR_SATURATION: f64 = 0.5;
const DEFAULT_GRAYSCALE_SATURATION: f64 = 0.0;
const DEFAULT_BACK_COLOR: &str = "#0000";
const DEFAULT_PADDING: f64 = 0.08;

// ─── Options ─────────────────────────────────────────────────────────────────

/// Caller-supplied overrides. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Permitted hues in degrees. Empty means unrestricted.
    pub hues: Option<Vec<f64>>,
    pub lightness: Option<LightnessOptions>,
    pub saturation: Option<SaturationOptions>,
    /// Background color, `#rgb[a]` or `#rrggbb[aa]`.
    pub back_color: Option<String>,
    /// Padding as a fraction of the icon size.
    pub padding: Option<f64>,
}

/// Override record for `lightness`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightnessOptions {
    pub color: Option<Range>,
    pub grayscale: Option<Range>,
}

/// Override record for `saturation`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SaturationOptions {
    pub color: Option<f64>,
    pub grayscale: Option<f64>,
}

impl Options {
    /// Parse options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the document is malformed or a known
    /// key has the wrong type. Unknown keys are ignored.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or a known
    /// key has the wrong type. Unknown keys are ignored.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load options from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read, or a parse
    /// error as for [`from_toml_str`](Self::from_toml_str) /
    /// [`from_json_str`](Self::from_json_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Layer `over` on top of `self`, key by key at the top level only.
    #[must_use]
    pub fn merge(self, over: Self) -> Self {
        Self {
            hues: over.hues.or(self.hues),
            lightness: over.lightness.or(self.lightness),
            saturation: over.saturation.or(self.saturation),
            back_color: over.back_color.or(self.back_color),
            padding: over.padding.or(self.padding),
        }
    }
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// Resolved lightness ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lightness {
    pub color: Range,
    pub grayscale: Range,
}

impl Default for Lightness {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR_LIGHTNESS,
            grayscale: DEFAULT_GRAYSCALE_LIGHTNESS,
        }
    }
}

impl From<LightnessOptions> for Lightness {
    fn from(o: LightnessOptions) -> Self {
        Self {
            color: o.color.unwrap_or(DEFAULT_COLOR_LIGHTNESS),
            grayscale: o.grayscale.unwrap_or(DEFAULT_GRAYSCALE_LIGHTNESS),
        }
    }
}

/// Resolved saturations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    pub color: f64,
    pub grayscale: f64,
}

impl Default for Saturation {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR_SATURATION,
            grayscale: DEFAULT_GRAYSCALE_SATURATION,
        }
    }
}

impl From<SaturationOptions> for Saturation {
    fn from(o: SaturationOptions) -> Self {
        Self {
            color: o.color.unwrap_or(DEFAULT_COLOR_SATURATION),
            grayscale: o.grayscale.unwrap_or(DEFAULT_GRAYSCALE_SATURATION),
        }
    }
}

/// The configuration the generator reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub hues: Vec<f64>,
    pub lightness: Lightness,
    pub saturation: Saturation,
    /// Background in `#rrggbbaa` form, or empty for no background.
    pub back_color: String,
    pub padding: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hues: Vec::new(),
            lightness: Lightness::default(),
            saturation: Saturation::default(),
            back_color: parse_color(DEFAULT_BACK_COLOR),
            padding: DEFAULT_PADDING,
        }
    }
}

impl Config {
    /// Merge `overrides` onto the defaults (shallow, see module docs).
    #[must_use]
    pub fn resolve(overrides: Option<&Options>) -> Self {
        let defaults = Self::default();
        let Some(o) = overrides else {
            return defaults;
        };

        Self {
            hues: o.hues.clone().unwrap_or(defaults.hues),
            lightness: o.lightness.map_or(defaults.lightness, Lightness::from),
            saturation: o.saturation.map_or(defaults.saturation, Saturation::from),
            back_color: o
                .back_color
                .as_deref()
                .map_or(defaults.back_color, parse_color),
            padding: o.padding.unwrap_or(defaults.padding),
        }
    }

    /// Lightness for colored slots at position `t` in the color range.
    #[must_use]
    pub fn color_lightness(&self, t: f64) -> f64 {
        lightness_for(self.lightness.color, t)
    }

    /// Lightness for gray slots at position `t` in the grayscale range.
    #[must_use]
    pub fn grayscale_lightness(&self, t: f64) -> f64 {
        lightness_for(self.lightness.grayscale, t)
    }

    /// The hue to use given the hash-derived `raw` hue.
    #[must_use]
    pub fn hue(&self, raw: f64) -> f64 {
        hue_for(&self.hues, raw)
    }
}

// ─── Lookups ─────────────────────────────────────────────────────────────────

/// Interpolate `t` ∈ [0, 1] into `range`, clamped to [0, 1].
#[must_use]
pub fn lightness_for(range: Range, t: f64) -> f64 {
    let value = range[0] + t * (range[1] - range[0]);
    value.clamp(0.0, 1.0)
}

/// Snap a raw hue (turns, [0, 1]) to one of the permitted `hues` (degrees).
///
/// The raw hue picks a bucket; the bucket's degrees become turns in [0, 1).
/// With no restriction, or a negative bucket value, the raw hue is returned
/// unchanged.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn hue_for(hues: &[f64], raw: f64) -> f64 {
    if hues.is_empty() {
        return raw;
    }
    // 0.999 keeps raw == 1.0 inside the last bucket.
    let index = crate::num::trunc_int(0.999 * raw * hues.len() as f64).max(0) as usize;
    match hues.get(index) {
        Some(&degrees) if degrees >= 0.0 => ((degrees / 360.0) % 1.0 + 1.0) % 1.0,
        _ => raw,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
