//! # n-icon — deterministic identicon generation
//!
//! Turns a hex hash into a small geometric icon. The mapping is closed and
//! bit-exact: the same hash and configuration always produce the same
//! drawing calls, down to the last rounded coordinate.
//!
//! # Architecture
//!
//! ```text
//! IconHash (>= 11 hex digits)
//!     │
//!     ▼
//! generator.rs: hue from the last 7 nibbles, color slots from nibbles 8..11
//!     │
//!     ▼
//! config.rs + theme.rs: 5-slot palette (gray/color × dark/mid/light)
//!     │
//!     ▼
//! generator.rs: three shape groups (sides, corners, center) on a 4×4 grid
//!     │
//!     ▼
//! transform.rs + graphics.rs + shapes.rs: cell-local primitives rotated
//!     │                                   and translated into canvas space
//!     ▼
//! n_draw::Renderer (SVG, recorder, ...)
//! ```
//!
//! # Example
//!
//! ```
//! use n_icon::{Config, IconHash, to_svg};
//!
//! let hash = IconHash::parse("a3f9c1b2e7d04f8891").unwrap();
//! let svg = to_svg(&hash, 64, &Config::default());
//! assert!(svg.starts_with("<svg"));
//! ```

// Single-char geometry variables (x, y, w, h, m) mirror the shape formulas.
#![allow(clippy::many_single_char_names)]
// Cell sizes and nibbles are small integers converted to f64.
#![allow(clippy::cast_precision_loss)]
// Color and layout arithmetic is kept operation-for-operation so results are
// bit-identical with every other implementation of the same mapping; fused
// multiply-add would change rounding.
#![allow(clippy::suboptimal_flops)]
// The hand-specified shape catalog is one match arm per variant.
#![allow(clippy::too_many_lines)]

pub mod config;
pub mod error;
pub mod generator;
pub mod graphics;
pub mod hash;
pub mod hsl;
pub mod num;
pub mod shapes;
pub mod theme;
pub mod transform;

pub use config::{Config, Options};
pub use error::{ConfigError, HashError};
pub use generator::{generate, svg_data_uri, to_base64_svg, to_svg};
pub use hash::{Blake3, HashFunction, IconHash, Sha1};
pub use theme::Theme;
