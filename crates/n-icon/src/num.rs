//! Explicit truncation helpers.
//!
//! Every "make this an integer" step in the icon mapping (padding, cell
//! size, grid origin, border widths, color bytes) truncates toward zero and
//! maps NaN to zero. Routing them all through here keeps that rule in one
//! place.

/// Truncate toward zero, as an integer. NaN becomes 0; out-of-range values
/// saturate.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn trunc_int(value: f64) -> i64 {
    value as i64
}

/// Truncate toward zero, kept as `f64` for further geometry.
#[inline]
#[must_use]
pub fn trunc(value: f64) -> f64 {
    trunc_int(value) as f64
}
