//! Relative floating-point comparison.
//!
//! Areas of chromaticity triangles are small (around 0.1) and intersection
//! areas are reconstructed from computed vertices, so exact equality is too
//! strict. [`fuzzy_eq`] compares by relative difference instead.

/// Relative tolerance scale for `f64` comparisons.
///
/// Two values are equal when their difference, multiplied by this scale, does
/// not exceed the smaller magnitude. Roughly twelve significant digits.
pub const FUZZY_SCALE: f64 = 1e12;

/// Returns `true` if `a` and `b` are equal within a relative tolerance.
///
/// Computes `|a - b| * FUZZY_SCALE <= min(|a|, |b|)`. Zero only compares
/// equal to exact zero.
///
/// # Example
///
/// ```rust
/// use gamut_core::fuzzy_eq;
///
/// assert!(fuzzy_eq(0.11205, 0.11205 + 1e-16));
/// assert!(!fuzzy_eq(0.11205, 0.11206));
/// assert!(fuzzy_eq(0.0, 0.0));
/// assert!(!fuzzy_eq(0.0, 1e-300));
/// ```
#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * FUZZY_SCALE <= a.abs().min(b.abs())
}
