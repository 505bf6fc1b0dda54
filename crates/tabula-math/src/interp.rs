//! Scalar interpolation utilities.
//!
//! These are the arithmetic building blocks shared by every table type:
//!
//! - Linear interpolation ([`lerp`])
//! - Range clamping ([`clamp`])
//!
//! # Usage
//!
//! ```rust
//! use tabula_math::{clamp, lerp};
//!
//! let mid = lerp(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//!
//! assert_eq!(clamp(mid, 0.0, 2.5), 2.5);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`, or `a * (1 - t) + b * t` when `b - a` overflows
///
/// # Example
///
/// ```rust
/// use tabula_math::lerp;
///
/// assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
/// assert_eq!(lerp(0.0, 100.0, 1.0), 100.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let span = b - a;
    if span.is_finite() {
        a + span * t
    } else {
        a * (1.0 - t) + b * t
    }
}

/// Clamps a value to the range [min, max].
///
/// NaN passes through unchanged.
///
/// # Example
///
/// ```rust
/// use tabula_math::clamp;
///
/// assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
