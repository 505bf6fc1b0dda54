//! Neighbor bracketing over sorted coordinates.
//!
//! [`bracket`] is the single search primitive behind every table lookup.
//! Given strictly increasing nodes and a query value it returns the pair of
//! adjacent node indices surrounding the query together with the blend
//! fraction between them. Queries outside the node range collapse onto the
//! nearest end node, which is how tables implement clamping.
//!
//! ```text
//! nodes:   0.0      2.0      5.0      9.0
//!                     ^   v=3.5
//!          lo = 1, hi = 2, frac = (3.5 - 2.0) / (5.0 - 2.0) = 0.5
//! ```

use crate::interp::{clamp, lerp};

/// Result of bracketing a query value against sorted nodes.
///
/// Invariants: `lo <= hi`, `hi - lo <= 1`, and `lo == hi` implies
/// `frac == 0.0`. For any non-NaN query `frac` lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Index of the lower neighbor.
    pub lo: usize,
    /// Index of the upper neighbor.
    pub hi: usize,
    /// Blend fraction from `lo` towards `hi`.
    pub frac: f64,
}

impl Bracket {
    /// A collapsed bracket sitting exactly on node `index`.
    #[inline]
    pub const fn at(index: usize) -> Self {
        Self { lo: index, hi: index, frac: 0.0 }
    }

    /// Returns `true` if the query landed on a single node.
    ///
    /// This covers exact node hits, clamped queries and single-node axes.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lo == self.hi
    }

    /// Blends the values stored at `lo` and `hi`.
    ///
    /// A collapsed bracket returns `lo_value` untouched, so exact node hits
    /// never pick up rounding from the interpolation arithmetic. Otherwise the
    /// result is clamped to the range spanned by the two values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabula_math::bracket;
    ///
    /// let nodes = [0.0, 10.0];
    /// let values = [0.0, 100.0];
    /// let b = bracket(&nodes, 5.0);
    /// assert_eq!(b.blend(values[b.lo], values[b.hi]), 50.0);
    /// ```
    #[inline]
    pub fn blend(&self, lo_value: f64, hi_value: f64) -> f64 {
        if self.is_exact() {
            lo_value
        } else {
            let (min, max) = if lo_value <= hi_value { (lo_value, hi_value) } else { (hi_value, lo_value) };
            clamp(lerp(lo_value, hi_value, self.frac), min, max)
        }
    }
}

/// Brackets `value` within strictly increasing `nodes`.
///
/// - `value` at or below the first node yields `Bracket::at(0)`.
/// - `value` at or above the last node yields `Bracket::at(len - 1)`.
/// - `value` equal to an interior node yields a collapsed bracket on it.
/// - Otherwise the two surrounding nodes and the blend fraction are returned.
///
/// A NaN query brackets the first interval with a NaN fraction so that it
/// propagates through [`Bracket::blend`]. The search is a binary search and
/// runs in `O(log n)`.
///
/// # Panics
///
/// Panics if `nodes` is empty. Callers are expected to validate their axes
/// before querying.
///
/// # Example
///
/// ```rust
/// use tabula_math::{bracket, Bracket};
///
/// let nodes = [1.0, 2.0, 7.0];
/// assert_eq!(bracket(&nodes, -3.0), Bracket::at(0));
/// assert_eq!(bracket(&nodes, 2.0), Bracket::at(1));
/// assert_eq!(bracket(&nodes, 4.5), Bracket { lo: 1, hi: 2, frac: 0.5 });
/// assert_eq!(bracket(&nodes, 9.0), Bracket::at(2));
/// ```
pub fn bracket(nodes: &[f64], value: f64) -> Bracket {
    let last = nodes.len() - 1;
    if last == 0 {
        return Bracket::at(0);
    }
    if value.is_nan() {
        return Bracket { lo: 0, hi: 1, frac: f64::NAN };
    }
    if value <= nodes[0] {
        return Bracket::at(0);
    }
    if value >= nodes[last] {
        return Bracket::at(last);
    }

    // nodes[0] < value < nodes[last], so hi lands in 1..=last
    let hi = nodes.partition_point(|&n| n < value);
    if nodes[hi] == value {
        return Bracket::at(hi);
    }
    let lo = hi - 1;
    Bracket { lo, hi, frac: fraction(nodes[lo], nodes[hi], value) }
}

/// Position of `value` within `(x0, x1)` as a fraction of the span.
#[inline]
fn fraction(x0: f64, x1: f64, value: f64) -> f64 {
    let span = x1 - x0;
    if span.is_finite() {
        (value - x0) / span
    } else {
        // halving keeps both differences representable
        (value * 0.5 - x0 * 0.5) / (x1 * 0.5 - x0 * 0.5)
    }
}
