//! Validated sample coordinates.
//!
//! An [`Axis`] is a non-empty, finite, strictly increasing sequence of
//! coordinates. Both table types store their abscissae as axes and route
//! every lookup through [`Axis::bracket`].

use tabula_math::{bracket, clamp, Bracket};

use crate::error::{ensure_finite, TableError, TableResult};

/// An ordered set of distinct sample coordinates.
///
/// # Example
///
/// ```rust
/// use tabula_table::Axis;
///
/// let axis = Axis::new(vec![0.0, 10.0, 20.0]).unwrap();
/// assert_eq!(axis.len(), 3);
/// assert_eq!(axis.clamp(-5.0), 0.0);
///
/// let b = axis.bracket(15.0);
/// assert_eq!((b.lo, b.hi, b.frac), (1, 2, 0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    values: Vec<f64>,
}

impl Axis {
    /// Builds an axis from strictly increasing, finite values.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`] if `values` is empty
    /// - [`TableError::NonFinite`] if a value is NaN or infinite
    /// - [`TableError::UnsortedOrDuplicateAxis`] if values are not strictly increasing
    pub fn new(values: Vec<f64>) -> TableResult<Self> {
        Self::named(values, "axis")
    }

    /// Same as [`Axis::new`] but labels errors with `name`.
    pub(crate) fn named(values: Vec<f64>, name: &'static str) -> TableResult<Self> {
        validate(&values, name)?;
        Ok(Self { values })
    }

    /// Wraps values already known to satisfy the axis invariants.
    pub(crate) fn from_validated(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; axes hold at least one coordinate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Smallest coordinate.
    #[inline]
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Largest coordinate.
    #[inline]
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Coordinates as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Clamps `value` to `[min, max]`.
    ///
    /// Convenience accessor only. Lookups do not call it, since
    /// [`Axis::bracket`] already collapses out-of-range queries onto the end
    /// nodes.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, self.min(), self.max())
    }

    /// Locates the neighbors of `value`, clamping outside the axis range.
    ///
    /// See [`tabula_math::bracket`] for the exact contract.
    #[inline]
    pub fn bracket(&self, value: f64) -> Bracket {
        bracket(&self.values, value)
    }
}

/// Checks that `values` is non-empty, finite and strictly increasing.
pub(crate) fn validate(values: &[f64], name: &'static str) -> TableResult<()> {
    if values.is_empty() {
        return Err(TableError::empty(name));
    }
    ensure_finite(name, values)?;
    if let Some(i) = values.windows(2).position(|w| w[1] <= w[0]) {
        return Err(TableError::UnsortedOrDuplicateAxis {
            axis: name,
            index: i + 1,
            prev: values[i],
            value: values[i + 1],
        });
    }
    Ok(())
}

impl AsRef<[f64]> for Axis {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Axis {
    type Error = TableError;

    fn try_from(values: Vec<f64>) -> TableResult<Self> {
        Self::new(values)
    }
}
