//! 1-dimensional lookup table.
//!
//! A [`Table1D`] stands in for an expensive single-variable function. It
//! stores `(x, y)` samples and answers queries by linear interpolation
//! between the two samples surrounding the query. Queries outside the
//! sampled range clamp to the nearest end sample.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use tabula_math::bracket;

use crate::axis::Axis;
use crate::error::{TableError, TableResult};
use crate::view::Table1DRef;

/// A 1-dimensional lookup table.
///
/// # Structure
///
/// - Abscissae stored as an [`Axis`] (sorted, unique, finite)
/// - One ordinate per abscissa
/// - Linear interpolation inside the range, clamping outside it
///
/// # Example
///
/// ```rust
/// use tabula_table::Table1D;
///
/// let table = Table1D::new([(0.0, 0.0), (10.0, 100.0)]).unwrap();
///
/// assert_eq!(table.evaluate(5.0), 50.0);
/// assert_eq!(table.evaluate(-5.0), 0.0);
/// assert_eq!(table.evaluate(15.0), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table1D {
    xs: Axis,
    ys: Vec<f64>,
}

impl Table1D {
    /// Builds a table from `(x, y)` samples in any order.
    ///
    /// Samples are sorted ascending by `x`. A single sample is allowed and
    /// yields a constant function.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`] if no samples are given
    /// - [`TableError::NonFinite`] if any coordinate is NaN or infinite
    /// - [`TableError::DuplicateAbscissa`] if two samples share an `x`
    pub fn new(samples: impl IntoIterator<Item = (f64, f64)>) -> TableResult<Self> {
        let mut samples: Vec<(f64, f64)> = samples.into_iter().collect();
        trace!(samples = samples.len(), "Table1D::new");

        if samples.is_empty() {
            return Err(TableError::empty("samples"));
        }
        for (i, &(x, y)) in samples.iter().enumerate() {
            if !x.is_finite() {
                return Err(TableError::non_finite("x", i, x));
            }
            if !y.is_finite() {
                return Err(TableError::non_finite("y", i, y));
            }
        }

        samples.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(w) = samples.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(TableError::DuplicateAbscissa { x: w[0].0 });
        }

        let (xs, ys): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();
        let xs = Axis::named(xs, "x")?;
        debug!(samples = xs.len(), min = xs.min(), max = xs.max(), "Built Table1D");
        Ok(Self { xs, ys })
    }

    /// Builds a table from parallel abscissa and ordinate vectors.
    ///
    /// # Errors
    ///
    /// [`TableError::LengthMismatch`] if the vectors differ in length, plus
    /// everything [`Table1D::new`] can return.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabula_table::Table1D;
    ///
    /// let table = Table1D::from_xy(
    ///     vec![1.0, 2.0, 7.0, 9.0, 13.0, 20.0],
    ///     vec![8.0, 4.0, 6.0, 10.0, 3.0, 2.0],
    /// ).unwrap();
    /// assert_eq!(table.evaluate(10.0), 8.25);
    /// ```
    pub fn from_xy(xs: Vec<f64>, ys: Vec<f64>) -> TableResult<Self> {
        if xs.len() != ys.len() {
            return Err(TableError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        Self::new(xs.into_iter().zip(ys))
    }

    /// Samples `f` once at each abscissa in `xs` and tabulates the results.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabula_table::Table1D;
    ///
    /// let table = Table1D::from_fn((0..=4).map(f64::from), |x| x * x).unwrap();
    /// assert_eq!(table.evaluate(3.0), 9.0);
    /// assert_eq!(table.evaluate(2.5), 6.5);
    /// ```
    pub fn from_fn<F>(xs: impl IntoIterator<Item = f64>, mut f: F) -> TableResult<Self>
    where
        F: FnMut(f64) -> f64,
    {
        Self::new(xs.into_iter().map(|x| (x, f(x))))
    }

    /// Wraps samples already validated by a borrowed table.
    pub(crate) fn from_validated(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs: Axis::from_validated(xs), ys }
    }

    /// Number of stored samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    /// Always `false`; tables hold at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sampled range as `(min_x, max_x)`.
    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs.min(), self.xs.max())
    }

    /// Sorted abscissae.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        self.xs.as_slice()
    }

    /// Ordinates, aligned with [`Table1D::xs`].
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Abscissa axis.
    #[inline]
    pub fn axis(&self) -> &Axis {
        &self.xs
    }

    /// Iterates over `(x, y)` samples in ascending `x` order.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.xs.as_slice().iter().copied().zip(self.ys.iter().copied())
    }

    /// Evaluates the tabulated function at `x`.
    ///
    /// - Below the first sample: the first `y`
    /// - Above the last sample: the last `y`
    /// - On a sample: that sample's `y`, bit for bit
    /// - Between samples: linear interpolation of the two neighbors
    ///
    /// A NaN query yields NaN unless the table has a single sample.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        interpolate(self.xs.as_slice(), &self.ys, x)
    }

    /// Borrows this table as a [`Table1DRef`].
    #[inline]
    pub fn view(&self) -> Table1DRef<'_> {
        Table1DRef { xs: self.xs.as_slice(), ys: &self.ys }
    }

    /// Evaluates every query in `xs`.
    ///
    /// Uses rayon for parallel processing when the `parallel` feature is enabled.
    #[cfg(feature = "parallel")]
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        trace!(queries = xs.len(), "Table1D::evaluate_many");
        xs.par_iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evaluates every query in `xs`.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        trace!(queries = xs.len(), "Table1D::evaluate_many");
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// Linear lookup over validated, aligned `xs` and `ys`.
#[inline]
pub(crate) fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let b = bracket(xs, x);
    b.blend(ys[b.lo], ys[b.hi])
}

impl TryFrom<Vec<(f64, f64)>> for Table1D {
    type Error = TableError;

    fn try_from(samples: Vec<(f64, f64)>) -> TableResult<Self> {
        Self::new(samples)
    }
}
