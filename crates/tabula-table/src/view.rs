//! Borrowed lookup tables.
//!
//! [`Table1DRef`] and [`Table2DRef`] evaluate exactly like [`Table1D`] and
//! [`Table2D`] but read their samples from slices owned elsewhere, so a
//! caller holding precomputed data (a static array, a memory-mapped buffer)
//! can query it without copying.
//!
//! Borrowed data cannot be reordered, so abscissae and axes must already be
//! strictly increasing. Validation is otherwise the same as for the owned
//! tables.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::axis::validate;
use crate::error::{ensure_finite, TableError, TableResult};
use crate::table1d::{self, Table1D};
use crate::table2d::{self, Table2D};

/// A 1-dimensional lookup table over borrowed samples.
///
/// # Example
///
/// ```rust
/// use tabula_table::Table1DRef;
///
/// static XS: [f64; 3] = [0.0, 1.0, 4.0];
/// static YS: [f64; 3] = [0.0, 10.0, 40.0];
///
/// let table = Table1DRef::new(&XS, &YS).unwrap();
/// assert_eq!(table.evaluate(2.5), 25.0);
/// assert_eq!(table.evaluate(9.0), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table1DRef<'a> {
    pub(crate) xs: &'a [f64],
    pub(crate) ys: &'a [f64],
}

impl<'a> Table1DRef<'a> {
    /// Wraps parallel abscissa and ordinate slices.
    ///
    /// # Errors
    ///
    /// - [`TableError::LengthMismatch`] if the slices differ in length
    /// - [`TableError::Empty`] if they are empty
    /// - [`TableError::NonFinite`] if any value is NaN or infinite
    /// - [`TableError::UnsortedOrDuplicateAxis`] if `xs` is not strictly increasing
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> TableResult<Self> {
        trace!(samples = xs.len(), "Table1DRef::new");
        if xs.len() != ys.len() {
            return Err(TableError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        validate(xs, "x")?;
        ensure_finite("y", ys)?;
        Ok(Self { xs, ys })
    }

    /// Number of samples.
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
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Abscissae.
    #[inline]
    pub fn xs(&self) -> &'a [f64] {
        self.xs
    }

    /// Ordinates.
    #[inline]
    pub fn ys(&self) -> &'a [f64] {
        self.ys
    }

    /// Evaluates the tabulated function at `x`. Same contract as
    /// [`Table1D::evaluate`].
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        table1d::interpolate(self.xs, self.ys, x)
    }

    /// Evaluates every query in `xs`.
    #[cfg(feature = "parallel")]
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.par_iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evaluates every query in `xs`.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Copies the samples into an owned [`Table1D`].
    pub fn to_table(&self) -> Table1D {
        Table1D::from_validated(self.xs.to_vec(), self.ys.to_vec())
    }
}

/// Borrowed grid storage, x-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum GridRef<'a> {
    /// `values[i * n + j]`
    Flat(&'a [f64]),
    /// `rows[i][j]`
    Rows(&'a [&'a [f64]]),
}

/// A 2-dimensional lookup table over borrowed axes and grid.
///
/// The grid is either one x-major slice ([`Table2DRef::from_flat`]) or one
/// slice per x-axis node ([`Table2DRef::from_rows`]).
///
/// # Example
///
/// ```rust
/// use tabula_table::Table2DRef;
///
/// let xs = [0.0, 10.0];
/// let ys = [0.0, 10.0];
/// let rows: [&[f64]; 2] = [&[0.0, 20.0], &[10.0, 30.0]];
///
/// let table = Table2DRef::from_rows(&xs, &ys, &rows).unwrap();
/// assert_eq!(table.evaluate(5.0, 5.0), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table2DRef<'a> {
    x_axis: &'a [f64],
    y_axis: &'a [f64],
    grid: GridRef<'a>,
}

impl<'a> Table2DRef<'a> {
    /// Wraps two axes and an x-major flattened grid.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`], [`TableError::NonFinite`] or
    ///   [`TableError::UnsortedOrDuplicateAxis`] for an invalid axis
    /// - [`TableError::GridLengthMismatch`] if `values.len() != len(x) * len(y)`
    /// - [`TableError::NonFinite`] for a NaN or infinite grid value
    pub fn from_flat(x_axis: &'a [f64], y_axis: &'a [f64], values: &'a [f64]) -> TableResult<Self> {
        trace!(m = x_axis.len(), n = y_axis.len(), cells = values.len(), "Table2DRef::from_flat");
        validate(x_axis, "x-axis")?;
        validate(y_axis, "y-axis")?;

        let expected = x_axis.len() * y_axis.len();
        if values.len() != expected {
            return Err(TableError::GridLengthMismatch { expected, got: values.len() });
        }
        ensure_finite("grid", values)?;

        Ok(Self::from_parts(x_axis, y_axis, GridRef::Flat(values)))
    }

    /// Wraps two axes and one grid row per x-axis node.
    ///
    /// `rows[i][j]` is the value at `(x_axis[i], y_axis[j])`.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`], [`TableError::NonFinite`] or
    ///   [`TableError::UnsortedOrDuplicateAxis`] for an invalid axis
    /// - [`TableError::GridShapeMismatch`] if the rows are not `len(x) x len(y)`
    /// - [`TableError::NonFinite`] for a NaN or infinite grid value
    pub fn from_rows(x_axis: &'a [f64], y_axis: &'a [f64], rows: &'a [&'a [f64]]) -> TableResult<Self> {
        trace!(m = x_axis.len(), n = y_axis.len(), rows = rows.len(), "Table2DRef::from_rows");
        validate(x_axis, "x-axis")?;
        validate(y_axis, "y-axis")?;
        let (m, n) = (x_axis.len(), y_axis.len());

        if rows.len() != m {
            let cols = rows.first().map_or(0, |row| row.len());
            return Err(TableError::GridShapeMismatch { expected: (m, n), got: (rows.len(), cols) });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(TableError::GridShapeMismatch { expected: (m, n), got: (m, row.len()) });
        }
        for (i, row) in rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(TableError::non_finite("grid", i * n + j, row[j]));
            }
        }

        Ok(Self::from_parts(x_axis, y_axis, GridRef::Rows(rows)))
    }

    pub(crate) fn from_parts(x_axis: &'a [f64], y_axis: &'a [f64], grid: GridRef<'a>) -> Self {
        Self { x_axis, y_axis, grid }
    }

    /// Grid dimensions as `(len(x-axis), len(y-axis))`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.x_axis.len(), self.y_axis.len())
    }

    /// The x-axis.
    #[inline]
    pub fn x_axis(&self) -> &'a [f64] {
        self.x_axis
    }

    /// The y-axis.
    #[inline]
    pub fn y_axis(&self) -> &'a [f64] {
        self.y_axis
    }

    /// Returns the stored value at grid position `(i, j)`, if in range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let (m, n) = self.shape();
        (i < m && j < n).then(|| self.cell(i, j))
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> f64 {
        match self.grid {
            GridRef::Flat(values) => values[i * self.y_axis.len() + j],
            GridRef::Rows(rows) => rows[i][j],
        }
    }

    /// Evaluates the tabulated surface at `(x, y)`. Same contract as
    /// [`Table2D::evaluate`].
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        table2d::interpolate(self.x_axis, self.y_axis, x, y, |i, j| self.cell(i, j))
    }

    /// Evaluates every `(x, y)` query in `points`.
    #[cfg(feature = "parallel")]
    pub fn evaluate_many(&self, points: &[(f64, f64)]) -> Vec<f64> {
        points.par_iter().map(|&(x, y)| self.evaluate(x, y)).collect()
    }

    /// Evaluates every `(x, y)` query in `points`.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_many(&self, points: &[(f64, f64)]) -> Vec<f64> {
        points.iter().map(|&(x, y)| self.evaluate(x, y)).collect()
    }

    /// Copies the axes and grid into an owned [`Table2D`].
    pub fn to_table(&self) -> Table2D {
        let values = match self.grid {
            GridRef::Flat(values) => values.to_vec(),
            GridRef::Rows(rows) => rows.concat(),
        };
        Table2D::from_validated(self.x_axis.to_vec(), self.y_axis.to_vec(), values)
    }
}
