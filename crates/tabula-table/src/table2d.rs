//! 2-dimensional lookup table.
//!
//! A [`Table2D`] stands in for an expensive function of two variables. It
//! stores a rectangular grid of values sampled over an x-axis and a y-axis
//! and answers queries by bilinear interpolation: one linear pass along x at
//! the two bracketing y rows, then a linear pass along y between the two
//! intermediate results.
//!
//! ```text
//!         x0          x1
//!  y1   z(0,1) ----- z(1,1)     z_j1 = blend_x(z(0,1), z(1,1))
//!         |     *      |
//!  y0   z(0,0) ----- z(1,0)     z_j0 = blend_x(z(0,0), z(1,0))
//!
//!  result = blend_y(z_j0, z_j1)
//! ```
//!
//! Each axis clamps independently, so a query outside one axis range still
//! interpolates along the other.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use tabula_math::bracket;

use crate::axis::Axis;
use crate::error::{ensure_finite, TableError, TableResult};
use crate::view::{GridRef, Table2DRef};

/// A 2-dimensional lookup table.
///
/// # Structure
///
/// - `m` x-axis nodes, `n` y-axis nodes
/// - `m * n` values stored x-major: cell `(i, j)` lives at `i * n + j`
/// - Bilinear interpolation inside the grid, per-axis clamping outside it
///
/// # Example
///
/// ```rust
/// use tabula_table::Table2D;
///
/// let table = Table2D::new(
///     vec![0.0, 10.0],
///     vec![0.0, 10.0],
///     vec![
///         vec![0.0, 20.0],  // x = 0
///         vec![10.0, 30.0], // x = 10
///     ],
/// ).unwrap();
///
/// assert_eq!(table.evaluate(5.0, 5.0), 15.0);
/// assert_eq!(table.evaluate(-5.0, -5.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table2D {
    x_axis: Axis,
    y_axis: Axis,
    /// Grid values, x-major.
    values: Vec<f64>,
}

impl Table2D {
    /// Builds a table from two axes and a nested grid.
    ///
    /// `grid[i][j]` is the value at `(x_axis[i], y_axis[j])`.
    ///
    /// # Errors
    ///
    /// - [`TableError::Empty`] if either axis is empty
    /// - [`TableError::NonFinite`] if an axis or grid value is NaN or infinite
    /// - [`TableError::UnsortedOrDuplicateAxis`] if an axis is not strictly increasing
    /// - [`TableError::GridShapeMismatch`] if the grid is not `len(x) x len(y)`
    pub fn new(x_axis: Vec<f64>, y_axis: Vec<f64>, grid: Vec<Vec<f64>>) -> TableResult<Self> {
        trace!(m = x_axis.len(), n = y_axis.len(), rows = grid.len(), "Table2D::new");
        let x_axis = Axis::named(x_axis, "x-axis")?;
        let y_axis = Axis::named(y_axis, "y-axis")?;
        let (m, n) = (x_axis.len(), y_axis.len());

        if grid.len() != m {
            let cols = grid.first().map_or(0, Vec::len);
            return Err(TableError::GridShapeMismatch { expected: (m, n), got: (grid.len(), cols) });
        }
        if let Some(row) = grid.iter().find(|row| row.len() != n) {
            return Err(TableError::GridShapeMismatch { expected: (m, n), got: (m, row.len()) });
        }

        Self::from_parts(x_axis, y_axis, grid.concat())
    }

    /// Builds a table from two axes and an x-major flattened grid.
    ///
    /// `values[i * len(y) + j]` is the value at `(x_axis[i], y_axis[j])`.
    ///
    /// # Errors
    ///
    /// [`TableError::GridLengthMismatch`] if `values.len() != len(x) * len(y)`,
    /// plus the axis and value errors of [`Table2D::new`].
    pub fn from_flat(x_axis: Vec<f64>, y_axis: Vec<f64>, values: Vec<f64>) -> TableResult<Self> {
        trace!(m = x_axis.len(), n = y_axis.len(), cells = values.len(), "Table2D::from_flat");
        let x_axis = Axis::named(x_axis, "x-axis")?;
        let y_axis = Axis::named(y_axis, "y-axis")?;

        let expected = x_axis.len() * y_axis.len();
        if values.len() != expected {
            return Err(TableError::GridLengthMismatch { expected, got: values.len() });
        }

        Self::from_parts(x_axis, y_axis, values)
    }

    /// Samples `f` once at every grid node and tabulates the results.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabula_table::Table2D;
    ///
    /// let table = Table2D::from_fn(
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![0.0, 1.0],
    ///     |x, y| x + 10.0 * y,
    /// ).unwrap();
    /// assert_eq!(table.evaluate(1.5, 0.5), 6.5);
    /// ```
    pub fn from_fn<F>(x_axis: Vec<f64>, y_axis: Vec<f64>, mut f: F) -> TableResult<Self>
    where
        F: FnMut(f64, f64) -> f64,
    {
        let x_axis = Axis::named(x_axis, "x-axis")?;
        let y_axis = Axis::named(y_axis, "y-axis")?;

        let mut values = Vec::with_capacity(x_axis.len() * y_axis.len());
        for &x in x_axis.as_slice() {
            for &y in y_axis.as_slice() {
                values.push(f(x, y));
            }
        }

        Self::from_parts(x_axis, y_axis, values)
    }

    /// Wraps axes and grid already validated by a borrowed table.
    pub(crate) fn from_validated(x_axis: Vec<f64>, y_axis: Vec<f64>, values: Vec<f64>) -> Self {
        Self { x_axis: Axis::from_validated(x_axis), y_axis: Axis::from_validated(y_axis), values }
    }

    fn from_parts(x_axis: Axis, y_axis: Axis, values: Vec<f64>) -> TableResult<Self> {
        ensure_finite("grid", &values)?;
        debug!(m = x_axis.len(), n = y_axis.len(), "Built Table2D");
        Ok(Self { x_axis, y_axis, values })
    }

    /// Grid dimensions as `(len(x-axis), len(y-axis))`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.x_axis.len(), self.y_axis.len())
    }

    /// The x-axis.
    #[inline]
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// The y-axis.
    #[inline]
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Flattened x-major grid values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the stored value at grid position `(i, j)`, if in range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let (m, n) = self.shape();
        (i < m && j < n).then(|| self.cell(i, j))
    }

    /// Returns the flat index for grid position `(i, j)`.
    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.y_axis.len() + j
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> f64 {
        self.values[self.index(i, j)]
    }

    /// Evaluates the tabulated surface at `(x, y)`.
    ///
    /// Each coordinate clamps to its axis range. A coordinate landing exactly
    /// on a node (or on a single-node axis) skips interpolation along that
    /// axis, so exact grid hits return the stored value bit for bit.
    #[inline]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        interpolate(self.x_axis.as_slice(), self.y_axis.as_slice(), x, y, |i, j| self.cell(i, j))
    }

    /// Borrows this table as a [`Table2DRef`] over its flattened grid.
    #[inline]
    pub fn view(&self) -> Table2DRef<'_> {
        Table2DRef::from_parts(self.x_axis.as_slice(), self.y_axis.as_slice(), GridRef::Flat(&self.values))
    }

    /// Evaluates every `(x, y)` query in `points`.
    ///
    /// Uses rayon for parallel processing when the `parallel` feature is enabled.
    #[cfg(feature = "parallel")]
    pub fn evaluate_many(&self, points: &[(f64, f64)]) -> Vec<f64> {
        trace!(queries = points.len(), "Table2D::evaluate_many");
        points.par_iter().map(|&(x, y)| self.evaluate(x, y)).collect()
    }

    /// Evaluates every `(x, y)` query in `points`.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_many(&self, points: &[(f64, f64)]) -> Vec<f64> {
        trace!(queries = points.len(), "Table2D::evaluate_many");
        points.iter().map(|&(x, y)| self.evaluate(x, y)).collect()
    }
}

/// Bilinear lookup over validated axes, reading grid cells through `cell`.
#[inline]
pub(crate) fn interpolate<F>(x_axis: &[f64], y_axis: &[f64], x: f64, y: f64, cell: F) -> f64
where
    F: Fn(usize, usize) -> f64,
{
    let bx = bracket(x_axis, x);
    let by = bracket(y_axis, y);

    let z_j0 = bx.blend(cell(bx.lo, by.lo), cell(bx.hi, by.lo));
    if by.is_exact() {
        return z_j0;
    }
    let z_j1 = bx.blend(cell(bx.lo, by.hi), cell(bx.hi, by.hi));
    by.blend(z_j0, z_j1)
}
