//! Table construction error types.
//!
//! Every failure mode belongs to construction. Once a table exists its
//! `evaluate` methods are infallible: out-of-range queries clamp instead of
//! erroring.
//!
//! # Usage
//!
//! ```rust
//! use tabula_table::{Table1D, TableError};
//!
//! let err = Table1D::new([(1.0, 2.0), (1.0, 3.0)]).unwrap_err();
//! assert!(matches!(err, TableError::DuplicateAbscissa { x } if x == 1.0));
//! ```

use thiserror::Error;

/// Result type for table construction.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while building a table.
///
/// # Categories
///
/// - **Emptiness**: [`Empty`](TableError::Empty)
/// - **Ordering**: [`DuplicateAbscissa`](TableError::DuplicateAbscissa),
///   [`UnsortedOrDuplicateAxis`](TableError::UnsortedOrDuplicateAxis)
/// - **Shape**: [`GridShapeMismatch`](TableError::GridShapeMismatch),
///   [`GridLengthMismatch`](TableError::GridLengthMismatch),
///   [`LengthMismatch`](TableError::LengthMismatch)
/// - **Values**: [`NonFinite`](TableError::NonFinite)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// No samples or axis entries were supplied.
    #[error("cannot build a table from an empty {what}")]
    Empty {
        /// Which input was empty (e.g. `"samples"`, `"x-axis"`)
        what: &'static str,
    },

    /// Two 1D samples share the same abscissa.
    #[error("duplicate abscissa x = {x}")]
    DuplicateAbscissa {
        /// The repeated x value
        x: f64,
    },

    /// Grid dimensions do not match the axis lengths.
    #[error("grid shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    GridShapeMismatch {
        /// `(len(x-axis), len(y-axis))`
        expected: (usize, usize),
        /// Rows supplied and the length of the first row that disagreed
        got: (usize, usize),
    },

    /// A flattened grid has the wrong number of cells.
    #[error("grid length mismatch: expected {expected} cells, got {got}")]
    GridLengthMismatch {
        /// `len(x-axis) * len(y-axis)`
        expected: usize,
        /// Cells supplied
        got: usize,
    },

    /// Axis values are not strictly increasing.
    #[error("{axis} is not strictly increasing at index {index}: {prev} followed by {value}")]
    UnsortedOrDuplicateAxis {
        /// Axis name
        axis: &'static str,
        /// Index of the offending value
        index: usize,
        /// Value preceding the offending one
        prev: f64,
        /// The offending value
        value: f64,
    },

    /// Parallel abscissa and ordinate inputs differ in length.
    #[error("length mismatch: {xs} x values but {ys} y values")]
    LengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// An input contains NaN or an infinity.
    #[error("{what}[{index}] is not finite: {value}")]
    NonFinite {
        /// Which input held the value
        what: &'static str,
        /// Position within that input
        index: usize,
        /// The offending value
        value: f64,
    },
}

impl TableError {
    /// Creates a [`TableError::Empty`] error.
    #[inline]
    pub fn empty(what: &'static str) -> Self {
        Self::Empty { what }
    }

    /// Creates a [`TableError::NonFinite`] error.
    #[inline]
    pub fn non_finite(what: &'static str, index: usize, value: f64) -> Self {
        Self::NonFinite { what, index, value }
    }

    /// Returns `true` if the grid did not fit the axes.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::GridShapeMismatch { .. } | Self::GridLengthMismatch { .. } | Self::LengthMismatch { .. }
        )
    }

    /// Returns `true` if the input had repeated or misordered coordinates.
    #[inline]
    pub fn is_ordering_error(&self) -> bool {
        matches!(self, Self::DuplicateAbscissa { .. } | Self::UnsortedOrDuplicateAxis { .. })
    }
}

/// Returns the first non-finite value in `values` as an error.
pub(crate) fn ensure_finite(what: &'static str, values: &[f64]) -> TableResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TableError::non_finite(what, index, values[index])),
        None => Ok(()),
    }
}
