//! # tabula-table
//!
//! Lookup tables that approximate expensive functions from precomputed
//! samples.
//!
//! Build a table once from sample data, then query it as often as needed.
//! Tables are immutable after construction, so they are `Send + Sync` and can
//! be shared across threads without locking.
//!
//! # Table Types
//!
//! - [`Table1D`] - `y = f(x)` with linear interpolation
//! - [`Table2D`] - `z = f(x, y)` with bilinear interpolation
//! - [`Table1DRef`], [`Table2DRef`] - the same lookups over borrowed slices
//!
//! Both clamp out-of-range queries to the nearest boundary sample instead of
//! extrapolating, and both return stored samples exactly when queried on a
//! node.
//!
//! # Usage
//!
//! ```rust
//! use tabula_table::{Table1D, Table2D};
//!
//! let curve = Table1D::from_fn([0.0, 1.0, 2.0, 4.0], |x| x.sqrt())?;
//! let y = curve.evaluate(3.0);
//! assert!(y > 1.414 && y < 2.0);
//!
//! let surface = Table2D::from_fn(vec![0.0, 1.0], vec![0.0, 1.0], |x, y| x * y)?;
//! assert_eq!(surface.evaluate(0.5, 1.0), 0.5);
//! # Ok::<(), tabula_table::TableError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Batch evaluation via rayon (enabled by default)
//!
//! # Dependencies
//!
//! - [`tabula-math`] - Bracketing and interpolation primitives
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Construction diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod axis;
mod error;
mod table1d;
mod table2d;
mod view;

pub use axis::Axis;
pub use error::{TableError, TableResult};
pub use table1d::Table1D;
pub use table2d::Table2D;
pub use view::{Table1DRef, Table2DRef};
pub use tabula_math::Bracket;
