//! # tabula-math
//!
//! Math primitives for tabulated function approximation.
//!
//! - Interpolation utilities ([`lerp`], [`clamp`])
//! - The bracketing primitive ([`bracket`], [`Bracket`]) shared by every
//!   table dimension
//!
//! # Usage
//!
//! ```rust
//! use tabula_math::bracket;
//!
//! let xs = [0.0, 10.0, 20.0];
//! let ys = [0.0, 100.0, 400.0];
//!
//! let b = bracket(&xs, 15.0);
//! assert_eq!(b.blend(ys[b.lo], ys[b.hi]), 250.0);
//! ```
//!
//! # Used By
//!
//! - `tabula-table` - 1D and 2D lookup tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bracket;
mod interp;

pub use bracket::*;
pub use interp::*;
