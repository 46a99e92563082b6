//! # sparr
//!
//! **Sparse, hash-map-backed alternatives to dense numeric arrays.**
//!
//! sparr provides three containers for data whose index space is large but
//! whose populated entries are few, interchangeable with dense slices and
//! carrying the arithmetic/set-algebra operator surface of array-like
//! types:
//!
//! - [`Indices`] - a sparse set of non-negative integer keys
//! - [`SparseVector`] - a sparse mapping from integer key to numeric value,
//!   with absent keys reading as zero
//! - [`SparseMatrix`] - a defaulting mapping from an arbitrary row key to a
//!   sparse vector, with COO marshaling, transpose, and matrix
//!   multiplication
//!
//! plus the grouping engine ([`arggroupby`], [`groupby`]) that underlies
//! bulk COO construction.
//!
//! ## Quick Start
//!
//! ```
//! use sparr::prelude::*;
//!
//! let mut vec: SparseVector<f64> = SparseVector::from_keys(0..3, 1.0);
//! *vec.entry(0) += 1.5;
//! assert_eq!(vec.get(0), 2.5);
//!
//! let other = SparseVector::from_keys([2, 3].into_iter(), 2.0);
//! assert_eq!(vec.dot(&other), 2.0);
//!
//! let mat = SparseMatrix::<u64, f64>::fromcoo(
//!     &[0, 0, 1, 1],
//!     &[1, 2, 1, 2],
//!     &[1.0, 2.0, 3.0, 4.0],
//! )?;
//! assert_eq!(mat.transpose().len(), 2);
//! # Ok::<(), sparr::error::Error>(())
//! ```
//!
//! ## Semantics
//!
//! - Iteration order is the internal hash-map order: deterministic for a
//!   given construction history, but matching neither insertion nor
//!   numeric order.
//! - Reading an absent vector key is a pure lookup; the mutating
//!   [`SparseVector::entry`] accessor is the only path that vivifies.
//! - Single-threaded and synchronous throughout; share across threads only
//!   with external locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod group;
pub mod indices;
pub mod matrix;
pub mod vector;

pub use group::{arggroupby, groupby, groupby2};
pub use indices::Indices;
pub use matrix::{AxisSum, SparseMatrix};
pub use vector::{Operand, SparseVector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::group::{arggroupby, groupby, groupby2, GroupKey};
    pub use crate::indices::Indices;
    pub use crate::matrix::{AxisSum, SparseMatrix};
    pub use crate::vector::{Operand, SparseVector};
}
