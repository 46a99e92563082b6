//! Error types for sparr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using sparr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparr operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Negative key where a non-negative integer key is required
    #[error("Negative key {key}: keys must be non-negative integers")]
    NegativeKey {
        /// The offending key
        key: i64,
    },

    /// Parallel arrays of mismatched length
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Dense length too short to hold every present key
    #[error("Dense length {len} too short: requires at least {required}")]
    DenseLength {
        /// Requested length
        len: usize,
        /// Minimum length that would fit the maximum key
        required: usize,
    },

    /// Value not representable in the requested element type
    #[error("Cannot cast {value} from {from} to {to}")]
    ValueCast {
        /// The value that failed to convert, widened to f64
        value: f64,
        /// Source dtype
        from: DType,
        /// Target dtype
        to: DType,
    },

    /// Invalid axis for a reduction
    #[error("Invalid axis {axis} for {ndim}-dimensional container")]
    InvalidAxis {
        /// The invalid axis
        axis: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Reduction over an empty container
    #[error("Cannot compute {op} of an empty vector")]
    EmptyReduction {
        /// The operation name
        op: &'static str,
    },
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Create an empty reduction error
    pub fn empty_reduction(op: &'static str) -> Self {
        Self::EmptyReduction { op }
    }
}
