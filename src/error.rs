//! Error types for sparsification operations

use thiserror::Error;

/// Result type for sparsification operations
pub type Result<T> = std::result::Result<T, SparsifyError>;

/// Errors that can occur during sparsification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SparsifyError {
    /// Requested count is negative or larger than the vector
    #[error("Count {n} out of range for vector of length {len}")]
    CountOutOfRange {
        /// Requested number of retained entries
        n: i64,
        /// Length of the vector
        len: usize,
    },

    /// Selected index does not address an element of the vector
    #[error("Index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds {
        /// The offending index
        index: i64,
        /// Length of the vector
        len: usize,
    },

    /// Input does not have dense matrix semantics (ragged rows, bad shape)
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Invalid input parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SparsifyError {
    /// Create a count error from an unsigned count
    pub(crate) fn count_out_of_range(n: usize, len: usize) -> Self {
        Self::CountOutOfRange {
            n: i64::try_from(n).unwrap_or(i64::MAX),
            len,
        }
    }

    /// Create a bounds error from an unsigned index
    pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}
