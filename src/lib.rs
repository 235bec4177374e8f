//! Escaso: Top-N Sparsification for Dense Vectors and Matrices
//!
//! **Escaso** (Spanish: "scarce") keeps the `n` largest-by-value entries of a
//! dense vector, or of every row of a dense matrix, and zeroes the rest in
//! place. Sparsified matrices are the left operand of the sparse
//! multiplication routines the benchmark harness compares.
//!
//! # Design Principles
//!
//! - **In place by default**: the caller's buffer is mutated, nothing is reallocated
//! - **Validate, then mutate**: a failing call never leaves a half-zeroed vector
//! - **By value, not magnitude**: `-10.0` is smaller than `0.0`
//! - **Pluggable selection**: partition, sort, and heap backends behind one trait
//!
//! # Quick Start
//!
//! ```rust
//! use escaso::{sparsify_top_n, Matrix};
//!
//! let mut v = [2.0, 4.0, 6.0, 1.0, 3.0, 5.0, -1.0];
//! sparsify_top_n(&mut v, 2).unwrap();
//! assert_eq!(v, [0.0, 0.0, 6.0, 0.0, 0.0, 5.0, 0.0]);
//!
//! let mut m = Matrix::from_rows(vec![vec![2, 3, 4, 5], vec![-1, -2, -3, -4]]).unwrap();
//! m.sparsify_top_n_in_place(2).unwrap();
//! assert_eq!(m.to_rows(), vec![vec![0, 0, 4, 5], vec![-1, -2, 0, 0]]);
//! ```

pub mod backends;
pub mod checked;
pub mod config;
pub mod element;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod select;
pub mod vector;

pub use checked::{checked_count, checked_indices, sparsify_top_n_checked, sparsify_with_checked_indices};
pub use config::SparsifyConfig;
pub use element::Element;
pub use error::{Result, SparsifyError};
pub use generate::{random_binary_matrix, random_binary_matrix_with_rng};
pub use matrix::Matrix;
pub use select::{
    indices_of_top_n, sparsify_matrix_top_n, sparsify_top_n, sparsify_with_selected_indices,
    TopNSelector,
};
pub use vector::Vector;

/// Top-N selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Quickselect partition (expected linear time)
    Partition,
    /// Stable full sort (reference, lowest index wins ties)
    Sort,
    /// Bounded min-heap (streaming, lowest index wins ties)
    Heap,
    /// Auto-select
    #[default]
    Auto,
}

impl Backend {
    /// Select the default strategy
    ///
    /// This is a convenience wrapper around `select_best_available_backend()`
    pub fn select_best() -> Self {
        select_best_available_backend()
    }

    /// Resolve `Auto` to a concrete strategy, leaving others unchanged
    pub fn resolve(self) -> Self {
        match self {
            Backend::Auto => select_best_available_backend(),
            other => other,
        }
    }
}

/// Select the strategy used when none is requested explicitly
///
/// Partitioning only orders the boundary between the top `n` and the rest,
/// which is all sparsification needs.
///
/// # Examples
///
/// ```
/// use escaso::{select_best_available_backend, Backend};
///
/// assert_eq!(select_best_available_backend(), Backend::Partition);
/// ```
pub fn select_best_available_backend() -> Backend {
    Backend::Partition
}
