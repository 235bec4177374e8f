//! Top-N selection and in-place sparsification
//!
//! The free functions use a default [`TopNSelector`]; build a selector from a
//! [`SparsifyConfig`] to pick a backend or tune parallelism.
//!
//! # Example
//!
//! ```
//! use escaso::{indices_of_top_n, sparsify_with_selected_indices};
//!
//! let mut v = [2, 4, 6, 1, 3, 5, -1];
//! let mut top = indices_of_top_n(&v, 2).unwrap();
//! top.sort_unstable();
//! assert_eq!(top, vec![2, 5]);
//!
//! sparsify_with_selected_indices(&mut v, &top).unwrap();
//! assert_eq!(v, [0, 0, 6, 0, 0, 5, 0]);
//! ```

use crate::backends::heap::HeapBackend;
use crate::backends::partition::PartitionBackend;
use crate::backends::sort::SortBackend;
use crate::backends::SelectBackend;
use crate::{Backend, Element, Matrix, Result, SparsifyConfig, SparsifyError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Computes top-N index sets and sparsifies vectors and matrices with them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopNSelector {
    backend: Backend,
    parallel_threshold: usize,
}

impl Default for TopNSelector {
    fn default() -> Self {
        Self::from_config(&SparsifyConfig::default())
    }
}

impl TopNSelector {
    /// Create a selector with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector with a specific backend (for benchmarking or testing)
    pub fn with_backend(backend: Backend) -> Self {
        Self::from_config(&SparsifyConfig::new().with_backend(backend))
    }

    /// Create a selector from a configuration, resolving `Backend::Auto`
    pub fn from_config(config: &SparsifyConfig) -> Self {
        Self {
            backend: config.backend.resolve(),
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Element count at which matrix rows are processed in parallel
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Indices of the `n` largest-by-value elements of `values`
    ///
    /// `n == 0` yields an empty set and `n == values.len()` yields every
    /// index without running the selection. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`SparsifyError::CountOutOfRange`] if `n > values.len()`.
    pub fn indices_of_top_n<T: Element>(&self, values: &[T], n: usize) -> Result<Vec<usize>> {
        let len = values.len();
        if n > len {
            return Err(SparsifyError::count_out_of_range(n, len));
        }
        if n == 0 {
            return Ok(Vec::new());
        }
        if n == len {
            return Ok((0..len).collect());
        }

        let indices = match self.backend {
            Backend::Sort => SortBackend::top_n_indices(values, n),
            Backend::Heap => HeapBackend::top_n_indices(values, n),
            Backend::Partition | Backend::Auto => PartitionBackend::top_n_indices(values, n),
        };
        Ok(indices)
    }

    /// Keep the `n` largest-by-value entries of `values`, zero the rest
    ///
    /// # Errors
    ///
    /// Returns [`SparsifyError::CountOutOfRange`] if `n > values.len()`; the
    /// slice is left untouched.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self, values), fields(len = values.len()))
    )]
    pub fn sparsify_top_n<T: Element>(&self, values: &mut [T], n: usize) -> Result<()> {
        let indices = self.indices_of_top_n(values, n)?;
        sparsify_with_selected_indices(values, &indices)
    }

    /// Apply [`sparsify_top_n`](Self::sparsify_top_n) to every row of `matrix`
    ///
    /// `n` is checked against the row length before any row is touched. With
    /// the `parallel` feature, matrices at or above the configured threshold
    /// are processed on the rayon pool, one task per row.
    ///
    /// # Errors
    ///
    /// Returns [`SparsifyError::CountOutOfRange`] if `n > matrix.cols()` and
    /// the matrix has at least one row.
    #[cfg_attr(feature = "tracing", instrument(skip(self, matrix), fields(dims = %format!("{}x{}", matrix.rows(), matrix.cols()))))]
    pub fn sparsify_matrix_top_n<T: Element>(&self, matrix: &mut Matrix<T>, n: usize) -> Result<()> {
        let (rows, cols) = matrix.shape();
        if rows == 0 {
            return Ok(());
        }
        if n > cols {
            return Err(SparsifyError::count_out_of_range(n, cols));
        }
        if cols == 0 {
            return Ok(());
        }

        #[cfg(feature = "parallel")]
        let use_parallel = rows * cols >= self.parallel_threshold;
        #[cfg(not(feature = "parallel"))]
        let use_parallel = false;

        if use_parallel {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;

                return matrix
                    .as_mut_slice()
                    .par_chunks_mut(cols)
                    .try_for_each(|row| self.sparsify_top_n(row, n));
            }
        }

        matrix
            .as_mut_slice()
            .chunks_mut(cols)
            .try_for_each(|row| self.sparsify_top_n(row, n))
    }
}

/// Indices of the `n` largest-by-value elements, using the default backend
///
/// # Errors
///
/// Returns [`SparsifyError::CountOutOfRange`] if `n > values.len()`.
pub fn indices_of_top_n<T: Element>(values: &[T], n: usize) -> Result<Vec<usize>> {
    TopNSelector::default().indices_of_top_n(values, n)
}

/// Keep only the entries at `indices`, overwrite every other entry with zero
///
/// An empty index set zeroes the whole slice. Duplicate indices are
/// harmless. All indices are validated before the slice is modified.
///
/// # Errors
///
/// Returns [`SparsifyError::IndexOutOfBounds`] for the first index that is
/// `>= values.len()`; the slice is left untouched.
///
/// # Examples
///
/// ```
/// use escaso::{sparsify_with_selected_indices, SparsifyError};
///
/// let mut v = [2.0, 4.0, 6.0];
/// assert_eq!(
///     sparsify_with_selected_indices(&mut v, &[42]),
///     Err(SparsifyError::IndexOutOfBounds { index: 42, len: 3 })
/// );
/// assert_eq!(v, [2.0, 4.0, 6.0]);
/// ```
pub fn sparsify_with_selected_indices<T: Element>(values: &mut [T], indices: &[usize]) -> Result<()> {
    if indices.is_empty() {
        values.fill(T::ZERO);
        return Ok(());
    }

    let len = values.len();
    if let Some(&index) = indices.iter().find(|&&i| i >= len) {
        return Err(SparsifyError::index_out_of_bounds(index, len));
    }

    // Snapshot survivors first; the restore must not read zeroed slots.
    let kept: Vec<(usize, T)> = indices.iter().map(|&i| (i, values[i])).collect();
    values.fill(T::ZERO);
    for (i, value) in kept {
        values[i] = value;
    }
    Ok(())
}

/// Keep the `n` largest-by-value entries of `values`, zero the rest
///
/// # Errors
///
/// Returns [`SparsifyError::CountOutOfRange`] if `n > values.len()`.
pub fn sparsify_top_n<T: Element>(values: &mut [T], n: usize) -> Result<()> {
    TopNSelector::default().sparsify_top_n(values, n)
}

/// Sparsify every row of `matrix` to its `n` largest-by-value entries
///
/// # Errors
///
/// Returns [`SparsifyError::CountOutOfRange`] if `n` exceeds the row length.
pub fn sparsify_matrix_top_n<T: Element>(matrix: &mut Matrix<T>, n: usize) -> Result<()> {
    TopNSelector::default().sparsify_matrix_top_n(matrix, n)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::backends::testing::{is_valid_index_set, satisfies_threshold};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_sparsify_keeps_at_most_n_original_values(
            data in prop::collection::vec(-1000.0f32..1000.0, 1..100),
            frac in 0.0f64..=1.0
        ) {
            let n = ((data.len() as f64) * frac) as usize;
            let mut v = data.clone();
            sparsify_top_n(&mut v, n).unwrap();

            let nonzero = v.iter().filter(|x| **x != 0.0).count();
            prop_assert!(nonzero <= n);
            for (after, before) in v.iter().zip(&data) {
                prop_assert!(*after == 0.0 || after == before);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_every_backend_satisfies_threshold(
            data in prop::collection::vec(-50i32..50, 2..80),
            frac in 0.0f64..1.0
        ) {
            let n = ((data.len() as f64) * frac) as usize;
            for backend in [Backend::Partition, Backend::Sort, Backend::Heap] {
                let top = TopNSelector::with_backend(backend).indices_of_top_n(&data, n).unwrap();
                prop_assert_eq!(top.len(), n);
                prop_assert!(is_valid_index_set(data.len(), &top));
                prop_assert!(satisfies_threshold(&data, &top));
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_invalid_index_never_mutates(
            data in prop::collection::vec(-100.0f64..100.0, 1..50),
            overshoot in 0usize..10
        ) {
            let mut v = data.clone();
            let bad = data.len() + overshoot;
            let result = sparsify_with_selected_indices(&mut v, &[0, bad]);
            prop_assert!(result.is_err());
            prop_assert_eq!(v, data);
        }
    }
}
