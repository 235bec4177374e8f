//! Owned dense vector with top-N sparsification

use crate::select::sparsify_with_selected_indices;
use crate::{Backend, Element, Result, TopNSelector};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Dense vector that remembers which selection backend to use
///
/// # Examples
///
/// ```
/// use escaso::Vector;
///
/// let mut v = Vector::from_slice(&[2.0, 4.0, 6.0, 1.0, 3.0, 5.0, -1.0]);
/// v.sparsify_top_n_in_place(3).unwrap();
///
/// assert_eq!(v.as_slice(), &[0.0, 4.0, 6.0, 0.0, 0.0, 5.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
    backend: Backend,
}

impl<T> Vector<T>
where
    T: Element,
{
    /// Create vector from slice using the default backend
    ///
    /// # Examples
    ///
    /// ```
    /// use escaso::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.len(), 4);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Create vector taking ownership of `data`
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            backend: crate::select_best_available_backend(),
        }
    }

    /// Create vector with specific backend (for benchmarking or testing)
    ///
    /// # Examples
    ///
    /// ```
    /// use escaso::{Backend, Vector};
    ///
    /// let v = Vector::from_slice_with_backend(&[1.0, 2.0], Backend::Heap);
    /// assert_eq!(v.backend(), Backend::Heap);
    /// ```
    pub fn from_slice_with_backend(data: &[T], backend: Backend) -> Self {
        Self {
            data: data.to_vec(),
            backend: backend.resolve(),
        }
    }

    /// Get underlying data as slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get underlying data as mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the vector, returning its data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if vector is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use escaso::Vector;
    ///
    /// let v1: Vector<f32> = Vector::from_slice(&[]);
    /// assert!(v1.is_empty());
    ///
    /// let v2 = Vector::from_slice(&[1.0]);
    /// assert!(!v2.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Number of entries that are not exactly zero
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|x| !x.is_zero()).count()
    }

    fn selector(&self) -> TopNSelector {
        TopNSelector::with_backend(self.backend)
    }

    /// Indices of the `n` largest-by-value entries, in unspecified order
    ///
    /// # Errors
    ///
    /// Returns [`SparsifyError::CountOutOfRange`](crate::SparsifyError::CountOutOfRange)
    /// if `n > self.len()`.
    pub fn top_n_indices(&self, n: usize) -> Result<Vec<usize>> {
        self.selector().indices_of_top_n(&self.data, n)
    }

    /// Zero every entry except the `n` largest, mutating this vector
    ///
    /// # Errors
    ///
    /// Returns [`SparsifyError::CountOutOfRange`](crate::SparsifyError::CountOutOfRange)
    /// if `n > self.len()`; the vector is left untouched.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len(), backend = ?self.backend)))]
    pub fn sparsify_top_n_in_place(&mut self, n: usize) -> Result<()> {
        self.selector().sparsify_top_n(&mut self.data, n)
    }

    /// Copy of this vector with every entry except the `n` largest zeroed
    ///
    /// # Examples
    ///
    /// ```
    /// use escaso::Vector;
    ///
    /// let v = Vector::from_slice(&[-1, -2, -3, -4]);
    /// let top = v.sparsified_top_n(2).unwrap();
    ///
    /// assert_eq!(top.as_slice(), &[-1, -2, 0, 0]);
    /// assert_eq!(v.as_slice(), &[-1, -2, -3, -4]);
    /// ```
    pub fn sparsified_top_n(&self, n: usize) -> Result<Self> {
        let mut out = self.clone();
        out.sparsify_top_n_in_place(n)?;
        Ok(out)
    }

    /// Keep only the entries at `indices`, mutating this vector
    ///
    /// # Errors
    ///
    /// Returns [`SparsifyError::IndexOutOfBounds`](crate::SparsifyError::IndexOutOfBounds)
    /// if any index is `>= self.len()`; the vector is left untouched.
    pub fn sparsify_with_selected_indices(&mut self, indices: &[usize]) -> Result<()> {
        sparsify_with_selected_indices(&mut self.data, indices)
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // Property test: n == len leaves the vector bit-for-bit unchanged
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_full_count_is_identity(
            a in prop::collection::vec(-1000.0f32..1000.0, 0..100)
        ) {
            let mut v = Vector::from_slice(&a);
            let len = v.len();
            v.sparsify_top_n_in_place(len).unwrap();

            for (x, y) in v.as_slice().iter().zip(&a) {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    // Property test: n == 0 zeroes everything
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_zero_count_zeroes(
            a in prop::collection::vec(-1000i64..1000, 0..100)
        ) {
            let mut v = Vector::from_slice(&a);
            v.sparsify_top_n_in_place(0).unwrap();
            prop_assert_eq!(v.count_nonzero(), 0);
            prop_assert_eq!(v.len(), a.len());
        }
    }

    // Property test: sparsifying twice equals sparsifying once
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_idempotent_when_n_within_nonzero_count(
            a in prop::collection::vec(1.0f64..1000.0, 1..100),
            frac in 0.0f64..=1.0
        ) {
            let n = ((a.len() as f64) * frac) as usize;
            let once = Vector::from_slice_with_backend(&a, Backend::Sort)
                .sparsified_top_n(n)
                .unwrap();
            let twice = once.sparsified_top_n(n).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
