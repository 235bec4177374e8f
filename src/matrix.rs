//! Dense row-major matrices for row-wise sparsification
//!
//! # Example
//!
//! ```
//! use escaso::Matrix;
//!
//! // Create a 2x3 matrix
//! let m: Matrix<f32> = Matrix::zeros(2, 3);
//! assert_eq!(m.rows(), 2);
//! assert_eq!(m.cols(), 3);
//! ```

use crate::{Backend, Element, Result, SparsifyError, TopNSelector};

/// A 2D matrix with row-major storage
///
/// Data is stored in row-major format (C-style), where consecutive elements
/// in memory belong to the same row. Every row is therefore a contiguous
/// slice and can be sparsified independently.
///
/// # Storage Layout
///
/// For a 2x3 matrix:
/// ```text
/// [[a, b, c],
///  [d, e, f]]
/// ```
/// Data is stored as: [a, b, c, d, e, f]
///
/// # Example
///
/// ```
/// use escaso::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(m.get(0, 1), Some(&2.0));
/// assert_eq!(m.get(1, 0), Some(&3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    backend: Backend,
}

impl<T: Element> Matrix<T> {
    /// Creates a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::ZERO; rows * cols],
            backend: Backend::select_best(),
        }
    }

    /// Creates a matrix from a vector of data in row-major order
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if `data.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(SparsifyError::InvalidMatrix(format!(
                "Data length {} does not match matrix dimensions {}x{}",
                data.len(),
                rows,
                cols
            )));
        }

        Ok(Matrix {
            rows,
            cols,
            data,
            backend: Backend::select_best(),
        })
    }

    /// Creates a matrix from a slice by copying the data
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if `data.len() != rows * cols`
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates a matrix from nested rows
    ///
    /// This is the runtime gate for data whose shape is not known statically,
    /// such as deserialized nested lists.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if the rows do not all have the same length
    ///
    /// # Example
    ///
    /// ```
    /// use escaso::{Matrix, SparsifyError};
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    ///
    /// let ragged = Matrix::from_rows(vec![vec![1, 2, 3], vec![4]]);
    /// assert!(matches!(ragged, Err(SparsifyError::InvalidMatrix(_))));
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SparsifyError::InvalidMatrix(format!(
                "Row {} has length {} but row 0 has length {}",
                i,
                row.len(),
                cols
            )));
        }

        let n_rows = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Self::from_vec(n_rows, cols, data)
    }

    /// Use a specific selection backend for this matrix
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend.resolve();
        self
    }

    /// Get the backend being used
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            self.data.get(row * self.cols + col)
        }
    }

    /// Gets a mutable reference to an element at (row, col)
    ///
    /// Returns `None` if indices are out of bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            let idx = row * self.cols + col;
            self.data.get_mut(idx)
        }
    }

    /// Returns row `row` as a slice, or `None` if out of bounds
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Returns row `row` as a mutable slice, or `None` if out of bounds
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&mut self.data[start..start + self.cols])
    }

    /// Returns a reference to the underlying data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable reference to the underlying data
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copies the matrix into nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|r| self.data[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }

    /// Number of entries that are not exactly zero
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|x| !x.is_zero()).count()
    }

    /// Keep the `n` largest-by-value entries of every row, zero the rest
    ///
    /// # Errors
    ///
    /// Returns `CountOutOfRange` if `n > self.cols()` and the matrix has rows
    ///
    /// # Example
    ///
    /// ```
    /// use escaso::Matrix;
    ///
    /// let mut m = Matrix::from_rows(vec![
    ///     vec![2, 3, 4, 5],
    ///     vec![-1, -2, -3, -4],
    ///     vec![0, 1, -1, 0],
    /// ])
    /// .unwrap();
    /// m.sparsify_top_n_in_place(2).unwrap();
    ///
    /// assert_eq!(
    ///     m.to_rows(),
    ///     vec![vec![0, 0, 4, 5], vec![-1, -2, 0, 0], vec![0, 1, 0, 0]]
    /// );
    /// ```
    pub fn sparsify_top_n_in_place(&mut self, n: usize) -> Result<()> {
        TopNSelector::with_backend(self.backend).sparsify_matrix_top_n(self, n)
    }

    /// Copy of this matrix with every row sparsified to its `n` largest entries
    ///
    /// # Errors
    ///
    /// Returns `CountOutOfRange` if `n > self.cols()` and the matrix has rows
    pub fn sparsified_top_n(&self, n: usize) -> Result<Self> {
        let mut out = self.clone();
        out.sparsify_top_n_in_place(n)?;
        Ok(out)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Generate a matrix of given dimensions with random values
    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f32>> {
        proptest::collection::vec(-100.0f32..100.0, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every row keeps at most n non-zero entries
        #[test]
        fn test_rowwise_nonzero_bound(
            m in matrix_strategy(6, 9),
            n in 0usize..=9
        ) {
            let top = m.sparsified_top_n(n).unwrap();
            prop_assert_eq!(top.shape(), m.shape());
            for r in 0..top.rows() {
                let row = top.row(r).unwrap();
                prop_assert!(row.iter().filter(|x| **x != 0.0).count() <= n);
            }
        }

        /// Property: rows are sparsified independently
        #[test]
        fn test_rows_match_vector_sparsification(
            m in matrix_strategy(4, 7),
            n in 0usize..=7
        ) {
            let top = m.clone().with_backend(Backend::Sort).sparsified_top_n(n).unwrap();
            for r in 0..m.rows() {
                let mut row = m.row(r).unwrap().to_vec();
                TopNSelector::with_backend(Backend::Sort).sparsify_top_n(&mut row, n).unwrap();
                prop_assert_eq!(top.row(r).unwrap(), row.as_slice());
            }
        }
    }
}
