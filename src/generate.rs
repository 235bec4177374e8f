//! Random test matrices for sparsification benchmarks
//!
//! Benchmarks pair a mostly-dense operand with a mostly-sparse one. Both are
//! 0/1 matrices with an exact number of zeros, placed uniformly at random.

use rand::Rng;

use crate::{Matrix, Result, SparsifyError};

/// Random 0/1 matrix with `floor(rows * cols * percent_zeros)` zeros
///
/// Uses the thread-local generator; see [`random_binary_matrix_with_rng`]
/// for reproducible output.
///
/// # Errors
///
/// Returns `InvalidInput` if `rows` or `cols` is zero, if `rows * cols`
/// overflows, or if `percent_zeros` is not within `[0, 1]`.
///
/// # Example
///
/// ```
/// use escaso::random_binary_matrix;
///
/// let m = random_binary_matrix(10, 10, 0.5).unwrap();
/// assert_eq!(m.count_nonzero(), 50);
/// ```
pub fn random_binary_matrix(rows: usize, cols: usize, percent_zeros: f64) -> Result<Matrix<f32>> {
    random_binary_matrix_with_rng(&mut rand::rng(), rows, cols, percent_zeros)
}

/// [`random_binary_matrix`] drawing positions from `rng`
///
/// # Errors
///
/// Same conditions as [`random_binary_matrix`].
pub fn random_binary_matrix_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    percent_zeros: f64,
) -> Result<Matrix<f32>> {
    if !(0.0..=1.0).contains(&percent_zeros) {
        return Err(SparsifyError::InvalidInput(format!(
            "percent_zeros must be within [0, 1], got {percent_zeros}"
        )));
    }
    if rows == 0 || cols == 0 {
        return Err(SparsifyError::InvalidInput(format!(
            "matrix dimensions must be positive, got {rows}x{cols}"
        )));
    }
    let len = rows.checked_mul(cols).ok_or_else(|| {
        SparsifyError::InvalidInput(format!("matrix dimensions {rows}x{cols} overflow"))
    })?;

    let zeros = ((len as f64 * percent_zeros) as usize).min(len);
    let mut data = vec![1.0f32; len];
    for idx in rand::seq::index::sample(rng, len, zeros).into_iter() {
        data[idx] = 0.0;
    }

    Matrix::from_vec(rows, cols, data)
}
