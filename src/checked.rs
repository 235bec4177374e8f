//! Validation for counts and indices from untyped sources
//!
//! The core API takes `usize`, so a negative count or index cannot reach it.
//! Values parsed from command lines or deserialized payloads arrive signed;
//! these helpers turn them into the same errors the core reports.

use crate::select::{sparsify_top_n, sparsify_with_selected_indices};
use crate::{Element, Result, SparsifyError};

/// Validate a signed count against a vector length
///
/// # Errors
///
/// Returns [`SparsifyError::CountOutOfRange`] if `n < 0` or `n > len`.
///
/// # Examples
///
/// ```
/// use escaso::{checked_count, SparsifyError};
///
/// assert_eq!(checked_count(2, 3), Ok(2));
/// assert_eq!(
///     checked_count(-1, 3),
///     Err(SparsifyError::CountOutOfRange { n: -1, len: 3 })
/// );
/// ```
pub fn checked_count(n: i64, len: usize) -> Result<usize> {
    usize::try_from(n)
        .ok()
        .filter(|&count| count <= len)
        .ok_or(SparsifyError::CountOutOfRange { n, len })
}

/// Validate signed indices against a vector length
///
/// # Errors
///
/// Returns [`SparsifyError::IndexOutOfBounds`] for the first index that is
/// negative or `>= len`.
pub fn checked_indices(indices: &[i64], len: usize) -> Result<Vec<usize>> {
    indices
        .iter()
        .map(|&index| {
            usize::try_from(index)
                .ok()
                .filter(|&i| i < len)
                .ok_or(SparsifyError::IndexOutOfBounds { index, len })
        })
        .collect()
}

/// [`sparsify_top_n`] with a signed count
///
/// # Errors
///
/// Returns [`SparsifyError::CountOutOfRange`] if `n < 0` or `n > values.len()`.
pub fn sparsify_top_n_checked<T: Element>(values: &mut [T], n: i64) -> Result<()> {
    let n = checked_count(n, values.len())?;
    sparsify_top_n(values, n)
}

/// [`sparsify_with_selected_indices`] with signed indices
///
/// Every index is validated before the slice is modified.
///
/// # Errors
///
/// Returns [`SparsifyError::IndexOutOfBounds`] if any index is negative or
/// `>= values.len()`.
pub fn sparsify_with_checked_indices<T: Element>(values: &mut [T], indices: &[i64]) -> Result<()> {
    let indices = checked_indices(indices, values.len())?;
    sparsify_with_selected_indices(values, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f32; 7] = [2.0, 4.0, 6.0, 1.0, 3.0, 5.0, -1.0];

    #[test]
    fn test_checked_count_valid_range() {
        assert_eq!(checked_count(0, 7), Ok(0));
        assert_eq!(checked_count(7, 7), Ok(7));
    }

    #[test]
    fn test_checked_count_negative() {
        assert_eq!(
            checked_count(-1, 3),
            Err(SparsifyError::CountOutOfRange { n: -1, len: 3 })
        );
    }

    #[test]
    fn test_checked_count_too_large() {
        assert_eq!(
            checked_count(42, 3),
            Err(SparsifyError::CountOutOfRange { n: 42, len: 3 })
        );
    }

    #[test]
    fn test_checked_indices_negative() {
        assert_eq!(
            checked_indices(&[-1, -2, 4], 7),
            Err(SparsifyError::IndexOutOfBounds { index: -1, len: 7 })
        );
    }

    #[test]
    fn test_checked_indices_valid() {
        assert_eq!(checked_indices(&[2, 5], 7), Ok(vec![2, 5]));
        assert_eq!(checked_indices(&[], 0), Ok(vec![]));
    }

    #[test]
    fn test_sparsify_top_n_checked_negative_leaves_vector() {
        let mut v = SAMPLE;
        assert_eq!(
            sparsify_top_n_checked(&mut v, -1),
            Err(SparsifyError::CountOutOfRange { n: -1, len: 7 })
        );
        assert_eq!(v, SAMPLE);
    }

    #[test]
    fn test_sparsify_top_n_checked_positive() {
        let mut v = SAMPLE;
        sparsify_top_n_checked(&mut v, 2).unwrap();
        assert_eq!(v, [0.0, 0.0, 6.0, 0.0, 0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_sparsify_with_checked_indices_negative() {
        let mut v = SAMPLE;
        assert!(sparsify_with_checked_indices(&mut v, &[-1, -2, 4]).is_err());
        assert_eq!(v, SAMPLE);
    }

    #[test]
    fn test_sparsify_with_checked_indices_out_of_bounds() {
        let mut v = SAMPLE;
        assert_eq!(
            sparsify_with_checked_indices(&mut v, &[42]),
            Err(SparsifyError::IndexOutOfBounds { index: 42, len: 7 })
        );
        assert_eq!(v, SAMPLE);
    }

    #[test]
    fn test_sparsify_with_checked_indices_empty() {
        let mut v = SAMPLE;
        sparsify_with_checked_indices(&mut v, &[]).unwrap();
        assert_eq!(v, [0.0; 7]);
    }
}
