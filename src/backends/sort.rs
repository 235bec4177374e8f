//! Full-sort backend
//!
//! This is the correctness reference: a stable descending sort of the index
//! buffer followed by taking the first `n`. Equal values keep index order,
//! so the lowest index wins every tie.

use super::{descending, SelectBackend};
use crate::Element;

/// Sort backend (reference, deterministic ties)
pub struct SortBackend;

impl SelectBackend for SortBackend {
    fn top_n_indices<T: Element>(values: &[T], n: usize) -> Vec<usize> {
        debug_assert!(n > 0 && n < values.len());

        let mut indices: Vec<usize> = (0..values.len()).collect();
        indices.sort_by(|&a, &b| descending(values, a, b));
        indices.truncate(n);
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_descending_order() {
        let v = [2.0f32, 4.0, 6.0, 1.0, 3.0, 5.0, -1.0];
        assert_eq!(SortBackend::top_n_indices(&v, 3), vec![2, 5, 1]);
    }

    #[test]
    fn test_lowest_index_wins_tie() {
        let v = [7i64, 1, 7, 7, 2];
        assert_eq!(SortBackend::top_n_indices(&v, 2), vec![0, 2]);
    }

    #[test]
    fn test_negative_values() {
        let v = [-1.0f64, -2.0, -3.0, -4.0];
        assert_eq!(SortBackend::top_n_indices(&v, 2), vec![0, 1]);
    }
}
