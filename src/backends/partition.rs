//! Quickselect backend
//!
//! Partitions an index buffer around the `n`-th largest value with
//! `select_nth_unstable_by`. Only the boundary matters, so no ordering work
//! is spent inside either side of the partition.

use super::{descending, SelectBackend};
use crate::Element;

/// Partition backend (default)
pub struct PartitionBackend;

impl SelectBackend for PartitionBackend {
    fn top_n_indices<T: Element>(values: &[T], n: usize) -> Vec<usize> {
        debug_assert!(n > 0 && n < values.len());

        let mut indices: Vec<usize> = (0..values.len()).collect();
        // After this call indices[..n] hold the n largest values, unordered.
        indices.select_nth_unstable_by(n - 1, |&a, &b| descending(values, a, b));
        indices.truncate(n);
        indices
    }
}
