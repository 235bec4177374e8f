//! Selection backends for top-N index computation
//!
//! Every backend answers the same question: which `n` positions of a slice
//! hold its largest values. All backends implement [`SelectBackend`] so they
//! can be swapped freely and cross-checked against each other.
//!
//! # Backends
//!
//! - `partition`: quickselect via `select_nth_unstable_by` (expected O(L), default)
//! - `sort`: stable full sort of the index buffer (O(L log L), reference)
//! - `heap`: bounded min-heap streamed over the values (O(L log n))
//!
//! # Ties
//!
//! Any backend may choose any `n` elements whose values are all >= every
//! non-selected value. `sort` and `heap` prefer the lower index among
//! equal values; `partition` makes no promise.

pub mod heap;
pub mod partition;
pub mod sort;

use std::cmp::Ordering;

use crate::Element;

/// Backend trait defining top-N index selection
///
/// Callers guarantee `0 < n < values.len()`; the degenerate counts are
/// handled by [`crate::select`] before a backend is reached.
pub trait SelectBackend {
    /// Indices of the `n` largest-by-value elements, in unspecified order
    fn top_n_indices<T: Element>(values: &[T], n: usize) -> Vec<usize>;
}

/// Descending order by value, used to put the largest elements first
#[inline]
pub(crate) fn descending<T: Element>(values: &[T], a: usize, b: usize) -> Ordering {
    values[b].rank_cmp(&values[a])
}
