//! Bounded-heap backend
//!
//! Streams the values once while a min-heap holds the `n` best candidates
//! seen so far. The heap root is the weakest candidate and is evicted when
//! a strictly better value arrives.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::SelectBackend;
use crate::Element;

/// Heap backend (streaming, deterministic ties)
pub struct HeapBackend;

/// Candidate ranked by value, then by lower index
struct Candidate<T> {
    value: T,
    index: usize,
}

impl<T: Element> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .rank_cmp(&other.value)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl<T: Element> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Element> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Element> Eq for Candidate<T> {}

impl SelectBackend for HeapBackend {
    fn top_n_indices<T: Element>(values: &[T], n: usize) -> Vec<usize> {
        debug_assert!(n > 0 && n < values.len());

        let mut heap: BinaryHeap<Reverse<Candidate<T>>> = BinaryHeap::with_capacity(n + 1);
        for (index, &value) in values.iter().enumerate() {
            let candidate = Candidate { value, index };
            if heap.len() < n {
                heap.push(Reverse(candidate));
            } else if let Some(Reverse(weakest)) = heap.peek() {
                if candidate > *weakest {
                    heap.pop();
                    heap.push(Reverse(candidate));
                }
            }
        }
        heap.into_iter().map(|Reverse(c)| c.index).collect()
    }
}
