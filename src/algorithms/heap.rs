use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::SortValue;

/// Adapter giving `BinaryHeap` the total order of `SortValue`.
struct TotalOrd<T: SortValue>(T);

impl<T: SortValue> PartialEq for TotalOrd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.key_cmp(&other.0) == Ordering::Equal
    }
}

impl<T: SortValue> Eq for TotalOrd<T> {}

impl<T: SortValue> PartialOrd for TotalOrd<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: SortValue> Ord for TotalOrd<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.key_cmp(&other.0)
    }
}

/// Heap sort via a binary min-heap: heapify all elements, then pop the root
/// until the heap drains, yielding ascending order.
pub fn heap_sort<T: SortValue>(values: &[T]) -> Vec<T> {
    let mut heap: BinaryHeap<Reverse<TotalOrd<T>>> =
        values.iter().map(|&value| Reverse(TotalOrd(value))).collect();

    let mut sorted = Vec::with_capacity(values.len());
    while let Some(Reverse(TotalOrd(value))) = heap.pop() {
        sorted.push(value);
    }
    sorted
}
