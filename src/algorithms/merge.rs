use std::cmp::Ordering;

use crate::SortValue;

/// Recursive merge sort: halve, sort each half, merge linearly.
pub fn merge_sort<T: SortValue>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(&left, &right)
}

/// Two-pointer merge. Ties take from the left half first, keeping the merge
/// stable.
fn merge<T: SortValue>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i].key_cmp(&right[j]) != Ordering::Greater {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
