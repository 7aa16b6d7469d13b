use std::cmp::Ordering;

use rand::Rng;

use crate::SortValue;

/// Recursive quick sort with a uniformly random pivot and three-way
/// partitioning.
///
/// The random pivot keeps sorted and reverse-sorted inputs off the quadratic
/// path; the equal group is emitted once and never recursed on, so inputs
/// heavy with duplicates still terminate.
pub fn quick_sort<T: SortValue>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let pivot = values[rand::rng().random_range(0..values.len())];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for &value in values {
        match value.key_cmp(&pivot) {
            Ordering::Less => less.push(value),
            Ordering::Equal => equal.push(value),
            Ordering::Greater => greater.push(value),
        }
    }

    let mut sorted = quick_sort(&less);
    sorted.extend(equal);
    sorted.extend(quick_sort(&greater));
    sorted
}
